//! WhatsApp message-header parsing.
//!
//! Exports from WhatsApp for iOS write one message per line:
//!
//! ```text
//! [1/2/24, 09:00:00] Alice: Hello there
//! [1/2/24, 9:05:12 p. m.] Bob: See you: tomorrow
//! ```
//!
//! The date is day-first with a two-digit year, the time always carries
//! seconds and an optional am/pm marker may follow it inside the bracket,
//! with or without periods and in any case.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// `[D/M/YY, H:MM:SS<marker>] Sender: Content`
///
/// Groups: day, month, year, hour, minute, second, meridiem letter,
/// sender, content.
const HEADER_PATTERN: &str = r"^[\u{200E}\u{FEFF}]?\s*\[([0-9]{1,2})/([0-9]{1,2})/([0-9]{2}),\s*([0-9]{1,2}):([0-9]{2}):([0-9]{2})(?:\s*([AaPp])\.?\s?[Mm]\.?)?\]\s+([^:]+):\s*(.+)$";

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// Twelve-hour clock period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "a" | "A" => Some(Meridiem::Am),
            "p" | "P" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    /// Folds a 12-hour clock hour into 24-hour representation.
    ///
    /// Only the two boundary cases move: `12 am` becomes hour 0 and any pm
    /// hour other than 12 gains twelve hours. Out-of-range hours pass
    /// through and are rejected by calendar construction.
    pub fn to_24h(self, hour: u32) -> u32 {
        match self {
            Meridiem::Pm if hour != 12 => hour + 12,
            Meridiem::Am if hour == 12 => 0,
            _ => hour,
        }
    }
}

/// The pieces of a matched message line, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader<'a> {
    pub timestamp: NaiveDateTime,
    /// Trimmed sender name.
    pub sender: &'a str,
    /// Trimmed message body.
    pub content: &'a str,
}

/// Builds a timestamp from the numeric fields of a header.
///
/// `year` is the two-digit year from the export and is placed in the 2000s.
/// Returns `None` for dates or times that don't exist on the calendar.
pub fn build_timestamp(
    day: u32,
    month: u32,
    year: u32,
    hour: u32,
    minute: u32,
    second: u32,
    meridiem: Option<Meridiem>,
) -> Option<NaiveDateTime> {
    let hour = meridiem.map_or(hour, |m| m.to_24h(hour));
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)?.and_hms_opt(hour, minute, second)
}

/// Matches a single line against the message-header pattern.
///
/// The line is trimmed first. Returns `None` when the line isn't a message
/// header, when its date or time is impossible, or when the sender or
/// content trims down to nothing.
pub fn parse_header(line: &str) -> Option<MessageHeader<'_>> {
    let caps = HEADER.captures(line.trim())?;

    let number = |idx: usize| -> Option<u32> { caps.get(idx)?.as_str().parse().ok() };
    let meridiem = caps
        .get(7)
        .and_then(|m| Meridiem::from_letter(m.as_str()));

    let timestamp = build_timestamp(
        number(1)?,
        number(2)?,
        number(3)?,
        number(4)?,
        number(5)?,
        number(6)?,
        meridiem,
    )?;

    let sender = caps.get(8)?.as_str().trim();
    let content = caps.get(9)?.as_str().trim();
    if sender.is_empty() || content.is_empty() {
        return None;
    }

    Some(MessageHeader {
        timestamp,
        sender,
        content,
    })
}
