//! Transcript parser.
//!
//! Turns the text of a WhatsApp chat export into an ordered list of
//! [`Message`]s and the list of distinct participants.
//!
//! Parsing is tolerant: a line that doesn't start with a message header is
//! dropped without error, as are system notices (the end-to-end encryption
//! banner) and omitted-media placeholders. The only failures come from
//! reading the file in the first place.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse_transcript;
//!
//! let text = "\
//! [1/2/24, 09:00:00] Alice: Hello there
//! this line is not a message header
//! [1/2/24, 09:05:00] Bob: Hi Alice";
//!
//! let parsed = parse_transcript(text);
//! assert_eq!(parsed.messages.len(), 2);
//! assert_eq!(parsed.participants, vec!["Alice", "Bob"]);
//! assert_eq!(parsed.skipped_lines, 1);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::parsing::parse_header;

/// Result of parsing one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTranscript {
    /// Messages in source order.
    pub messages: Vec<Message>,

    /// Distinct sender names, in order of first appearance.
    pub participants: Vec<String>,

    /// Non-blank lines that produced no message.
    #[serde(default)]
    pub skipped_lines: usize,
}

impl ParsedTranscript {
    /// Number of parsed messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no line produced a message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, msg: Message) {
        if !self.participants.iter().any(|p| *p == msg.sender) {
            self.participants.push(msg.sender.clone());
        }
        self.messages.push(msg);
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(
///     ParserConfig::new().with_system_notice("joined using this group's invite link"),
/// );
/// let parsed = parser.parse_str("[1/2/24, 09:00:00] Carol: joined using this group's invite link");
/// assert!(parsed.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a single line.
    ///
    /// Returns `None` for anything that isn't a message: non-matching
    /// lines, impossible timestamps and filtered noise alike.
    pub fn parse_line(&self, line: &str) -> Option<Message> {
        let header = parse_header(line)?;
        if self.config.is_noise(header.content) {
            return None;
        }
        Some(Message::new(header.sender, header.content, header.timestamp))
    }

    /// Parses transcript text already held in memory.
    pub fn parse_str(&self, text: &str) -> ParsedTranscript {
        let mut parsed = ParsedTranscript::default();

        for line in text.lines() {
            match self.parse_line(line) {
                Some(msg) => parsed.push(msg),
                None if !line.trim().is_empty() => parsed.skipped_lines += 1,
                None => {}
            }
        }

        debug!(
            messages = parsed.messages.len(),
            participants = parsed.participants.len(),
            skipped = parsed.skipped_lines,
            "parsed transcript"
        );

        parsed
    }

    /// Reads and parses a transcript file.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file can't be read and
    /// [`ChatlensError::Utf8`] if it isn't valid UTF-8.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedTranscript, ChatlensError> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::transcript_encoding(e, Some(path.to_path_buf())))?;
        Ok(self.parse_str(text.strip_prefix('\u{FEFF}').unwrap_or(&text)))
    }
}

/// Parses transcript text with the default configuration.
pub fn parse_transcript(text: &str) -> ParsedTranscript {
    TranscriptParser::new().parse_str(text)
}

/// Parses a single line with the default configuration.
pub fn parse_line(line: &str) -> Option<Message> {
    TranscriptParser::new().parse_line(line)
}
