//! Parsed chat message type.
//!
//! [`Message`] is the normalized representation of one utterance in a
//! transcript. The parser only emits messages with a trimmed, non-empty
//! sender and content; the statistics engine accepts any message list.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let msg = Message::new("Alice", "Hello there", ts);
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.word_count(), 2);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let msg = Message::new("Alice", "Hello!", ts);
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("2024-02-01T09:00:00"));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One parsed utterance from a chat transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name as written in the export |
/// | `content` | `String` | Message body |
/// | `timestamp` | `NaiveDateTime` | Wall-clock time from the export |
///
/// Exports carry no timezone, so timestamps are kept as wall-clock values.
/// Hour-of-day and weekday statistics are read directly from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub content: String,

    /// When the message was sent.
    pub timestamp: NaiveDateTime,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp,
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Iterates over the whitespace-separated words of the content.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.content.split_whitespace()
    }

    /// Number of whitespace-separated words in the content.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Returns `true` if the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
