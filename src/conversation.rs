//! Imported conversation record.
//!
//! A [`Conversation`] is built once from a parsed transcript and then only
//! read. Statistics are recomputed from its messages on every call to
//! [`Conversation::statistics`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::Conversation;
//! use chatlens::parser::parse_transcript;
//!
//! let parsed = parse_transcript("[1/2/24, 09:00:00] Alice: Hello there");
//! let conversation = Conversation::from_transcript(parsed).with_title("Team chat");
//!
//! assert_eq!(conversation.title, "Team chat");
//! assert_eq!(conversation.statistics().total_messages, 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::stats::{StatisticsEngine, StatisticsReport};
use crate::parser::ParsedTranscript;

/// Provenance recorded when a transcript is imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMetadata {
    /// Kind of import, `"whatsapp_import"` for transcripts.
    pub source: String,

    /// When the record was created.
    pub imported_at: DateTime<Utc>,

    /// Name of the transcript file, if it came from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A titled, persisted collection of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub title: String,

    /// Distinct senders in order of first appearance.
    pub participants: Vec<String>,

    pub messages: Vec<Message>,

    pub metadata: ConversationMetadata,
}

impl Conversation {
    /// Source tag for records created from a WhatsApp transcript.
    pub const WHATSAPP_SOURCE: &'static str = "whatsapp_import";

    /// Builds a record from a parsed transcript, stamped with the current time.
    pub fn from_transcript(parsed: ParsedTranscript) -> Self {
        Self::from_transcript_at(parsed, Utc::now())
    }

    /// Builds a record from a parsed transcript with an explicit import time.
    ///
    /// The default title is `"WhatsApp chat - <YYYY-MM-DD>"` using the
    /// import date.
    pub fn from_transcript_at(parsed: ParsedTranscript, imported_at: DateTime<Utc>) -> Self {
        Self {
            title: format!("WhatsApp chat - {}", imported_at.format("%Y-%m-%d")),
            participants: parsed.participants,
            messages: parsed.messages,
            metadata: ConversationMetadata {
                source: Self::WHATSAPP_SOURCE.to_string(),
                imported_at,
                file_name: None,
            },
        }
    }

    /// Replaces the derived title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Records the name of the imported file.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.file_name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Computes statistics with the default configuration.
    pub fn statistics(&self) -> StatisticsReport {
        self.statistics_with(&StatisticsEngine::new())
    }

    /// Computes statistics with a configured engine.
    pub fn statistics_with(&self, engine: &StatisticsEngine) -> StatisticsReport {
        engine.compute(&self.messages)
    }
}

#[cfg(feature = "json-output")]
mod persistence {
    use std::fs::{self, File};
    use std::io::Write;

    use super::Conversation;
    use crate::error::Result;

    impl Conversation {
        /// Serializes the record as pretty JSON.
        pub fn to_json(&self) -> Result<String> {
            Ok(serde_json::to_string_pretty(self)?)
        }

        /// Reads a record back from JSON.
        pub fn from_json(json: &str) -> Result<Self> {
            Ok(serde_json::from_str(json)?)
        }

        /// Writes the record to a JSON file.
        pub fn write_json(&self, output_path: &str) -> Result<()> {
            let mut file = File::create(output_path)?;
            file.write_all(self.to_json()?.as_bytes())?;
            Ok(())
        }

        /// Reads a record from a JSON file.
        pub fn read_json(input_path: &str) -> Result<Self> {
            Self::from_json(&fs::read_to_string(input_path)?)
        }
    }
}
