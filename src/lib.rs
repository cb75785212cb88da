//! # chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into a
//! normalized message list and descriptive conversation statistics.
//!
//! ## Overview
//!
//! The pipeline has two stages:
//! - **Parsing** - a tolerant line parser that accepts the iOS export format
//!   (`[D/M/YY, H:MM:SS] Sender: text`, 24-hour or with am/pm markers) and
//!   silently drops anything else, including system notices and
//!   omitted-media placeholders.
//! - **Statistics** - a single pass over the chronologically sorted messages
//!   producing per-participant metrics, hour and weekday histograms, word
//!   frequencies, highlights and inactivity periods.
//!
//! A [`Conversation`] ties the two together as a persisted record.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let text = "\
//! [1/2/24, 09:00:00] Alice: Hello there
//! [1/2/24, 09:05:00] Bob: Hi Alice, how are you doing today
//! [1/2/24, 11:10:00] Alice: imagen omitida";
//!
//! let parsed = parse_transcript(text);
//! let report = compute_statistics(&parsed.messages);
//!
//! assert_eq!(report.total_messages, 3);
//! assert_eq!(report.media_messages, 1);
//! assert_eq!(format_duration(report.inactivity_periods[0].duration_ms), "2h 5m");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser),
//!   [`parse_transcript`](parser::parse_transcript), [`parse_line`](parser::parse_line)
//! - [`parsing`] - message-header pattern and timestamp construction
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`core`] - statistics engine, duration formatting, report writers
//! - [`conversation`] - [`Conversation`] record and its JSON persistence
//! - [`format`] - [`ReportFormat`](format::ReportFormat) selection
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use conversation::{Conversation, ConversationMetadata};
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Conversation, Message};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::config::{ParserConfig, StatsConfig};

    pub use crate::parser::{ParsedTranscript, TranscriptParser, parse_line, parse_transcript};

    pub use crate::core::{
        InactivityPeriod, MessageHighlight, ParticipantStats, StatisticsEngine, StatisticsReport,
        WordCount, compute_statistics, format_duration,
    };

    pub use crate::core::output::to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::to_csv;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::to_json;

    pub use crate::format::ReportFormat;
}
