//! Statistics and presentation.
//!
//! - [`stats`] - the statistics engine and report types
//! - [`duration`] - human-readable durations
//! - [`output`] - report writers (JSON, CSV, text)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{compute_statistics, format_duration};
//! use chatlens::parser::parse_transcript;
//!
//! let parsed = parse_transcript(
//!     "[1/2/24, 09:00:00] Alice: Hello\n[1/2/24, 11:00:01] Bob: Sorry, was out",
//! );
//! let report = compute_statistics(&parsed.messages);
//! let gap = report.inactivity_periods[0].duration_ms;
//! assert_eq!(format_duration(gap), "2h 0m");
//! ```

pub mod duration;
pub mod output;
pub mod stats;

pub use duration::format_duration;
pub use stats::{
    InactivityPeriod, MessageHighlight, ParticipantStats, StatisticsEngine, StatisticsReport,
    WordCount, compute_statistics,
};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::{to_text, write_text};
