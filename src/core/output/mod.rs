//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the full report as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-participant table, `;` delimited - requires `csv-output` feature
//! - [`write_text`] / [`to_text`] - human-readable summary, always available
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::output::to_text;
//! use chatlens::core::compute_statistics;
//! use chatlens::parser::parse_transcript;
//!
//! let parsed = parse_transcript("[1/2/24, 09:00:00] Alice: Hello there");
//! let text = to_text(&compute_statistics(&parsed.messages));
//! assert!(text.starts_with("Messages: 1"));
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
