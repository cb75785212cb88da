//! Report format selection.
//!
//! Library-level format enum that doesn't depend on the CLI framework.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::core::compute_statistics;
//! use chatlens::format::{ReportFormat, to_format_string};
//! use chatlens::parser::parse_transcript;
//!
//! let parsed = parse_transcript("[1/2/24, 09:00:00] Alice: Hello!");
//! let report = compute_statistics(&parsed.messages);
//!
//! let format = ReportFormat::from_path("report.json")?;
//! let json = to_format_string(&report, format)?;
//! assert!(json.contains("total_messages"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::output;
use crate::core::stats::StatisticsReport;
use crate::error::ChatlensError;

/// How a [`StatisticsReport`] is rendered.
///
/// - [`Text`](ReportFormat::Text) - human-readable summary
/// - [`Json`](ReportFormat::Json) - the full report
/// - [`Csv`](ReportFormat::Csv) - per-participant table
///
/// # Example
///
/// ```rust
/// use chatlens::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("csv").unwrap();
/// assert_eq!(format, ReportFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Plain-text summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole report
    Json,

    /// Semicolon-delimited participant table
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("out/stats.TXT").unwrap(), ReportFormat::Text);
    /// assert!(ReportFormat::from_path("stats.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatlensError::invalid_format(
                "report",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_missing(format: ReportFormat) -> ChatlensError {
    let feature = match format {
        ReportFormat::Csv => "csv-output",
        _ => "json-output",
    };
    ChatlensError::invalid_format(
        "report",
        format!("Report format {format} requires the '{feature}' feature to be enabled"),
    )
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    report: &StatisticsReport,
    path: &str,
    format: ReportFormat,
) -> Result<(), ChatlensError> {
    match format {
        ReportFormat::Text => output::write_text(report, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}

/// Renders a report to a string in the specified format.
pub fn to_format_string(
    report: &StatisticsReport,
    format: ReportFormat,
) -> Result<String, ChatlensError> {
    match format {
        ReportFormat::Text => Ok(output::to_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => output::to_json(report),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}
