//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::stats::StatisticsReport;
use crate::error::Result;

/// Writes the full report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "total_messages": 3,
///   "first_message": "2024-02-01T09:00:00",
///   "participants": {
///     "Alice": { "message_count": 2, "average_response_time_ms": 7500000.0, ... }
///   },
///   ...
/// }
/// ```
pub fn write_json(report: &StatisticsReport, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the full report to a pretty-printed JSON string.
///
/// Same format as [`write_json`].
pub fn to_json(report: &StatisticsReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
