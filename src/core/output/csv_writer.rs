//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::stats::StatisticsReport;
use crate::error::Result;

const HEADER: [&str; 9] = [
    "Participant",
    "Messages",
    "Participation",
    "AvgWords",
    "AvgChars",
    "AvgResponseMs",
    "Responses",
    "Consecutive",
    "Media",
];

/// Writes the per-participant table to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Participant`, `Messages`, `Participation`, `AvgWords`,
///   `AvgChars`, `AvgResponseMs`, `Responses`, `Consecutive`, `Media`
/// - One row per participant, most active first
/// - Averages and rates with two decimals; `AvgResponseMs` is empty for
///   participants who never replied
/// - Encoding: UTF-8
pub fn write_csv(report: &StatisticsReport, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(report, file)
}

/// Converts the per-participant table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(report: &StatisticsReport) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_rows<W: Write>(report: &StatisticsReport, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;

    for (name, stats) in report.participants_by_activity() {
        writer.write_record([
            name.to_string(),
            stats.message_count.to_string(),
            format!("{:.2}", stats.participation_rate),
            format!("{:.2}", stats.average_words),
            format!("{:.2}", stats.average_chars),
            stats
                .average_response_time_ms
                .map(|ms| format!("{ms:.0}"))
                .unwrap_or_default(),
            stats.response_samples.to_string(),
            stats.consecutive_messages.to_string(),
            stats.media_messages.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
