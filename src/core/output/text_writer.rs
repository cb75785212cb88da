//! Plain-text summary writer.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::core::duration::format_duration;
use crate::core::stats::StatisticsReport;
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a human-readable summary of the report.
///
/// Averages are rounded for display; durations use
/// [`format_duration`](crate::core::format_duration).
pub fn to_text(report: &StatisticsReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render(report, &mut out);
    out
}

/// Writes the text summary to a file.
pub fn write_text(report: &StatisticsReport, output_path: &str) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(report).as_bytes())?;
    Ok(())
}

fn render(report: &StatisticsReport, out: &mut String) -> std::fmt::Result {
    writeln!(out, "Messages: {}", report.total_messages)?;
    if report.total_messages == 0 {
        return Ok(());
    }

    if let (Some(first), Some(last)) = (report.first_message, report.last_message) {
        writeln!(out, "First message: {}", first.format(TIMESTAMP_FORMAT))?;
        writeln!(out, "Last message: {}", last.format(TIMESTAMP_FORMAT))?;
    }
    if let Some(span) = report.duration_ms() {
        writeln!(out, "Duration: {}", format_duration(span))?;
    }
    writeln!(out, "Media messages: {}", report.media_messages)?;
    writeln!(out, "Unique words: {}", report.unique_words)?;

    writeln!(out)?;
    writeln!(out, "Participants:")?;
    for (name, stats) in report.participants_by_activity() {
        let response = stats
            .average_response_time_ms
            .map_or_else(|| "no data".to_string(), |ms| format_duration(ms as i64));
        writeln!(
            out,
            "  {name}: {} messages ({:.1}%), {:.0} words/msg, {:.0} chars/msg, response {response}, {} consecutive, {} media",
            stats.message_count,
            stats.participation_rate,
            stats.average_words,
            stats.average_chars,
            stats.consecutive_messages,
            stats.media_messages,
        )?;
    }

    if let Some(hour) = report.busiest_hour() {
        writeln!(out)?;
        writeln!(out, "Busiest hour: {hour:02}:00")?;
    }
    if let Some(day) = report.busiest_weekday() {
        writeln!(out, "Busiest day: {day}")?;
    }

    if !report.top_words.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top words:")?;
        for (rank, entry) in report.top_words.iter().enumerate() {
            writeln!(out, "  {:>2}. {} ({})", rank + 1, entry.word, entry.count)?;
        }
    }

    if let Some(longest) = &report.longest_message {
        writeln!(out)?;
        writeln!(
            out,
            "Longest message: {} words by {} at {}",
            longest.word_count,
            longest.sender,
            longest.timestamp.format(TIMESTAMP_FORMAT)
        )?;
    }
    if let Some(shortest) = &report.shortest_message {
        writeln!(
            out,
            "Shortest message: {} words by {} at {}",
            shortest.word_count,
            shortest.sender,
            shortest.timestamp.format(TIMESTAMP_FORMAT)
        )?;
    }

    if !report.inactivity_periods.is_empty() {
        writeln!(out)?;
        writeln!(out, "Longest inactivity periods:")?;
        for period in report.longest_inactivity_periods(5) {
            writeln!(
                out,
                "  {} -> {} ({})",
                period.start.format(TIMESTAMP_FORMAT),
                period.end.format(TIMESTAMP_FORMAT),
                format_duration(period.duration_ms)
            )?;
        }
    }

    Ok(())
}
