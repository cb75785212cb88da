//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts and message lists to check the
//! invariants of parsing and statistics.

use proptest::prelude::*;

use chatlens::prelude::*;
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Carla Gómez".to_string(),
        "Иван".to_string(),
        "+34 600 123 456".to_string(),
    ])
}

fn arb_content() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hola".to_string(),
        "Hola a todos, ¿qué tal?".to_string(),
        "imagen omitida".to_string(),
        "video omitido".to_string(),
        "note: 10:30 works".to_string(),
        "mañana jugamos fútbol".to_string(),
        "Привет мир".to_string(),
        "🎉🔥 emoji".to_string(),
        "ok".to_string(),
        "Gracias gracias GRACIAS".to_string(),
    ])
}

/// A transcript line: either a valid header in one of the supported styles
/// or a line the parser must skip.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1u32..=28, 1u32..=12, 0u32..=99, 0u32..=23, 0u32..=59, 0u32..=59, arb_sender(), arb_content())
            .prop_map(|(d, mo, y, h, mi, s, sender, content)| {
                format!("[{}/{}/{:02}, {:02}:{:02}:{:02}] {}: {}", d, mo, y, h, mi, s, sender, content)
            }),
        2 => (1u32..=28, 1u32..=12, 1u32..=12, 0u32..=59, any::<bool>(), arb_sender(), arb_content())
            .prop_map(|(d, mo, h, mi, pm, sender, content)| {
                let marker = if pm { "p. m." } else { "a. m." };
                format!("[{}/{}/24, {}:{:02}:00 {}] {}: {}", d, mo, h, mi, marker, sender, content)
            }),
        1 => Just("continuation line".to_string()),
        1 => Just(String::new()),
        1 => Just("[1/2/24, 09:00:00] Alice: <Multimedia omitido>".to_string()),
    ]
}

fn arb_transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

/// Messages with strictly increasing timestamps, so any permutation has a
/// single chronological order.
fn arb_distinct_messages() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((arb_sender(), arb_content(), 1i64..10_000), 0..30).prop_map(|items| {
        let mut at = base_time();
        items
            .into_iter()
            .map(|(sender, content, step)| {
                at += Duration::seconds(step);
                Message::new(sender, content, at)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Parsing the same text twice yields identical results
    #[test]
    fn parse_is_idempotent(text in arb_transcript()) {
        prop_assert_eq!(parse_transcript(&text), parse_transcript(&text));
    }

    /// Every non-blank line either becomes a message or is counted as skipped
    #[test]
    fn parse_accounts_for_every_line(text in arb_transcript()) {
        let parsed = parse_transcript(&text);
        let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(parsed.len() + parsed.skipped_lines, non_blank);
    }

    /// Parsed messages are trimmed and non-empty
    #[test]
    fn parsed_fields_are_trimmed(text in arb_transcript()) {
        for msg in parse_transcript(&text).messages {
            prop_assert!(!msg.sender.is_empty());
            prop_assert!(!msg.content.is_empty());
            prop_assert_eq!(msg.sender.trim(), msg.sender.as_str());
            prop_assert_eq!(msg.content.trim(), msg.content.as_str());
        }
    }

    /// Participants are exactly the distinct senders, first-seen order
    #[test]
    fn participants_are_distinct_senders(text in arb_transcript()) {
        let parsed = parse_transcript(&text);
        let mut expected: Vec<String> = Vec::new();
        for msg in &parsed.messages {
            if !expected.contains(&msg.sender) {
                expected.push(msg.sender.clone());
            }
        }
        prop_assert_eq!(parsed.participants, expected);
    }

    /// The parser never panics on arbitrary input
    #[test]
    fn parse_never_panics(text in ".{0,200}") {
        let _ = parse_transcript(&text);
    }

    // ============================================
    // STATISTICS PROPERTIES
    // ============================================

    /// Statistics don't depend on input order
    #[test]
    fn statistics_are_order_invariant(
        (messages, shuffled) in arb_distinct_messages()
            .prop_flat_map(|m| (Just(m.clone()), Just(m).prop_shuffle()))
    ) {
        prop_assert_eq!(compute_statistics(&messages), compute_statistics(&shuffled));
    }

    /// Participation rates sum to 100
    #[test]
    fn participation_sums_to_hundred(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        if report.total_messages > 0 {
            let sum: f64 = report.participants.values().map(|p| p.participation_rate).sum();
            prop_assert!((sum - 100.0).abs() < 1e-9, "sum = {}", sum);
        } else {
            prop_assert!(report.participants.is_empty());
        }
    }

    /// Both histograms account for every message
    #[test]
    fn histograms_sum_to_total(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        prop_assert_eq!(report.messages_by_hour.iter().sum::<usize>(), report.total_messages);
        prop_assert_eq!(report.messages_by_weekday.iter().sum::<usize>(), report.total_messages);
    }

    /// Each message after the first is either a reply or a consecutive one
    #[test]
    fn replies_and_streaks_cover_transitions(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        let transitions: usize = report
            .participants
            .values()
            .map(|p| p.response_samples + p.consecutive_messages)
            .sum();
        prop_assert_eq!(transitions, report.total_messages.saturating_sub(1));
    }

    /// Per-participant counts add up and media never exceeds them
    #[test]
    fn participant_counts_add_up(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        let total: usize = report.participants.values().map(|p| p.message_count).sum();
        prop_assert_eq!(total, messages.len());

        let media: usize = report.participants.values().map(|p| p.media_messages).sum();
        prop_assert_eq!(media, report.media_messages);
        for stats in report.participants.values() {
            prop_assert!(stats.media_messages <= stats.message_count);
            prop_assert_eq!(stats.average_response_time_ms.is_some(), stats.response_samples > 0);
        }
    }

    /// Inactivity periods are chronological and above the threshold
    #[test]
    fn inactivity_periods_are_ordered(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        for pair in report.inactivity_periods.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for period in &report.inactivity_periods {
            prop_assert!(period.duration_ms > 3_600_000);
            prop_assert_eq!((period.end - period.start).num_milliseconds(), period.duration_ms);
        }
    }

    /// Top words are ranked by descending count
    #[test]
    fn top_words_are_ranked(messages in arb_distinct_messages()) {
        let report = compute_statistics(&messages);
        prop_assert!(report.top_words.len() <= 20);
        prop_assert!(report.top_words.len() <= report.unique_words);
        for pair in report.top_words.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    // ============================================
    // DURATION PROPERTIES
    // ============================================

    /// Durations always render with at most two units
    #[test]
    fn format_duration_has_two_units_at_most(ms in any::<i64>()) {
        let formatted = format_duration(ms);
        prop_assert!(!formatted.is_empty());
        prop_assert!(formatted.split(' ').count() <= 2);
        prop_assert!(formatted.ends_with('s') || formatted.ends_with('m') || formatted.ends_with('h'));
    }
}
