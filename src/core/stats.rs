//! Conversation statistics.
//!
//! [`compute_statistics`] sorts a copy of the messages by timestamp and folds
//! them in one forward pass into a [`StatisticsReport`]. Averages are divided
//! out after the scan and kept at full precision; rounding is left to the
//! presentation layer.
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::compute_statistics;
//! use chatlens::parser::parse_transcript;
//!
//! let parsed = parse_transcript(
//!     "[1/2/24, 09:00:00] Alice: Hello there\n\
//!      [1/2/24, 09:05:00] Bob: Hi Alice, how are you doing today",
//! );
//! let report = compute_statistics(&parsed.messages);
//!
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.participants["Bob"].average_words, 7.0);
//! assert_eq!(report.participants["Bob"].average_response_time_ms, Some(300_000.0));
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Message;
use crate::config::StatsConfig;

/// Weekday for each `messages_by_weekday` bucket.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Per-participant metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub message_count: usize,

    /// Share of all messages, in percent.
    pub participation_rate: f64,

    /// Mean whitespace-separated words per message.
    pub average_words: f64,

    /// Mean characters per message.
    pub average_chars: f64,

    /// Mean time this participant took to answer someone else.
    ///
    /// `None` when they never replied to another participant.
    pub average_response_time_ms: Option<f64>,

    /// Number of replies behind `average_response_time_ms`.
    pub response_samples: usize,

    /// Messages sent directly after one of their own.
    pub consecutive_messages: usize,

    pub media_messages: usize,
}

/// A single message singled out by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHighlight {
    pub sender: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub word_count: usize,
}

impl MessageHighlight {
    fn new(msg: &Message, word_count: usize) -> Self {
        Self {
            sender: msg.sender.clone(),
            content: msg.content.clone(),
            timestamp: msg.timestamp,
            word_count,
        }
    }
}

/// A gap between two adjacent messages longer than the inactivity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivityPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_ms: i64,
}

/// A ranked word and how often it occurred across the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Everything computed from one message list.
///
/// Reports are cheap to rebuild and are never cached by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub total_messages: usize,
    pub first_message: Option<NaiveDateTime>,
    pub last_message: Option<NaiveDateTime>,

    /// Metrics for every sender with at least one message.
    pub participants: BTreeMap<String, ParticipantStats>,

    /// Message counts by hour of day (0-23).
    pub messages_by_hour: [usize; 24],

    /// Message counts by weekday, index 0 is Sunday. See [`WEEKDAYS`].
    pub messages_by_weekday: [usize; 7],

    /// Most frequent words, highest count first. Ties keep the order in
    /// which the words first appeared.
    pub top_words: Vec<WordCount>,

    /// Distinct words that passed the stop-word and length filters.
    pub unique_words: usize,

    pub longest_message: Option<MessageHighlight>,
    pub shortest_message: Option<MessageHighlight>,
    pub media_messages: usize,

    /// Inactivity periods in chronological order.
    pub inactivity_periods: Vec<InactivityPeriod>,
}

impl StatisticsReport {
    /// Returns metrics for one participant.
    pub fn participant(&self, name: &str) -> Option<&ParticipantStats> {
        self.participants.get(name)
    }

    /// Time between the first and the last message.
    pub fn duration_ms(&self) -> Option<i64> {
        Some((self.last_message? - self.first_message?).num_milliseconds())
    }

    /// Hour of day with the most messages. Ties go to the earliest hour.
    pub fn busiest_hour(&self) -> Option<u32> {
        busiest(&self.messages_by_hour).map(|idx| idx as u32)
    }

    /// Weekday with the most messages. Ties go to the earliest day, counting
    /// from Sunday.
    pub fn busiest_weekday(&self) -> Option<Weekday> {
        busiest(&self.messages_by_weekday).map(|idx| WEEKDAYS[idx])
    }

    /// Participants ordered by message count, most active first.
    pub fn participants_by_activity(&self) -> Vec<(&str, &ParticipantStats)> {
        let mut ranked: Vec<_> = self
            .participants
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        ranked.sort_by(|a, b| b.1.message_count.cmp(&a.1.message_count));
        ranked
    }

    /// The `n` longest inactivity periods, longest first.
    pub fn longest_inactivity_periods(&self, n: usize) -> Vec<&InactivityPeriod> {
        let mut periods: Vec<_> = self.inactivity_periods.iter().collect();
        periods.sort_by(|a, b| b.duration_ms.cmp(&a.duration_ms));
        periods.truncate(n);
        periods
    }
}

fn busiest(buckets: &[usize]) -> Option<usize> {
    let max = *buckets.iter().max()?;
    if max == 0 {
        return None;
    }
    buckets.iter().position(|&count| count == max)
}

/// Running totals for one sender during the scan.
#[derive(Debug, Default)]
struct SenderTally {
    messages: usize,
    words: usize,
    chars: usize,
    response_total_ms: i64,
    response_samples: usize,
    consecutive: usize,
    media: usize,
}

impl SenderTally {
    fn finish(&self, total: usize) -> ParticipantStats {
        let count = self.messages as f64;
        ParticipantStats {
            message_count: self.messages,
            participation_rate: count / total as f64 * 100.0,
            average_words: self.words as f64 / count,
            average_chars: self.chars as f64 / count,
            average_response_time_ms: (self.response_samples > 0)
                .then(|| self.response_total_ms as f64 / self.response_samples as f64),
            response_samples: self.response_samples,
            consecutive_messages: self.consecutive,
            media_messages: self.media,
        }
    }
}

/// Fold state for one pass over chronologically sorted messages.
struct StatsAccumulator<'a> {
    config: &'a StatsConfig,
    total: usize,
    senders: BTreeMap<&'a str, SenderTally>,
    by_hour: [usize; 24],
    by_weekday: [usize; 7],
    word_index: HashMap<String, usize>,
    words: Vec<WordCount>,
    longest: Option<(&'a Message, usize)>,
    shortest: Option<(&'a Message, usize)>,
    media: usize,
    inactivity: Vec<InactivityPeriod>,
    first: Option<&'a Message>,
    last: Option<&'a Message>,
}

impl<'a> StatsAccumulator<'a> {
    fn new(config: &'a StatsConfig) -> Self {
        Self {
            config,
            total: 0,
            senders: BTreeMap::new(),
            by_hour: [0; 24],
            by_weekday: [0; 7],
            word_index: HashMap::new(),
            words: Vec::new(),
            longest: None,
            shortest: None,
            media: 0,
            inactivity: Vec::new(),
            first: None,
            last: None,
        }
    }

    fn push(&mut self, msg: &'a Message) {
        self.total += 1;

        let word_count = msg.word_count();
        let is_media = self.config.is_media(&msg.content);

        let tally = self.senders.entry(msg.sender.as_str()).or_default();
        tally.messages += 1;
        tally.words += word_count;
        tally.chars += msg.content.chars().count();
        if is_media {
            tally.media += 1;
            self.media += 1;
        }

        if let Some(prev) = self.last {
            let gap_ms = (msg.timestamp - prev.timestamp).num_milliseconds();
            if prev.sender == msg.sender {
                tally.consecutive += 1;
            } else {
                tally.response_total_ms += gap_ms;
                tally.response_samples += 1;
            }
            if gap_ms > self.config.inactivity_threshold_ms {
                self.inactivity.push(InactivityPeriod {
                    start: prev.timestamp,
                    end: msg.timestamp,
                    duration_ms: gap_ms,
                });
            }
        }

        if word_count > self.longest.map_or(0, |(_, best)| best) {
            self.longest = Some((msg, word_count));
        }
        if word_count > 0 && self.shortest.is_none_or(|(_, best)| word_count < best) {
            self.shortest = Some((msg, word_count));
        }

        for word in msg.words() {
            let word = word.to_lowercase();
            if !self.config.counts_word(&word) {
                continue;
            }
            match self.word_index.get(&word) {
                Some(&idx) => self.words[idx].count += 1,
                None => {
                    self.word_index.insert(word.clone(), self.words.len());
                    self.words.push(WordCount { word, count: 1 });
                }
            }
        }

        self.by_hour[msg.timestamp.hour() as usize] += 1;
        self.by_weekday[msg.timestamp.weekday().num_days_from_sunday() as usize] += 1;

        self.first.get_or_insert(msg);
        self.last = Some(msg);
    }

    fn finish(self) -> StatisticsReport {
        let total = self.total;
        let participants = self
            .senders
            .iter()
            .map(|(name, tally)| ((*name).to_string(), tally.finish(total)))
            .collect();

        let unique_words = self.words.len();
        let mut top_words = self.words;
        top_words.sort_by(|a, b| b.count.cmp(&a.count));
        top_words.truncate(self.config.top_words_limit);

        StatisticsReport {
            total_messages: total,
            first_message: self.first.map(Message::timestamp),
            last_message: self.last.map(Message::timestamp),
            participants,
            messages_by_hour: self.by_hour,
            messages_by_weekday: self.by_weekday,
            top_words,
            unique_words,
            longest_message: self.longest.map(|(m, w)| MessageHighlight::new(m, w)),
            shortest_message: self.shortest.map(|(m, w)| MessageHighlight::new(m, w)),
            media_messages: self.media,
            inactivity_periods: self.inactivity,
        }
    }
}

/// Computes conversation statistics with a configurable vocabulary and
/// thresholds.
///
/// # Example
///
/// ```rust
/// use chatlens::config::StatsConfig;
/// use chatlens::core::StatisticsEngine;
///
/// let engine = StatisticsEngine::with_config(StatsConfig::new().with_top_words_limit(5));
/// let report = engine.compute(&[]);
/// assert_eq!(report.total_messages, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    config: StatsConfig,
}

impl StatisticsEngine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom configuration.
    pub fn with_config(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Builds a report from `messages` in any order.
    ///
    /// Messages with equal timestamps keep their relative input order.
    pub fn compute(&self, messages: &[Message]) -> StatisticsReport {
        let mut sorted: Vec<&Message> = messages.iter().collect();
        sorted.sort_by_key(|m| m.timestamp);

        let mut acc = StatsAccumulator::new(&self.config);
        for msg in sorted {
            acc.push(msg);
        }
        let report = acc.finish();

        debug!(
            messages = report.total_messages,
            participants = report.participants.len(),
            inactivity_periods = report.inactivity_periods.len(),
            "computed statistics"
        );

        report
    }
}

/// Computes statistics with the default configuration.
pub fn compute_statistics(messages: &[Message]) -> StatisticsReport {
    StatisticsEngine::new().compute(messages)
}
