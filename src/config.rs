//! Configuration types for the parser and the statistics engine.
//!
//! Both structs are plain data with builder-style setters and no CLI
//! framework dependencies. Defaults reproduce the behaviour of Spanish
//! WhatsApp exports, with the English equivalents of each marker added.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ParserConfig, StatsConfig};
//!
//! let parser = ParserConfig::new().with_system_notice("Security code changed");
//! let stats = StatsConfig::new()
//!     .with_top_words_limit(10)
//!     .with_inactivity_threshold_ms(30 * 60 * 1000);
//!
//! assert_eq!(stats.top_words_limit, 10);
//! assert!(parser.system_notices.len() > 2);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// End-to-end encryption notices WhatsApp prepends to every export.
pub const DEFAULT_SYSTEM_NOTICES: &[&str] = &[
    "Los mensajes y las llamadas están cifrados",
    "Messages and calls are end-to-end encrypted",
];

/// Placeholders written in place of attachments that were not exported.
pub const DEFAULT_OMITTED_MEDIA_SUFFIXES: &[&str] = &["<Multimedia omitido>", "<Media omitted>"];

/// Substrings that mark a message as a media attachment.
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &[
    "imagen omitida",
    "video omitido",
    "audio omitido",
    "documento omitido",
    "image omitted",
    "video omitted",
    "audio omitted",
    "document omitted",
];

/// Words excluded from frequency analysis.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "si", "no", "en",
    "de", "a", "que", "por", "para", "con", "se", "su", "sus", "este", "esta", "estos", "estas",
    "omitido", "sticker",
];

/// Gaps longer than this between adjacent messages are inactivity periods.
pub const DEFAULT_INACTIVITY_THRESHOLD_MS: i64 = 60 * 60 * 1000;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_omitted_media_suffix("<attached>");
/// assert!(config.is_noise("photo <attached>"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Messages containing any of these phrases are dropped.
    pub system_notices: Vec<String>,

    /// Messages ending with any of these suffixes are dropped.
    pub omitted_media_suffixes: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            system_notices: to_owned(DEFAULT_SYSTEM_NOTICES),
            omitted_media_suffixes: to_owned(DEFAULT_OMITTED_MEDIA_SUFFIXES),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a phrase whose presence marks a message as a system notice.
    #[must_use]
    pub fn with_system_notice(mut self, phrase: impl Into<String>) -> Self {
        self.system_notices.push(phrase.into());
        self
    }

    /// Adds an omitted-media placeholder suffix.
    #[must_use]
    pub fn with_omitted_media_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.omitted_media_suffixes.push(suffix.into());
        self
    }

    /// Returns `true` if trimmed `content` should not become a message.
    pub fn is_noise(&self, content: &str) -> bool {
        self.system_notices
            .iter()
            .any(|notice| content.contains(notice.as_str()))
            || self
                .omitted_media_suffixes
                .iter()
                .any(|suffix| content.ends_with(suffix.as_str()))
    }
}

/// Configuration for the statistics engine.
///
/// # Example
///
/// ```rust
/// use chatlens::config::StatsConfig;
///
/// let config = StatsConfig::new().with_stop_word("hola");
/// assert!(config.is_stop_word("hola"));
/// assert!(config.is_stop_word("pero"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Lowercase words excluded from frequency analysis.
    pub stop_words: HashSet<String>,

    /// Words shorter than this many characters are not counted (default: 4)
    pub min_word_chars: usize,

    /// Length of the ranked top-words list (default: 20)
    pub top_words_limit: usize,

    /// Minimum gap, exclusive, for an inactivity period (default: 1 hour)
    pub inactivity_threshold_ms: i64,

    /// Substrings identifying media messages.
    pub media_markers: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            min_word_chars: 4,
            top_words_limit: 20,
            inactivity_threshold_ms: DEFAULT_INACTIVITY_THRESHOLD_MS,
            media_markers: to_owned(DEFAULT_MEDIA_MARKERS),
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop word (stored lowercase).
    #[must_use]
    pub fn with_stop_word(mut self, word: &str) -> Self {
        self.stop_words.insert(word.to_lowercase());
        self
    }

    /// Sets the minimum word length, in characters, for frequency analysis.
    #[must_use]
    pub fn with_min_word_chars(mut self, chars: usize) -> Self {
        self.min_word_chars = chars;
        self
    }

    /// Sets how many entries the ranked top-words list keeps.
    #[must_use]
    pub fn with_top_words_limit(mut self, limit: usize) -> Self {
        self.top_words_limit = limit;
        self
    }

    /// Sets the inactivity threshold in milliseconds.
    #[must_use]
    pub fn with_inactivity_threshold_ms(mut self, ms: i64) -> Self {
        self.inactivity_threshold_ms = ms;
        self
    }

    /// Adds a media marker substring.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_markers.push(marker.into());
        self
    }

    /// Returns `true` if the lowercase `word` is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Returns `true` if `content` refers to an omitted media attachment.
    pub fn is_media(&self, content: &str) -> bool {
        self.media_markers
            .iter()
            .any(|marker| content.contains(marker.as_str()))
    }

    /// Returns `true` if a lowercase word counts towards word frequency.
    pub fn counts_word(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_chars && !self.is_stop_word(word)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
