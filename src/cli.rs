//! Command-line interface definition using clap.
//!
//! - [`Cli`] - top-level arguments
//! - [`Commands`] - `import` and `stats` subcommands
//!
//! # Example
//!
//! ```rust
//! use chatlens::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::try_parse_from(["chatlens", "stats", "chat.txt", "--top", "5"]).unwrap();
//! match cli.command {
//!     Commands::Stats(args) => assert_eq!(args.stats_config().top_words_limit, 5),
//!     Commands::Import(_) => unreachable!(),
//! }
//! ```

use clap::{Args, Parser, Subcommand};

use crate::config::StatsConfig;
use crate::format::ReportFormat;

/// Parse WhatsApp chat exports and compute conversation statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens import chat.txt -o conversation.json --title \"Family\"
    chatlens stats conversation.json
    chatlens stats chat.txt -f csv -o participants.csv
    chatlens stats chat.txt --top 10 --gap-minutes 30")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "chatlens=debug"
        } else {
            "chatlens=warn"
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse a transcript and save it as a conversation record
    Import(ImportArgs),

    /// Compute statistics for a transcript or conversation record
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Where to write the conversation record
    #[arg(short, long, default_value = "conversation.json")]
    pub output: String,

    /// Title for the conversation (defaults to "WhatsApp chat - <date>")
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Transcript (.txt) or conversation record (.json)
    pub input: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of ranked words to keep
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Minimum silence, in minutes, that counts as an inactivity period
    #[arg(long, value_name = "MINUTES", default_value_t = 60)]
    pub gap_minutes: u32,
}

impl StatsArgs {
    /// Returns `true` if the input should be read as a conversation record.
    pub fn is_record_input(&self) -> bool {
        self.input.to_lowercase().ends_with(".json")
    }

    /// Statistics configuration derived from the flags.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig::new()
            .with_top_words_limit(self.top)
            .with_inactivity_threshold_ms(i64::from(self.gap_minutes) * 60 * 1000)
    }
}
