//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use chatlens::cli::{Cli, Commands, ImportArgs, StatsArgs};
use chatlens::core::StatisticsEngine;
use chatlens::format::{to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;
use chatlens::{ChatlensError, Conversation, Message};

fn main() {
    let cli = <Cli as ClapParser>::parse();
    init_tracing(cli.default_log_filter());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Initialize tracing subscriber with environment filter, logging to stderr
fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ChatlensError> {
    match cli.command {
        Commands::Import(args) => import(&args),
        Commands::Stats(args) => stats(&args),
    }
}

fn import(args: &ImportArgs) -> Result<(), ChatlensError> {
    info!("Importing transcript from {}", args.input);
    let input = Path::new(&args.input);
    let parsed = TranscriptParser::new().parse_file(input)?;

    let messages = parsed.len();
    let participants = parsed.participants.len();
    let skipped = parsed.skipped_lines;
    if parsed.is_empty() {
        warn!("No messages found in {}", args.input);
    }

    let mut conversation = Conversation::from_transcript(parsed);
    if let Some(name) = input.file_name() {
        conversation = conversation.with_file_name(name.to_string_lossy());
    }
    if let Some(title) = &args.title {
        conversation = conversation.with_title(title.as_str());
    }

    conversation.write_json(&args.output)?;

    println!("Imported \"{}\"", conversation.title);
    println!("  Messages:      {}", messages);
    println!("  Participants:  {}", participants);
    println!("  Skipped lines: {}", skipped);
    if messages == 0 {
        println!("  Warning: no messages were recognised");
    }
    println!("Saved to {}", args.output);

    Ok(())
}

fn stats(args: &StatsArgs) -> Result<(), ChatlensError> {
    let messages = load_messages(args)?;
    let engine = StatisticsEngine::with_config(args.stats_config());
    let report = engine.compute(&messages);

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, args.format)?;
            info!("Wrote {} report to {}", args.format, path);
        }
        None => print!("{}", to_format_string(&report, args.format)?),
    }

    Ok(())
}

fn load_messages(args: &StatsArgs) -> Result<Vec<Message>, ChatlensError> {
    if args.is_record_input() {
        debug!("Reading conversation record {}", args.input);
        Ok(Conversation::read_json(&args.input)?.messages)
    } else {
        debug!("Parsing transcript {}", args.input);
        Ok(TranscriptParser::new().parse_file(Path::new(&args.input))?.messages)
    }
}
