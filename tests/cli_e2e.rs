//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary and check its output and the files it
//! writes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const SCENARIO: &str = "\
[1/2/24, 09:00:00] Alice: Los mensajes y las llamadas están cifrados de extremo a extremo.
[1/2/24, 09:00:00] Alice: Hello there
[1/2/24, 09:05:00] Bob: Hi Alice, how are you doing today
and this is a continuation line
[1/2/24, 11:10:00] Alice: imagen omitida
";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), SCENARIO).unwrap();
    fs::write(dir.path().join("garbage.txt"), "nothing\nto see\n").unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("latin1.txt"), b"[1/2/24, 09:00:00] Jos\xe9: hola\n").unwrap();
    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Import
// ============================================================================

mod import {
    use super::*;

    #[test]
    fn test_import_writes_record() {
        let dir = setup_fixtures();
        let output = path(&dir, "conversation.json");

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(&output)
            .arg("--title")
            .arg("Scenario")
            .assert()
            .success()
            .stdout(predicate::str::contains("Imported \"Scenario\""))
            .stdout(predicate::str::contains("Messages:      3"))
            .stdout(predicate::str::contains("Participants:  2"))
            .stdout(predicate::str::contains("Skipped lines: 2"));

        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(record["title"], "Scenario");
        assert_eq!(record["participants"], serde_json::json!(["Alice", "Bob"]));
        assert_eq!(record["messages"].as_array().unwrap().len(), 3);
        assert_eq!(record["metadata"]["source"], "whatsapp_import");
        assert_eq!(record["metadata"]["file_name"], "chat.txt");
    }

    #[test]
    fn test_import_default_title() {
        let dir = setup_fixtures();
        let output = path(&dir, "conversation.json");

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Imported \"WhatsApp chat - "));
    }

    #[test]
    fn test_import_no_messages_is_a_warning() {
        let dir = setup_fixtures();
        let output = path(&dir, "empty.json");

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "garbage.txt"))
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:      0"))
            .stdout(predicate::str::contains("Warning: no messages were recognised"));

        assert!(output.exists());
    }

    #[test]
    fn test_import_missing_file() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "missing.txt"))
            .arg("-o")
            .arg(path(&dir, "out.json"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_import_invalid_utf8() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "latin1.txt"))
            .arg("-o")
            .arg(path(&dir, "out.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("UTF-8"));
    }
}

// ============================================================================
// Stats
// ============================================================================

mod stats {
    use super::*;

    #[test]
    fn test_stats_text_from_transcript() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages: 3"))
            .stdout(predicate::str::contains("Media messages: 1"))
            .stdout(predicate::str::contains("Bob: 1 messages"))
            .stdout(predicate::str::contains("(2h 5m)"));
    }

    #[test]
    fn test_stats_from_imported_record() {
        let dir = setup_fixtures();
        let record = path(&dir, "conversation.json");

        chatlens_cmd()
            .arg("import")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(&record)
            .assert()
            .success();

        let from_record = chatlens_cmd()
            .arg("stats")
            .arg(&record)
            .arg("-f")
            .arg("json")
            .output()
            .unwrap();
        let from_text = chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .arg("-f")
            .arg("json")
            .output()
            .unwrap();

        assert!(from_record.status.success());
        assert_eq!(from_record.stdout, from_text.stdout);

        let report: serde_json::Value = serde_json::from_slice(&from_record.stdout).unwrap();
        assert_eq!(report["total_messages"], 3);
        assert_eq!(report["participants"]["Bob"]["average_words"], 7.0);
    }

    #[test]
    fn test_stats_csv_to_file() {
        let dir = setup_fixtures();
        let output = path(&dir, "participants.csv");

        chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .arg("-f")
            .arg("csv")
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Participant;Messages;"));
        assert!(content.contains("Alice;2;66.67;"));
    }

    #[test]
    fn test_stats_gap_minutes() {
        let dir = setup_fixtures();

        let output = chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .arg("-f")
            .arg("json")
            .arg("--gap-minutes")
            .arg("3")
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["inactivity_periods"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_stats_top_words() {
        let dir = setup_fixtures();

        let output = chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .arg("-f")
            .arg("json")
            .arg("--top")
            .arg("2")
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["top_words"].as_array().unwrap().len(), 2);
        assert_eq!(report["top_words"][0]["word"], "hello");
    }

    #[test]
    fn test_stats_broken_record() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "broken.json"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: JSON error"));
    }

    #[test]
    fn test_stats_unknown_format_rejected() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .arg("-f")
            .arg("xml")
            .assert()
            .failure();
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("import"))
            .stdout(predicate::str::contains("stats"));
    }

    #[test]
    fn test_version() {
        chatlens_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .env_remove("RUST_LOG")
            .arg("-v")
            .arg("stats")
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages: 3"))
            .stderr(predicate::str::contains("parsed transcript"));
    }

    #[test]
    fn test_missing_subcommand() {
        chatlens_cmd().assert().failure();
    }
}
