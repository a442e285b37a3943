// Auto Pulse - tests/e2e_report.rs
//
// End-to-end tests for the pulse pipeline.
//
// These tests exercise the real tally, real chrono date formatting, real
// export writers, and real config loading against files on disk — no mocks,
// no stubs. This covers the full path from raw schedule text to a rendered
// report and its exported artefacts.

use autopulse::core::export::{export_csv, export_json, export_text};
use autopulse::core::model::ReportOptions;
use autopulse::core::report::render_pulse;
use autopulse::core::tally::tally_schedule;
use autopulse::platform::config::load_config;
use autopulse::util::constants;
use chrono::NaiveDate;
use std::fs;

// =============================================================================
// Helpers
// =============================================================================

/// A pinned report date: 1 January 2024 was a Monday.
fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn default_pulse(input: &str) -> String {
    let entries = tally_schedule(input);
    render_pulse(&entries, report_date(), &ReportOptions::default())
}

// =============================================================================
// Tally + render E2E
// =============================================================================

/// The documented example: two occurrences of one task and one of another.
#[test]
fn e2e_worked_example_produces_expected_report() {
    let report = default_pulse("Call client\nCall client\nEmail report");

    assert_eq!(
        report,
        "PULSE TEXT: Start Of Day\n\
         Ben\n\
         Monday 01/01/2024\n\
         \n\
         1. Call client (0.5)\n\
         2. Email report (0.25)\n\
         \n\
         Total Tasks Scheduled: 2\n"
    );
}

/// N distinct lines yield exactly N entries, numbered 1..N in input order.
#[test]
fn e2e_numbering_follows_first_seen_order() {
    let input = "Triage inbox\nStandup\nTriage inbox\nReview PR\nStandup\nStandup";
    let report = default_pulse(input);

    let body: Vec<&str> = report
        .lines()
        .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .collect();
    assert_eq!(
        body,
        vec![
            "1. Triage inbox (0.5)",
            "2. Standup (0.75)",
            "3. Review PR (0.25)",
        ]
    );
    assert!(report.contains("Total Tasks Scheduled: 3"));
}

/// Blank and whitespace-only lines vanish without affecting counts.
#[test]
fn e2e_blank_lines_are_invisible() {
    let with_blanks = default_pulse("\nA\n\n   \nA\n\t\nB\n\n");
    let without_blanks = default_pulse("A\nA\nB");
    assert_eq!(with_blanks, without_blanks);
}

/// An empty schedule still renders the full header and a zero total.
#[test]
fn e2e_empty_schedule_renders_header_only() {
    let report = default_pulse("");
    assert!(report.starts_with("PULSE TEXT: Start Of Day\nBen\nMonday 01/01/2024\n"));
    assert!(report.ends_with("Total Tasks Scheduled: 0\n"));
    assert!(!report.contains("1."));
}

/// Four repeats of one line cross the whole-hour boundary.
#[test]
fn e2e_whole_hours_keep_one_decimal() {
    let report = default_pulse("Deep work\nDeep work\nDeep work\nDeep work");
    assert!(report.contains("1. Deep work (1.0)"));
}

// =============================================================================
// Export E2E
// =============================================================================

/// Text export round-trips the report byte-for-byte through a real file.
#[test]
fn e2e_text_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("pulse.txt");

    let report = default_pulse("Call client\nEmail report");
    let file = fs::File::create(&dest).unwrap();
    let bytes = export_text(&report, file, &dest).unwrap();

    assert_eq!(bytes, report.len());
    assert_eq!(fs::read_to_string(&dest).unwrap(), report);
}

/// CSV export writes a header plus one row per distinct task.
#[test]
fn e2e_csv_export_writes_tally_rows() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("tally.csv");

    let entries = tally_schedule("Call client\nCall client\nEmail report");
    let file = fs::File::create(&dest).unwrap();
    let count = export_csv(&entries, file, &dest).unwrap();
    assert_eq!(count, 2);

    let content = fs::read_to_string(&dest).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "task,occurrences,duration_hours");
    assert_eq!(lines[1], "Call client,2,0.5");
    assert_eq!(lines[2], "Email report,1,0.25");
}

/// JSON export parses back into records matching the tally.
#[test]
fn e2e_json_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("tally.json");

    let entries = tally_schedule("Standup\nStandup\nStandup");
    let file = fs::File::create(&dest).unwrap();
    let count = export_json(&entries, file, &dest).unwrap();
    assert_eq!(count, 1);

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["task"], "Standup");
    assert_eq!(parsed[0]["occurrences"], 3);
    assert_eq!(parsed[0]["duration_hours"], 0.75);
}

// =============================================================================
// Config E2E
// =============================================================================

/// A real config.toml on disk flows through to the rendered report.
#[test]
fn e2e_config_author_reaches_the_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        "[report]\nname = \"Alex\"\nshow_total = false\n",
    )
    .unwrap();

    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let opts = ReportOptions {
        author: config.author,
        include_total: config.show_total,
    };
    let report = render_pulse(&tally_schedule("Standup"), report_date(), &opts);

    assert!(report.contains("\nAlex\n"));
    assert!(!report.contains("Total Tasks Scheduled"));
}

/// Config problems never stop a report from being generated.
#[test]
fn e2e_broken_config_still_produces_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "== not toml ==").unwrap();

    let (config, warnings) = load_config(dir.path());
    assert_eq!(warnings.len(), 1);

    let opts = ReportOptions {
        author: config.author,
        include_total: config.show_total,
    };
    let report = render_pulse(&tally_schedule("Standup"), report_date(), &opts);
    assert!(report.contains("\nBen\n"));
    assert!(report.contains("Total Tasks Scheduled: 1"));
}
