//! End-to-end tests: JSON file on disk → rendered table text.

use std::io::Write;

use clap::Parser;
use simstat::cli::Cli;
use simstat::load::LoadError;
use simstat_render::display_width;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn render(contents: &str) -> String {
    let file = write_fixture(contents);
    let cli = Cli::parse_from([
        "simstat",
        file.path().to_str().unwrap(),
        "--width",
        "80",
    ]);
    simstat::run(&cli).unwrap()
}

#[test]
fn sample_run_renders_expected_rows() {
    let output = render(
        r#"{"simulator_cycles": 1000, "all_ops": 500, "branch_mispredicts": 10}"#,
    );
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("+=="));
    assert!(lines[1].starts_with("| Field"));
    assert!(lines[2].starts_with("+=="));
    assert!(lines[3].starts_with("| Sim Cycles"));
    assert!(lines[3].contains("| 1,000"));
    assert!(lines[4].starts_with("| Instructions"));
    assert!(lines[4].contains("| 500"));
    assert!(lines[5].starts_with("| IPC"));
    assert!(lines[5].contains("| 0.5000"));
    assert!(lines[6].starts_with("| CPI"));
    assert!(lines[6].contains("| 2.0000"));
    assert!(lines[7].starts_with("+--"));
    assert!(lines[8].starts_with("| branch_mispredicts"));
    assert!(lines[8].contains("| 10"));
    assert!(lines[9].starts_with("+=="));
    assert_eq!(lines.len(), 10);
}

#[test]
fn empty_document_renders_zero_metrics() {
    let output = render("{}");
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[3].starts_with("| Sim Cycles"));
    assert!(lines[3].contains("| 0"));
    assert!(lines[5].contains("| 0.0000"));
    assert!(lines[6].contains("| 0.0000"));
    assert!(lines[7].starts_with("+--"));
    // Divider is followed directly by the closing frame.
    assert!(lines[8].starts_with("+=="));
    assert_eq!(lines.len(), 9);
}

#[test]
fn every_line_has_the_table_width() {
    let output = render(
        r#"{"simulator_cycles": 12345678, "all_ops": 4321,
            "isa": "rv32im", "firmware": "日本語テストイメージ",
            "note": "a fairly long free-form comment that has to wrap across several lines of the value column to fit"}"#,
    );
    for line in output.lines() {
        assert_eq!(display_width(line), 80, "misaligned line: {line:?}");
    }
}

#[test]
fn long_value_wraps_with_blank_key_cells() {
    let long_note = "tick ".repeat(40);
    let output = render(&format!(
        r#"{{"simulator_cycles": 1, "all_ops": 1, "note": "{}"}}"#,
        long_note.trim()
    ));
    let blank_key_prefix = format!("| {} |", " ".repeat(25));
    let continuation = output
        .lines()
        .filter(|l| l.starts_with(&blank_key_prefix))
        .count();
    assert!(continuation > 0, "expected wrapped continuation lines");
}

#[test]
fn width_override_changes_table_width() {
    let file = write_fixture(r#"{"simulator_cycles": 10, "all_ops": 5}"#);
    let cli = Cli::parse_from([
        "simstat",
        file.path().to_str().unwrap(),
        "--width",
        "60",
    ]);
    let output = simstat::run(&cli).unwrap();
    for line in output.lines() {
        assert_eq!(display_width(line), 60);
    }
}

#[test]
fn missing_file_reports_io_error() {
    let cli = Cli::parse_from(["simstat", "/no/such/stats.json", "--width", "80"]);
    let err = simstat::run(&cli).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/no/such/stats.json"));
}

#[test]
fn malformed_json_reports_json_error() {
    let file = write_fixture("{broken");
    let cli = Cli::parse_from(["simstat", file.path().to_str().unwrap()]);
    let err = simstat::run(&cli).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}
