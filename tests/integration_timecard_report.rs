//! End-to-end tests: timecard CSV on disk to rendered report
//!
//! Each test writes a small export to a temporary file, runs the analyze
//! command against it, and inspects the in-memory output.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use timecard_analyzer::cli::args::Args;
use timecard_analyzer::cli::commands::{self, run_analyze, shared::load_configuration_with};
use timecard_analyzer::config::Config;
use timecard_analyzer::{AnalyzerKind, Summary};

const HEADER: &str = "Employee Name,Time,Time Out,Timecard Hours\n";

fn write_csv(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(HEADER.as_bytes()).unwrap();
    file.write_all(rows.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn plain_config(file: &NamedTempFile) -> Config {
    let mut config = Config::default().with_input_path(file.path());
    config.output.color = false;
    config
}

/// Alice clocks in seven days running; Bob works one very long day
fn week_of_shifts() -> String {
    let mut rows = String::new();
    for day in 2..=8 {
        rows.push_str(&format!(
            "Alice,01/{:02}/2023 09:00 AM,01/{:02}/2023 05:00 PM,8\n",
            day, day
        ));
    }
    rows.push_str("Bob,01/03/2023 06:00 AM,01/03/2023 10:00 PM,16\n");
    rows
}

fn render(config: &Config) -> String {
    let mut buffer = Vec::new();
    run_analyze(config, &mut buffer).expect("Analysis should succeed");
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_week_of_shifts_human_report() {
    let file = write_csv(&week_of_shifts());
    let text = render(&plain_config(&file));

    assert!(text.contains("Alice has worked for 7 consecutive days.\n"));
    assert!(text.contains("Maximum consecutive days: 7\n"));
    assert!(!text.contains("No employee has worked for"));
    assert_eq!(
        text.matches("Alice has a short shift with 8.00 hours between shifts.").count(),
        7
    );
    assert!(text.contains("Bob has worked for more than 14 hours in a single shift.\n"));
    assert!(!text.contains("No shift exceeded"));

    // Section order follows the detector run order
    let streak_at = text.find("Consecutive days").unwrap();
    let short_at = text.find("Short shifts").unwrap();
    let long_at = text.find("Long shifts").unwrap();
    assert!(streak_at < short_at && short_at < long_at);
}

#[test]
fn test_week_of_shifts_outcome() {
    let file = write_csv(&week_of_shifts());
    let mut buffer = Vec::new();
    let outcome = run_analyze(&plain_config(&file), &mut buffer).unwrap();

    assert_eq!(outcome.load_stats.total_rows, 8);
    assert_eq!(outcome.load_stats.records_loaded, 8);

    let report = &outcome.analysis.report;
    assert_eq!(report.findings_for(AnalyzerKind::ConsecutiveDays).count(), 1);
    assert_eq!(report.findings_for(AnalyzerKind::ShortShift).count(), 7);
    assert_eq!(report.findings_for(AnalyzerKind::LongShift).count(), 1);
    assert_eq!(report.summaries, vec![Summary::MaxConsecutiveDays { days: 7 }]);
}

#[test]
fn test_mixed_timestamp_formats_form_one_streak() {
    let file = write_csv(
        "Carol,01/02/2023 09:00 AM,,\n\
         Carol,2023-01-03 09:00:00,,\n\
         Carol,01-04-2023 09:00:00,,\n\
         Carol,2023-01-05T09:00:00,,\n\
         Carol,01/06/2023 21:15,,\n",
    );
    let config = plain_config(&file).with_streak_threshold(5);

    let text = render(&config);
    assert!(text.contains("Carol has worked for 5 consecutive days.\n"));
}

#[test]
fn test_header_only_file_reports_empty_data() {
    let file = write_csv("");
    let text = render(&plain_config(&file));

    assert_eq!(
        text,
        "Consecutive days\n\
         Empty data\n\
         \n\
         Short shifts\n\
         No shift lasted between 1 and 10 hours.\n\
         \n\
         Long shifts\n\
         No shift exceeded 14 hours.\n"
    );
}

#[test]
fn test_missing_required_column_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Employee Name,Time Out\nAlice,01/02/2023 09:00 AM").unwrap();

    let mut buffer = Vec::new();
    let err = run_analyze(&plain_config(&file), &mut buffer).unwrap_err();

    assert!(err.is_fatal_data_error());
    assert!(err.to_string().contains("Time"));
}

#[test]
fn test_unparseable_timestamp_lenient_and_strict() {
    let file = write_csv(
        "Dave,01/02/2023 09:00 AM,01/02/2023 12:00 PM,3\n\
         Dave,next tuesday,,4\n",
    );

    let mut buffer = Vec::new();
    let outcome = run_analyze(&plain_config(&file), &mut buffer).unwrap();
    assert_eq!(outcome.load_stats.records_loaded, 2);
    assert_eq!(outcome.load_stats.unparseable_values, 1);

    let strict = plain_config(&file)
        .with_parse_error_policy(timecard_analyzer::config::ParseErrorPolicy::Strict);
    let mut buffer = Vec::new();
    let err = run_analyze(&strict, &mut buffer).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("next tuesday"));
}

#[test]
fn test_report_serializes_to_stable_schema() {
    let file = write_csv(&week_of_shifts());
    let mut buffer = Vec::new();
    let outcome = run_analyze(&plain_config(&file), &mut buffer).unwrap();

    let json = serde_json::to_value(&outcome.analysis.report).unwrap();

    let findings = json["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 9);
    assert_eq!(findings[0]["analyzer"], "consecutive_days");
    assert_eq!(findings[0]["employee"], "Alice");
    assert_eq!(findings[0]["date"], "2023-01-08");
    assert_eq!(findings[8]["analyzer"], "long_shift");
    assert_eq!(findings[8]["metric_value"], 16.0);
    assert_eq!(findings[8]["threshold"], 14.0);
    assert_eq!(json["summaries"][0]["kind"], "max_consecutive_days");
}

#[test]
fn test_run_with_cli_arguments() {
    let file = write_csv(&week_of_shifts());

    let args = Args {
        input: Some(PathBuf::from(file.path())),
        threshold_days: Some(8),
        long_shift_hours: Some(20.0),
        no_color: true,
        ..Args::default()
    };
    args.validate().unwrap();
    let config = load_configuration_with(&args, None, |_| None).unwrap();

    let mut buffer = Vec::new();
    let outcome = commands::execute(&args, &config, &mut buffer)
        .unwrap()
        .expect("Analysis should run");
    let text = String::from_utf8(buffer).unwrap();

    assert!(outcome.analysis.report.findings_for(AnalyzerKind::LongShift).next().is_none());
    assert!(text.contains("No employee has worked for 8 consecutive days.\n"));
    assert!(text.contains("No shift exceeded 20 hours.\n"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_list_formats_skips_analysis() {
    let args = Args {
        input: Some(PathBuf::from("/nonexistent/timecards.csv")),
        list_formats: true,
        ..Args::default()
    };
    let config = load_configuration_with(&args, None, |_| None).unwrap();

    let mut buffer = Vec::new();
    let outcome = commands::execute(&args, &config, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(outcome.is_none());
    assert!(text.starts_with(" 1. %m/%d/%Y %I:%M %p\n"));
    assert_eq!(text.lines().count(), 10);
}
