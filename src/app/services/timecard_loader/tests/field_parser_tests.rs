//! Tests for field extraction and reported-hours parsing

use crate::Error;
use crate::app::services::timecard_loader::ColumnMapping;
use crate::app::services::timecard_loader::field_parsers::{
    get_optional_field, get_required_field, parse_hours,
};
use csv::StringRecord;

fn mapping() -> ColumnMapping {
    let headers = StringRecord::from(vec!["Employee Name", "Time", "Time Out", "Timecard Hours"]);
    ColumnMapping::analyze(&headers, "test").unwrap()
}

#[test]
fn test_decimal_hours() {
    assert_eq!(parse_hours("8").unwrap(), 8.0);
    assert_eq!(parse_hours(" 7.25 ").unwrap(), 7.25);
    assert_eq!(parse_hours("0").unwrap(), 0.0);
}

#[test]
fn test_clock_style_hours() {
    assert_eq!(parse_hours("8:30").unwrap(), 8.5);
    assert_eq!(parse_hours("14:00").unwrap(), 14.0);
    assert_eq!(parse_hours("1:15:00").unwrap(), 1.25);
}

#[test]
fn test_invalid_hours() {
    for value in ["eight", "-2", "NaN", "inf", "8:75", "1:2:3:4", "8:", ":30"] {
        let result = parse_hours(value);
        assert!(
            matches!(result, Err(Error::HoursParsing { .. })),
            "{} should be rejected",
            value
        );
    }
}

#[test]
fn test_required_field_present() {
    let record = StringRecord::from(vec![" Alice ", "", "", ""]);
    assert_eq!(
        get_required_field(&record, &mapping(), "Employee Name").unwrap(),
        "Alice"
    );
}

#[test]
fn test_required_field_blank_is_missing_field() {
    let record = StringRecord::from(vec!["  ", "", "", ""]);
    let result = get_required_field(&record, &mapping(), "Employee Name");

    match result {
        Err(Error::MissingField { field }) => assert_eq!(field, "Employee Name"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_optional_field_lookup() {
    let mapping = mapping();
    let record = StringRecord::from(vec!["Alice", "01/02/2023 9:00 AM"]);

    assert_eq!(
        get_optional_field(&record, &mapping, "Time"),
        Some("01/02/2023 9:00 AM")
    );
    // Row too short to reach the column
    assert_eq!(get_optional_field(&record, &mapping, "Time Out"), None);
    // Column not in the header at all
    assert_eq!(get_optional_field(&record, &mapping, "Department"), None);
}

#[test]
fn test_column_mapping_reports_absent_optional_columns() {
    let headers = StringRecord::from(vec!["Employee Name", "Time"]);
    let mapping = ColumnMapping::analyze(&headers, "test").unwrap();

    assert!(mapping.has_column("Time"));
    assert_eq!(mapping.get_index("Employee Name"), Some(0));
    assert_eq!(
        mapping.absent_optional_columns(),
        vec!["Time Out", "Timecard Hours"]
    );
}

#[test]
fn test_column_mapping_requires_time_column() {
    let headers = StringRecord::from(vec!["Employee Name", "Time Out"]);
    let result = ColumnMapping::analyze(&headers, "test");

    match result {
        Err(Error::DataFormat { message, .. }) => assert!(message.contains("Time")),
        other => panic!("expected DataFormat, got {:?}", other),
    }
}
