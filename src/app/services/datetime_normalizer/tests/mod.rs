//! Test utilities for timestamp normalization

use chrono::{NaiveDate, NaiveDateTime};


/// Build a date-time from components
pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

/// Sample values covering AM/PM boundaries and single-digit fields
pub fn sample_values() -> Vec<NaiveDateTime> {
    vec![
        datetime(2023, 1, 2, 0, 0, 0),
        datetime(2023, 1, 2, 9, 5, 0),
        datetime(2023, 12, 31, 12, 0, 0),
        datetime(2024, 2, 29, 23, 59, 0),
        datetime(2023, 7, 14, 13, 30, 0),
    ]
}

/// Sample values with non-zero seconds, only for patterns that carry `%S`
pub fn sample_values_with_seconds() -> Vec<NaiveDateTime> {
    vec![
        datetime(2023, 7, 14, 13, 30, 45),
        datetime(2023, 1, 2, 0, 0, 1),
        datetime(2024, 2, 29, 23, 59, 59),
    ]
}
