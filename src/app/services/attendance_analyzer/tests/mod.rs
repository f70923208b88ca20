//! Test utilities for attendance analyzer testing
//!
//! Builders for timecard records with fixed shift times, so each test only
//! spells out the dates and hours it cares about.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::app::models::TimecardRecord;


pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap()
}

/// A 09:00-17:00 shift on `day`
pub fn day_shift(employee: &str, day: NaiveDate) -> TimecardRecord {
    TimecardRecord::new(
        employee,
        Some(at(day, 9, 0)),
        Some(at(day, 17, 0)),
        Some(8.0),
    )
}

/// Day shifts on `days` consecutive dates starting at `first`
pub fn consecutive_shifts(employee: &str, first: NaiveDate, days: i64) -> Vec<TimecardRecord> {
    (0..days)
        .map(|offset| day_shift(employee, first + Duration::days(offset)))
        .collect()
}

/// Shift with explicit clock-in and clock-out
pub fn timed_shift(
    employee: &str,
    day: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
) -> TimecardRecord {
    TimecardRecord::new(
        employee,
        Some(at(day, start.0, start.1)),
        Some(at(day, end.0, end.1)),
        None,
    )
}

/// Shift known only by its reported hours
pub fn reported_shift(employee: &str, hours: Option<f64>) -> TimecardRecord {
    TimecardRecord::new(employee, None, None, hours)
}
