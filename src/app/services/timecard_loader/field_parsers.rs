//! Field parsing utilities for timecard rows
//!
//! This module provides helper functions for pulling values out of CSV
//! records and parsing the reported-hours column.

use super::column_mapping::ColumnMapping;
use crate::{Error, Result};
use csv::StringRecord;

/// Get a required field value from a CSV record
///
/// A blank value or a row too short to reach the column is a
/// `MissingField` error.
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str> {
    get_optional_field(record, mapping, field_name).ok_or_else(|| Error::missing_field(field_name))
}

/// Get an optional field value from a CSV record
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Parse a reported-hours value
///
/// Accepts decimal hours (`8.5`) and clock-style durations (`8:30` or
/// `8:30:15`). Negative and non-finite values are rejected.
pub fn parse_hours(value: &str) -> Result<f64> {
    let trimmed = value.trim();

    let hours = if trimmed.contains(':') {
        parse_clock_duration(trimmed)?
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|e| Error::hours_parsing(trimmed, e.to_string()))?
    };

    if !hours.is_finite() || hours < 0.0 {
        return Err(Error::hours_parsing(
            trimmed,
            "hours must be a non-negative number",
        ));
    }

    Ok(hours)
}

fn parse_clock_duration(value: &str) -> Result<f64> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return Err(Error::hours_parsing(value, "expected H:MM or H:MM:SS"));
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in &parts {
        let number = part
            .parse::<u32>()
            .map_err(|_| Error::hours_parsing(value, "expected H:MM or H:MM:SS"))?;
        numbers.push(number);
    }

    let hours = numbers[0];
    let minutes = numbers.get(1).copied().unwrap_or(0);
    let seconds = numbers.get(2).copied().unwrap_or(0);

    if minutes >= 60 || seconds >= 60 {
        return Err(Error::hours_parsing(
            value,
            "minutes and seconds must be below 60",
        ));
    }

    Ok(f64::from(hours) + f64::from(minutes) / 60.0 + f64::from(seconds) / 3600.0)
}
