//! Core timecard loader implementation
//!
//! This module handles file reading, header validation and row iteration,
//! and applies the parse error policy to timestamp and hours values.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_optional_field, get_required_field, parse_hours};
use super::stats::{LoadResult, LoadStats};
use crate::app::models::TimecardRecord;
use crate::app::services::datetime_normalizer::DateTimeNormalizer;
use crate::config::{ParseErrorPolicy, ParsingConfig};
use crate::constants::columns;
use crate::{Error, Result};

/// Loader for timecard CSV exports
#[derive(Debug, Clone, Default)]
pub struct TimecardLoader {
    normalizer: DateTimeNormalizer,
    policy: ParseErrorPolicy,
}

impl TimecardLoader {
    /// Create a loader with an explicit normalizer and parse error policy
    pub fn new(normalizer: DateTimeNormalizer, policy: ParseErrorPolicy) -> Self {
        Self { normalizer, policy }
    }

    /// Build a loader from the parsing section of the configuration
    pub fn from_config(config: &ParsingConfig) -> Result<Self> {
        let normalizer = DateTimeNormalizer::new(config.timestamp_formats.iter().cloned())?;
        Ok(Self::new(normalizer, config.on_parse_error))
    }

    /// Load a timecard CSV file
    pub fn load_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading timecard file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        self.load_reader(file, &file_path.display().to_string())
    }

    /// Load timecard rows from any reader; `source` names it in errors
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> Result<LoadResult> {
        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            Error::csv_parsing(source, "Failed to read header row", Some(e))
        })?;

        let mapping = ColumnMapping::analyze(headers, source)?;
        let absent = mapping.absent_optional_columns();
        if !absent.is_empty() {
            debug!(
                "Optional column(s) absent, values treated as missing: {}",
                absent.join(", ")
            );
        }

        for result in csv_reader.records() {
            stats.total_rows += 1;
            // Header is line 1
            let line = stats.total_rows + 1;

            match result {
                Ok(record) => match self.parse_row(&record, &mapping, line, &mut stats)? {
                    Some(timecard) => {
                        records.push(timecard);
                        stats.records_loaded += 1;
                    }
                    None => stats.rows_skipped += 1,
                },
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats
                        .errors
                        .push(format!("CSV parse error at line {}: {}", line, e));
                    warn!("Skipped malformed CSV row at line {}: {}", line, e);
                }
            }
        }

        if records.is_empty() {
            info!("No timecard records loaded from {}", source);
        } else {
            info!("Loaded {}: {}", source, stats.summary());
        }

        Ok(LoadResult { records, stats })
    }

    /// Turn one CSV row into a record; `Ok(None)` drops the row
    fn parse_row(
        &self,
        record: &csv::StringRecord,
        mapping: &ColumnMapping,
        line: usize,
        stats: &mut LoadStats,
    ) -> Result<Option<TimecardRecord>> {
        let employee = match get_required_field(record, mapping, columns::EMPLOYEE_NAME) {
            Ok(name) => name.to_string(),
            Err(e) => {
                stats.errors.push(format!("Line {}: {}", line, e));
                debug!("Skipped line {}: {}", line, e);
                return Ok(None);
            }
        };

        let time_in = self.apply_policy(
            self.normalizer
                .normalize(get_optional_field(record, mapping, columns::TIME_IN)),
            columns::TIME_IN,
            line,
            stats,
        )?;

        let time_out = self.apply_policy(
            self.normalizer
                .normalize(get_optional_field(record, mapping, columns::TIME_OUT)),
            columns::TIME_OUT,
            line,
            stats,
        )?;

        let reported_hours = self.apply_policy(
            get_optional_field(record, mapping, columns::TIMECARD_HOURS)
                .map(parse_hours)
                .transpose(),
            columns::TIMECARD_HOURS,
            line,
            stats,
        )?;

        Ok(Some(TimecardRecord {
            employee,
            time_in,
            time_out,
            reported_hours,
        }))
    }

    /// Strict: propagate parse failures. Lenient: warn and treat as absent.
    fn apply_policy<T>(
        &self,
        parsed: Result<Option<T>>,
        column: &str,
        line: usize,
        stats: &mut LoadStats,
    ) -> Result<Option<T>> {
        match parsed {
            Ok(value) => Ok(value),
            Err(e) if e.is_parse_error() => match self.policy {
                ParseErrorPolicy::Strict => Err(e),
                ParseErrorPolicy::Lenient => {
                    warn!("Line {} '{}': {}; treating as missing", line, column, e);
                    stats.unparseable_values += 1;
                    stats
                        .errors
                        .push(format!("Line {} '{}': {}", line, column, e));
                    Ok(None)
                }
            },
            Err(e) => Err(e),
        }
    }
}
