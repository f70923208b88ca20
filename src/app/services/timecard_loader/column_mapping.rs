//! Header validation and column lookup for timecard exports
//!
//! Column names are matched exactly after trimming surrounding whitespace.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for a timecard header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Index the header row and check that the required columns exist
    pub fn analyze(headers: &StringRecord, source: &str) -> Result<Self> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(Error::data_format(source, "no header row"));
        }

        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let missing: Vec<&str> = columns::REQUIRED
            .iter()
            .copied()
            .filter(|name| !name_to_index.contains_key(*name))
            .collect();

        if !missing.is_empty() {
            return Err(Error::data_format(
                source,
                format!("missing required column(s): {}", missing.join(", ")),
            ));
        }

        Ok(ColumnMapping { name_to_index })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Optional columns this export lacks entirely
    pub fn absent_optional_columns(&self) -> Vec<&'static str> {
        [columns::TIME_OUT, columns::TIMECARD_HOURS]
            .into_iter()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}
