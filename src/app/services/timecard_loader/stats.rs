//! Load statistics and result structures for timecard loading

use crate::app::models::TimecardRecord;

/// Loaded records with basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Records in file order
    pub records: Vec<TimecardRecord>,

    /// Basic load statistics
    pub stats: LoadStats,
}

/// Simple load statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of records loaded
    pub records_loaded: usize,

    /// Number of rows dropped (no employee name, malformed CSV row)
    pub rows_skipped: usize,

    /// Timestamp or hours values that failed to parse and were treated as absent
    pub unparseable_values: usize,

    /// Messages for skipped rows and values, for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} records ({:.1}% loaded) | skipped: {} | unparseable values: {}",
            self.total_rows,
            self.records_loaded,
            self.success_rate(),
            self.rows_skipped,
            self.unparseable_values
        )
    }
}
