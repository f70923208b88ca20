//! Timecard CSV loader
//!
//! This module reads a timecard export into [`TimecardRecord`] values. Each
//! row must name an employee; clock-out and reported hours are optional and
//! stay `None` when absent rather than being defaulted to zero.
//!
//! ## Architecture
//!
//! - [`loader`] - File and reader handling, row iteration, parse error policy
//! - [`column_mapping`] - Header validation and column lookup
//! - [`field_parsers`] - Field extraction and reported-hours parsing
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timecard_analyzer::app::services::timecard_loader::TimecardLoader;
//!
//! # fn example() -> timecard_analyzer::Result<()> {
//! let loader = TimecardLoader::default();
//! let result = loader.load_file(std::path::Path::new("timecards.csv"))?;
//!
//! println!("Loaded {} records from {} rows",
//!          result.stats.records_loaded,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! [`TimecardRecord`]: crate::app::models::TimecardRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use loader::TimecardLoader;
pub use stats::{LoadResult, LoadStats};
