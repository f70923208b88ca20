//! Timestamp normalization for timecard fields
//!
//! Timecard exports write clock-in and clock-out times inconsistently:
//! month-first or day-first, with or without seconds, 12-hour or 24-hour
//! clock. This module turns those strings into `NaiveDateTime` values by
//! trying an ordered list of chrono strftime patterns.
//!
//! ## Architecture
//!
//! - [`normalizer`] - The ordered-format normalizer and single-format parsing
//!
//! ## Usage
//!
//! ```rust
//! use timecard_analyzer::app::services::datetime_normalizer::DateTimeNormalizer;
//!
//! # fn example() -> timecard_analyzer::Result<()> {
//! let normalizer = DateTimeNormalizer::with_default_formats();
//! let parsed = normalizer.normalize(Some("01/02/2023 9:15 AM"))?;
//! assert!(parsed.is_some());
//! assert_eq!(normalizer.normalize(Some(""))?, None);
//! # Ok(())
//! # }
//! ```

pub mod normalizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use normalizer::{DateTimeNormalizer, TimestampFormat};
