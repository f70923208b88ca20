//! Attendance analysis over loaded timecard records
//!
//! Three independent, read-only passes over the same record set:
//!
//! - [`streak`] - Employees who worked a run of consecutive calendar days
//! - [`short_shift`] - Shifts whose clock-in/clock-out span falls inside an
//!   exclusive hour window
//! - [`long_shift`] - Shifts whose reported hours exceed a threshold
//!
//! [`analyzer`] runs them in that order and collects the findings into an
//! [`AnalysisReport`]. None of the passes print; presentation lives in the
//! report formatter.
//!
//! # Example Usage
//!
//! ```rust
//! use timecard_analyzer::app::services::attendance_analyzer::AttendanceAnalyzer;
//! use timecard_analyzer::config::Config;
//!
//! let analyzer = AttendanceAnalyzer::from_config(&Config::default());
//! let result = analyzer.analyze(&[]);
//!
//! assert!(result.report.findings.is_empty());
//! assert_eq!(result.report.summaries[0].to_string(), "Empty data");
//! ```
//!
//! [`AnalysisReport`]: crate::app::models::AnalysisReport

pub mod analyzer;
pub mod long_shift;
pub mod short_shift;
pub mod stats;
pub mod streak;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analyzer::{AnalysisResult, AttendanceAnalyzer};
pub use long_shift::detect_long_shifts;
pub use short_shift::detect_short_shifts;
pub use stats::{DetectorOutcome, DetectorStats};
pub use streak::{EmployeeStreakState, detect_consecutive_days};
