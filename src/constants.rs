//! Application constants for the timecard analyzer
//!
//! This module contains the fixed column names of the timecard export,
//! default analysis thresholds, default paths and the default ordered list
//! of accepted timestamp formats.

// =============================================================================
// Timecard Columns
// =============================================================================

/// Header literals of the timecard export, matched exactly
pub mod columns {
    /// Employee display name (required)
    pub const EMPLOYEE_NAME: &str = "Employee Name";

    /// Clock-in timestamp (required column, value may be blank)
    pub const TIME_IN: &str = "Time";

    /// Clock-out timestamp (optional column)
    pub const TIME_OUT: &str = "Time Out";

    /// Reported total hours for the shift (optional column)
    pub const TIMECARD_HOURS: &str = "Timecard Hours";

    /// Columns that must be present in the header row
    pub const REQUIRED: &[&str] = &[EMPLOYEE_NAME, TIME_IN];
}

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Consecutive calendar days that trigger a streak finding
pub const DEFAULT_STREAK_THRESHOLD_DAYS: u32 = 7;

/// Exclusive lower bound of the short-shift window, in hours
pub const DEFAULT_SHORT_SHIFT_MIN_HOURS: f64 = 1.0;

/// Exclusive upper bound of the short-shift window, in hours
pub const DEFAULT_SHORT_SHIFT_MAX_HOURS: f64 = 10.0;

/// Reported hours above which a shift counts as long
pub const DEFAULT_LONG_SHIFT_THRESHOLD_HOURS: f64 = 14.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Accepted timestamp formats, tried in this order
///
/// Month-first layouts come before the day-first layout, so an ambiguous
/// string such as `03-04-2023 09:00:00` always resolves to March 4th.
pub const DEFAULT_TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// =============================================================================
// Paths and Environment
// =============================================================================

/// Input file used when no path is given
pub const DEFAULT_INPUT_PATH: &str = "timecards.csv";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "timecard-analyzer";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables consulted between the config file and CLI flags
pub mod env_vars {
    pub const INPUT: &str = "TIMECARD_ANALYZER_INPUT";
    pub const STREAK_DAYS: &str = "TIMECARD_ANALYZER_STREAK_DAYS";
}

/// Log filter target for this crate
pub const LOG_TARGET: &str = "timecard_analyzer";
