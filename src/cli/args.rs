//! Command-line argument definitions for the timecard analyzer
//!
//! Every flag is optional; anything left unset falls through to the
//! environment, the config file, then built-in defaults.

use crate::config::{Config, ParseErrorPolicy, SameDayPolicy};
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the timecard analyzer
///
/// Reads a timecard CSV export and reports employees who worked too many
/// consecutive days, had short shifts, or exceeded a single-shift limit.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "timecard-analyzer",
    version,
    about = "Flag attendance patterns in a timecard CSV export",
    long_about = "Reads a timecard CSV export (columns: Employee Name, Time, Time Out, \
                  Timecard Hours) and reports employees who worked a run of consecutive \
                  days, employees with short shifts, and shifts over a maximum duration."
)]
pub struct Args {
    /// Timecard CSV file to analyze
    ///
    /// If not specified, uses input.path from the config file, the
    /// TIMECARD_ANALYZER_INPUT environment variable, or ./timecards.csv
    #[arg(value_name = "INPUT", help = "Timecard CSV file to analyze")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for thresholds and timestamp formats. If not
    /// specified, looks for <config dir>/timecard-analyzer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Consecutive working days that trigger a finding
    #[arg(
        long = "threshold-days",
        value_name = "DAYS",
        help = "Consecutive days that trigger a streak finding (default 7)"
    )]
    pub threshold_days: Option<u32>,

    /// Lower bound of the short-shift window (exclusive)
    #[arg(
        long = "min-hours",
        value_name = "HOURS",
        help = "Shifts longer than this are candidates for short-shift findings (default 1)"
    )]
    pub min_hours: Option<f64>,

    /// Upper bound of the short-shift window (exclusive)
    #[arg(
        long = "max-hours",
        value_name = "HOURS",
        help = "Shifts shorter than this are candidates for short-shift findings (default 10)"
    )]
    pub max_hours: Option<f64>,

    /// Reported hours above which a shift is flagged
    #[arg(
        long = "long-shift-hours",
        value_name = "HOURS",
        help = "Reported hours above which a shift is flagged as long (default 14)"
    )]
    pub long_shift_hours: Option<f64>,

    /// Abort on the first unparseable timestamp or hours value
    ///
    /// By default such values are logged, counted and treated as absent.
    #[arg(long = "strict", help = "Abort on the first unparseable value")]
    pub strict: bool,

    /// Merge multiple records of one employee on the same day
    ///
    /// By default a second record on the same date resets the streak.
    #[arg(
        long = "collapse-same-day",
        help = "Count repeated dates of one employee as a single working day"
    )]
    pub collapse_same_day: bool,

    /// Disable colored section headings
    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    /// Print the configured timestamp formats and exit
    #[arg(
        long = "list-formats",
        help = "Print the timestamp formats tried, in order, and exit"
    )]
    pub list_formats: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate flag values before they reach the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if input.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory: {}",
                    input.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.threshold_days == Some(0) {
            return Err(Error::configuration(
                "Threshold days must be greater than 0",
            ));
        }

        for (flag, value) in [
            ("--min-hours", self.min_hours),
            ("--max-hours", self.max_hours),
            ("--long-shift-hours", self.long_shift_hours),
        ] {
            if let Some(hours) = value {
                if !hours.is_finite() || hours < 0.0 {
                    return Err(Error::configuration(format!(
                        "{} must be a non-negative number, got {}",
                        flag, hours
                    )));
                }
            }
        }

        Ok(())
    }

    /// Overlay the flags that were given onto `config`
    pub fn apply_to_config(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config = config.with_input_path(input);
        }
        if let Some(days) = self.threshold_days {
            config = config.with_streak_threshold(days);
        }
        if self.min_hours.is_some() || self.max_hours.is_some() {
            let min = self.min_hours.unwrap_or(config.short_shift.min_hours);
            let max = self.max_hours.unwrap_or(config.short_shift.max_hours);
            config = config.with_short_shift_window(min, max);
        }
        if let Some(hours) = self.long_shift_hours {
            config = config.with_long_shift_threshold(hours);
        }
        if self.strict {
            config = config.with_parse_error_policy(ParseErrorPolicy::Strict);
        }
        if self.collapse_same_day {
            config = config.with_same_day_policy(SameDayPolicy::Collapse);
        }
        if self.no_color {
            config.output.color = false;
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
