//! Configuration management and validation.
//!
//! Provides the layered configuration for a run: built-in defaults, an
//! optional TOML file, environment variables, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_PATH, DEFAULT_LONG_SHIFT_THRESHOLD_HOURS,
    DEFAULT_SHORT_SHIFT_MAX_HOURS, DEFAULT_SHORT_SHIFT_MIN_HOURS, DEFAULT_STREAK_THRESHOLD_DAYS,
    DEFAULT_TIMESTAMP_FORMATS, env_vars,
};
use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What to do with a value that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    /// Warn, count it, and treat the value as absent
    #[default]
    Lenient,
    /// Abort the run on the first unparseable value
    Strict,
}

/// How the streak walk treats two records of one employee on the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameDayPolicy {
    /// A repeated date is a zero-day gap and resets the streak to 1
    #[default]
    Reset,
    /// Repeated dates are merged before the walk
    Collapse,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub parsing: ParsingConfig,
    pub streak: StreakConfig,
    pub short_shift: ShortShiftConfig,
    pub long_shift: LongShiftConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Timecard CSV to analyze
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// chrono strftime patterns, tried in order
    pub timestamp_formats: Vec<String>,
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            timestamp_formats: DEFAULT_TIMESTAMP_FORMATS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    pub threshold_days: u32,
    pub same_day: SameDayPolicy,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_STREAK_THRESHOLD_DAYS,
            same_day: SameDayPolicy::default(),
        }
    }
}

/// Exclusive window `(min_hours, max_hours)` for short shifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortShiftConfig {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl Default for ShortShiftConfig {
    fn default() -> Self {
        Self {
            min_hours: DEFAULT_SHORT_SHIFT_MIN_HOURS,
            max_hours: DEFAULT_SHORT_SHIFT_MAX_HOURS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongShiftConfig {
    pub threshold_hours: f64,
}

impl Default for LongShiftConfig {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_LONG_SHIFT_THRESHOLD_HOURS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colored section headings in the report
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Platform location of the user config file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        Self::from_toml_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Defaults, then `config_file`, or `fallback` when no file was given
    /// and the fallback exists
    pub fn load_layered(config_file: Option<&Path>, fallback: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match fallback.filter(|path| path.exists()) {
                Some(path) => {
                    debug!("Loading default config file: {}", path.display());
                    Self::from_file(path)?
                }
                None => Self::default(),
            },
        };

        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::INPUT).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides input path", env_vars::INPUT);
            self.input.path = PathBuf::from(path.trim());
        }

        if let Some(days) = lookup(env_vars::STREAK_DAYS) {
            self.streak.threshold_days = days.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::STREAK_DAYS,
                    days
                ))
            })?;
        }

        Ok(())
    }

    /// Check thresholds and timestamp patterns for consistency
    pub fn validate(&self) -> Result<()> {
        if self.parsing.timestamp_formats.is_empty() {
            return Err(Error::configuration(
                "At least one timestamp format is required",
            ));
        }

        for pattern in &self.parsing.timestamp_formats {
            validate_timestamp_pattern(pattern)?;
        }

        if self.streak.threshold_days == 0 {
            return Err(Error::configuration(
                "Streak threshold must be at least 1 day",
            ));
        }

        let short = &self.short_shift;
        for (name, value) in [
            ("short_shift.min_hours", short.min_hours),
            ("short_shift.max_hours", short.max_hours),
            ("long_shift.threshold_hours", self.long_shift.threshold_hours),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if short.min_hours >= short.max_hours {
            return Err(Error::configuration(format!(
                "short_shift.min_hours ({}) must be less than short_shift.max_hours ({})",
                short.min_hours, short.max_hours
            )));
        }

        Ok(())
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.path = path.into();
        self
    }

    pub fn with_streak_threshold(mut self, days: u32) -> Self {
        self.streak.threshold_days = days;
        self
    }

    pub fn with_same_day_policy(mut self, policy: SameDayPolicy) -> Self {
        self.streak.same_day = policy;
        self
    }

    pub fn with_short_shift_window(mut self, min_hours: f64, max_hours: f64) -> Self {
        self.short_shift.min_hours = min_hours;
        self.short_shift.max_hours = max_hours;
        self
    }

    pub fn with_long_shift_threshold(mut self, hours: f64) -> Self {
        self.long_shift.threshold_hours = hours;
        self
    }

    pub fn with_parse_error_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.parsing.on_parse_error = policy;
        self
    }

    pub fn with_timestamp_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsing.timestamp_formats = formats.into_iter().map(Into::into).collect();
        self
    }
}

/// Reject empty patterns and patterns chrono cannot interpret
pub fn validate_timestamp_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(Error::configuration("Timestamp format cannot be empty"));
    }

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::configuration(format!(
            "Invalid timestamp format '{}'",
            pattern
        )));
    }

    Ok(())
}
