//! Data models for timecard analysis
//!
//! This module contains the core data structures: the loaded timecard
//! record, the findings and summaries each analyzer produces, and the report
//! that collects them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::SECONDS_PER_HOUR;

// =============================================================================
// Timecard Record
// =============================================================================

/// One row of a timecard export
///
/// Timestamps are `None` when the field was blank (or unparseable under the
/// lenient parse policy). Reported hours stay `None` when absent; they are
/// never defaulted at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardRecord {
    /// Employee display name
    pub employee: String,

    /// Clock-in time
    pub time_in: Option<NaiveDateTime>,

    /// Clock-out time
    pub time_out: Option<NaiveDateTime>,

    /// Total hours as reported by the timecard system
    pub reported_hours: Option<f64>,
}

impl TimecardRecord {
    pub fn new(
        employee: impl Into<String>,
        time_in: Option<NaiveDateTime>,
        time_out: Option<NaiveDateTime>,
        reported_hours: Option<f64>,
    ) -> Self {
        Self {
            employee: employee.into(),
            time_in,
            time_out,
            reported_hours,
        }
    }

    /// Calendar day of the clock-in, if there is one
    pub fn work_date(&self) -> Option<NaiveDate> {
        self.time_in.map(|t| t.date())
    }

    /// Shift length computed from clock-in and clock-out
    ///
    /// Returns `None` unless both timestamps are present. The value is
    /// negative when clock-out precedes clock-in.
    pub fn computed_hours(&self) -> Option<f64> {
        match (self.time_in, self.time_out) {
            (Some(time_in), Some(time_out)) => {
                let seconds = (time_out - time_in).num_seconds() as f64;
                Some(seconds / SECONDS_PER_HOUR)
            }
            _ => None,
        }
    }
}

// =============================================================================
// Findings
// =============================================================================

/// Which analyzer produced a finding or summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    ConsecutiveDays,
    ShortShift,
    LongShift,
}

impl AnalyzerKind {
    /// All analyzers in the order they run
    pub const ALL: [AnalyzerKind; 3] = [
        AnalyzerKind::ConsecutiveDays,
        AnalyzerKind::ShortShift,
        AnalyzerKind::LongShift,
    ];

    /// Stable machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::ConsecutiveDays => "consecutive_days",
            AnalyzerKind::ShortShift => "short_shift",
            AnalyzerKind::LongShift => "long_shift",
        }
    }

    /// Section heading for human-readable output
    pub fn title(&self) -> &'static str {
        match self {
            AnalyzerKind::ConsecutiveDays => "Consecutive days",
            AnalyzerKind::ShortShift => "Short shifts",
            AnalyzerKind::LongShift => "Long shifts",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reportable event emitted by an analyzer
///
/// The serialized shape `{analyzer, employee, metric_value, threshold}` is
/// stable; `date` is only present for streak findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub analyzer: AnalyzerKind,
    pub employee: String,
    /// Streak length in days, or shift length in hours
    pub metric_value: f64,
    pub threshold: f64,
    /// Day on which a streak reached the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Finding {
    pub fn consecutive_days(
        employee: impl Into<String>,
        streak_days: u32,
        threshold_days: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            analyzer: AnalyzerKind::ConsecutiveDays,
            employee: employee.into(),
            metric_value: f64::from(streak_days),
            threshold: f64::from(threshold_days),
            date: Some(date),
        }
    }

    pub fn short_shift(employee: impl Into<String>, hours: f64, max_hours: f64) -> Self {
        Self {
            analyzer: AnalyzerKind::ShortShift,
            employee: employee.into(),
            metric_value: hours,
            threshold: max_hours,
            date: None,
        }
    }

    pub fn long_shift(employee: impl Into<String>, hours: f64, threshold_hours: f64) -> Self {
        Self {
            analyzer: AnalyzerKind::LongShift,
            employee: employee.into(),
            metric_value: hours,
            threshold: threshold_hours,
            date: None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.analyzer {
            AnalyzerKind::ConsecutiveDays => write!(
                f,
                "{} has worked for {} consecutive days.",
                self.employee,
                format_number(self.threshold)
            ),
            AnalyzerKind::ShortShift => write!(
                f,
                "{} has a short shift with {:.2} hours between shifts.",
                self.employee, self.metric_value
            ),
            AnalyzerKind::LongShift => write!(
                f,
                "{} has worked for more than {} hours in a single shift.",
                self.employee,
                format_number(self.threshold)
            ),
        }
    }
}

// =============================================================================
// Summaries
// =============================================================================

/// Run-level statement an analyzer makes besides its findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// No records to analyze
    EmptyData,
    /// Longest streak seen across all employees
    MaxConsecutiveDays { days: u32 },
    /// No streak reached the threshold
    NoConsecutiveStreak { threshold_days: u32 },
    /// No shift fell inside the short-shift window
    NoShortShifts { min_hours: f64, max_hours: f64 },
    /// No shift exceeded the long-shift threshold
    NoLongShifts { threshold_hours: f64 },
}

impl Summary {
    /// Analyzer this summary belongs to
    pub fn analyzer(&self) -> AnalyzerKind {
        match self {
            Summary::EmptyData
            | Summary::MaxConsecutiveDays { .. }
            | Summary::NoConsecutiveStreak { .. } => AnalyzerKind::ConsecutiveDays,
            Summary::NoShortShifts { .. } => AnalyzerKind::ShortShift,
            Summary::NoLongShifts { .. } => AnalyzerKind::LongShift,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::EmptyData => f.write_str("Empty data"),
            Summary::MaxConsecutiveDays { days } => {
                write!(f, "Maximum consecutive days: {}", days)
            }
            Summary::NoConsecutiveStreak { threshold_days } => write!(
                f,
                "No employee has worked for {} consecutive days.",
                threshold_days
            ),
            Summary::NoShortShifts {
                min_hours,
                max_hours,
            } => write!(
                f,
                "No shift lasted between {} and {} hours.",
                format_number(*min_hours),
                format_number(*max_hours)
            ),
            Summary::NoLongShifts { threshold_hours } => write!(
                f,
                "No shift exceeded {} hours.",
                format_number(*threshold_hours)
            ),
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// Everything one run of the analyzers produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub findings: Vec<Finding>,
    pub summaries: Vec<Summary>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings of one analyzer, in emission order
    pub fn findings_for(&self, analyzer: AnalyzerKind) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.analyzer == analyzer)
    }

    /// Summaries of one analyzer, in emission order
    pub fn summaries_for(&self, analyzer: AnalyzerKind) -> impl Iterator<Item = &Summary> {
        self.summaries
            .iter()
            .filter(move |summary| summary.analyzer() == analyzer)
    }

    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Print whole numbers without a fractional part (`14`, not `14.0`)
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
