//! Attendance analyzer orchestration
//!
//! Runs the streak, short-shift and long-shift detectors over one record set
//! and merges their outcomes into a single report.

use tracing::info;

use super::{
    long_shift::detect_long_shifts,
    short_shift::detect_short_shifts,
    stats::{DetectorOutcome, DetectorStats},
    streak::detect_consecutive_days,
};
use crate::app::models::{AnalysisReport, AnalyzerKind, TimecardRecord};
use crate::config::{Config, LongShiftConfig, ShortShiftConfig, StreakConfig};

/// Report plus per-detector counters
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub report: AnalysisReport,
    /// Counters in run order
    pub detector_stats: Vec<(AnalyzerKind, DetectorStats)>,
}

impl AnalysisResult {
    pub fn stats_for(&self, analyzer: AnalyzerKind) -> Option<&DetectorStats> {
        self.detector_stats
            .iter()
            .find(|(kind, _)| *kind == analyzer)
            .map(|(_, stats)| stats)
    }
}

/// Runs all attendance detectors with one set of thresholds
#[derive(Debug, Clone, Default)]
pub struct AttendanceAnalyzer {
    streak: StreakConfig,
    short_shift: ShortShiftConfig,
    long_shift: LongShiftConfig,
}

impl AttendanceAnalyzer {
    pub fn new(
        streak: StreakConfig,
        short_shift: ShortShiftConfig,
        long_shift: LongShiftConfig,
    ) -> Self {
        Self {
            streak,
            short_shift,
            long_shift,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.streak.clone(),
            config.short_shift.clone(),
            config.long_shift.clone(),
        )
    }

    /// Run the detectors in order: streak, short shift, long shift
    ///
    /// The detectors share no state; each reads the records independently.
    pub fn analyze(&self, records: &[TimecardRecord]) -> AnalysisResult {
        info!("Analyzing {} timecard records", records.len());

        let mut report = AnalysisReport::new();
        let mut detector_stats = Vec::with_capacity(AnalyzerKind::ALL.len());

        for kind in AnalyzerKind::ALL {
            let outcome = self.run_detector(kind, records);
            info!(
                "{}: {} finding(s), {} record(s) examined, {} without a value",
                kind,
                outcome.finding_count(),
                outcome.stats.records_examined,
                outcome.stats.records_without_value
            );

            report.findings.extend(outcome.findings);
            report.summaries.extend(outcome.summaries);
            detector_stats.push((kind, outcome.stats));
        }

        AnalysisResult {
            report,
            detector_stats,
        }
    }

    fn run_detector(&self, kind: AnalyzerKind, records: &[TimecardRecord]) -> DetectorOutcome {
        match kind {
            AnalyzerKind::ConsecutiveDays => detect_consecutive_days(records, &self.streak),
            AnalyzerKind::ShortShift => detect_short_shifts(records, &self.short_shift),
            AnalyzerKind::LongShift => detect_long_shifts(records, &self.long_shift),
        }
    }
}
