//! Long-shift detection from reported hours
//!
//! Uses the hours the timecard system reported, not the clock-in/clock-out
//! span. A record without reported hours counts as zero hours and so never
//! qualifies; this cannot be told apart from a genuine zero-hour shift.

use tracing::debug;

use super::stats::DetectorOutcome;
use crate::app::models::{Finding, Summary, TimecardRecord};
use crate::config::LongShiftConfig;

/// Flag shifts whose reported hours exceed `threshold_hours`
pub fn detect_long_shifts(records: &[TimecardRecord], config: &LongShiftConfig) -> DetectorOutcome {
    let mut outcome = DetectorOutcome::new();

    for record in records {
        outcome.stats.records_examined += 1;

        let hours = match record.reported_hours {
            Some(hours) => hours,
            None => {
                outcome.stats.records_without_value += 1;
                0.0
            }
        };

        if hours > config.threshold_hours {
            debug!("{} reported {} hours in one shift", record.employee, hours);
            outcome.findings.push(Finding::long_shift(
                record.employee.as_str(),
                hours,
                config.threshold_hours,
            ));
        }
    }

    if outcome.findings.is_empty() {
        outcome.summaries.push(Summary::NoLongShifts {
            threshold_hours: config.threshold_hours,
        });
    }

    outcome
}
