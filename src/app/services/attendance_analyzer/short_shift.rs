//! Short-shift detection from clock-in and clock-out times

use tracing::debug;

use super::stats::DetectorOutcome;
use crate::app::models::{Finding, Summary, TimecardRecord};
use crate::config::ShortShiftConfig;

/// True when `hours` lies strictly inside `(min_hours, max_hours)`
pub fn is_short_shift(hours: f64, config: &ShortShiftConfig) -> bool {
    config.min_hours < hours && hours < config.max_hours
}

/// Flag shifts whose computed length falls inside the short-shift window
///
/// Records missing either timestamp are skipped silently. Findings follow
/// input order.
pub fn detect_short_shifts(
    records: &[TimecardRecord],
    config: &ShortShiftConfig,
) -> DetectorOutcome {
    let mut outcome = DetectorOutcome::new();

    for record in records {
        let Some(hours) = record.computed_hours() else {
            outcome.stats.records_without_value += 1;
            continue;
        };
        outcome.stats.records_examined += 1;

        if is_short_shift(hours, config) {
            debug!("{} worked a {:.2} hour shift", record.employee, hours);
            outcome.findings.push(Finding::short_shift(
                record.employee.as_str(),
                hours,
                config.max_hours,
            ));
        }
    }

    if outcome.findings.is_empty() {
        outcome.summaries.push(Summary::NoShortShifts {
            min_hours: config.min_hours,
            max_hours: config.max_hours,
        });
    }

    outcome
}
