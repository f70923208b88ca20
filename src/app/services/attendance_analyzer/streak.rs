//! Consecutive-day streak detection
//!
//! Records are partitioned by employee, each employee's work dates are sorted
//! ascending, and the sorted dates are walked with an [`EmployeeStreakState`].
//! A date exactly one calendar day after the anchor extends the streak; any
//! other gap, including a repeated date, starts a new streak of 1.
//!
//! A finding is emitted once per streak, on the day its length first equals
//! the threshold. A streak that keeps growing past the threshold does not
//! emit again; a later, separate streak that reaches it does.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use super::stats::{DetectorOutcome, DetectorStats};
use crate::app::models::{Finding, Summary, TimecardRecord};
use crate::config::{SameDayPolicy, StreakConfig};

/// Streak bookkeeping for one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeStreakState {
    /// Most recent date of the current streak
    pub anchor: NaiveDate,
    pub consecutive_days: u32,
}

impl EmployeeStreakState {
    /// Begin a streak of 1 on `date`
    pub fn start(date: NaiveDate) -> Self {
        Self {
            anchor: date,
            consecutive_days: 1,
        }
    }

    /// Move to the next work date and return the streak length on that date
    pub fn advance(&mut self, date: NaiveDate) -> u32 {
        if self.anchor.succ_opt() == Some(date) {
            self.consecutive_days += 1;
        } else {
            self.consecutive_days = 1;
        }
        self.anchor = date;
        self.consecutive_days
    }
}

/// Find employees with `threshold_days` or more consecutive work days
///
/// Records without a parseable clock-in are left out of the walk; they do
/// not break a streak in progress. Findings come out grouped by employee
/// name, in date order within an employee.
pub fn detect_consecutive_days(
    records: &[TimecardRecord],
    config: &StreakConfig,
) -> DetectorOutcome {
    let mut outcome = DetectorOutcome::new();

    if records.is_empty() {
        outcome.summaries.push(Summary::EmptyData);
        return outcome;
    }

    let threshold = config.threshold_days;
    let work_dates = partition_work_dates(records, config.same_day, &mut outcome.stats);
    let mut max_consecutive_days = 0;

    for (employee, dates) in &work_dates {
        let mut state: Option<EmployeeStreakState> = None;

        for &date in dates {
            let consecutive_days = match state.as_mut() {
                Some(state) => state.advance(date),
                None => {
                    state = Some(EmployeeStreakState::start(date));
                    1
                }
            };

            max_consecutive_days = max_consecutive_days.max(consecutive_days);

            if consecutive_days == threshold {
                debug!("{} reached {} consecutive days on {}", employee, threshold, date);
                outcome.findings.push(Finding::consecutive_days(
                    *employee,
                    consecutive_days,
                    threshold,
                    date,
                ));
            }
        }
    }

    outcome.summaries.push(Summary::MaxConsecutiveDays {
        days: max_consecutive_days,
    });
    if max_consecutive_days < threshold {
        outcome.summaries.push(Summary::NoConsecutiveStreak {
            threshold_days: threshold,
        });
    }

    outcome
}

/// Sorted work dates per employee, keyed by name
fn partition_work_dates<'a>(
    records: &'a [TimecardRecord],
    same_day: SameDayPolicy,
    stats: &mut DetectorStats,
) -> BTreeMap<&'a str, Vec<NaiveDate>> {
    let mut work_dates: BTreeMap<&str, Vec<NaiveDate>> = BTreeMap::new();

    for record in records {
        match record.work_date() {
            Some(date) => {
                stats.records_examined += 1;
                work_dates
                    .entry(record.employee.as_str())
                    .or_default()
                    .push(date);
            }
            None => stats.records_without_value += 1,
        }
    }

    for dates in work_dates.values_mut() {
        dates.sort_unstable();
        if same_day == SameDayPolicy::Collapse {
            dates.dedup();
        }
    }

    work_dates
}
