//! Detector statistics and outcome structures

use crate::app::models::{Finding, Summary};

/// Counters for one detector pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetectorStats {
    /// Records the detector evaluated
    pub records_examined: usize,
    /// Records lacking the value the detector needs
    ///
    /// Skipped by the streak and short-shift passes; counted as zero hours
    /// by the long-shift pass.
    pub records_without_value: usize,
}

/// Everything one detector pass produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectorOutcome {
    pub findings: Vec<Finding>,
    pub summaries: Vec<Summary>,
    pub stats: DetectorStats,
}

impl DetectorOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }
}
