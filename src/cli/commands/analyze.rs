//! Analyze command: load timecards, run the detectors, write the report

use std::io::Write;
use tracing::{info, warn};

use crate::app::services::attendance_analyzer::{AnalysisResult, AttendanceAnalyzer};
use crate::app::services::report_formatter;
use crate::app::services::timecard_loader::{LoadStats, TimecardLoader};
use crate::config::Config;
use crate::Result;

/// Everything a finished run produced besides the rendered report
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub load_stats: LoadStats,
    pub analysis: AnalysisResult,
}

/// Run the full pipeline for `config` and render the report into `out`
pub fn run_analyze<W: Write>(config: &Config, out: &mut W) -> Result<AnalyzeOutcome> {
    let loader = TimecardLoader::from_config(&config.parsing)?;
    let loaded = loader.load_file(&config.input.path)?;

    if loaded.stats.unparseable_values > 0 || loaded.stats.rows_skipped > 0 {
        warn!(
            "{} rows skipped and {} values treated as absent in {}",
            loaded.stats.rows_skipped,
            loaded.stats.unparseable_values,
            config.input.path.display()
        );
    }

    let analyzer = AttendanceAnalyzer::from_config(config);
    let analysis = analyzer.analyze(&loaded.records);

    report_formatter::render(&analysis.report, config.output.color, out)?;
    out.flush()?;

    info!(
        "Analysis complete: {} findings from {} records",
        analysis.report.finding_count(),
        loaded.records.len()
    );

    Ok(AnalyzeOutcome {
        load_stats: loaded.stats,
        analysis,
    })
}

/// Print the timestamp formats the loader will try, in order
pub fn write_formats<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    for (index, pattern) in config.parsing.timestamp_formats.iter().enumerate() {
        writeln!(out, "{:>2}. {}", index + 1, pattern)?;
    }
    Ok(())
}
