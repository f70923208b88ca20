//! Human-readable writer for an [`AnalysisReport`]

use colored::Colorize;
use std::io::Write;

use crate::app::models::{AnalysisReport, AnalyzerKind};
use crate::{Error, Result};

/// One section per analyzer: heading, finding lines, then summary lines
pub fn render<W: Write>(report: &AnalysisReport, color: bool, out: &mut W) -> Result<()> {
    for (index, kind) in AnalyzerKind::ALL.into_iter().enumerate() {
        if index > 0 {
            writeln!(out).map_err(write_error)?;
        }

        if color {
            writeln!(out, "{}", kind.title().bright_green().bold()).map_err(write_error)?;
        } else {
            writeln!(out, "{}", kind.title()).map_err(write_error)?;
        }

        for finding in report.findings_for(kind) {
            writeln!(out, "{}", finding).map_err(write_error)?;
        }
        for summary in report.summaries_for(kind) {
            writeln!(out, "{}", summary).map_err(write_error)?;
        }
    }

    Ok(())
}

fn write_error(source: std::io::Error) -> Error {
    Error::io("Failed to write report", source)
}
