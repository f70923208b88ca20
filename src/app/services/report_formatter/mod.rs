//! Report rendering for attendance analysis results
//!
//! Analyzers return typed findings and summaries; this module is the only
//! place that turns them into text. The report has one section per
//! analyzer, in run order: a heading, the finding lines, then the summary
//! lines. Library callers wanting structured output serialize
//! [`AnalysisReport`](crate::app::models::AnalysisReport) with serde instead.

pub mod formatter;

pub use formatter::render;
