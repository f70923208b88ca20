//! Command implementations for the timecard analyzer CLI
//!
//! `run` wires argument parsing output to the analyze pipeline:
//! - `shared`: logging setup and layered configuration
//! - `analyze`: load, detect, render

pub mod analyze;
pub mod shared;

pub use analyze::{AnalyzeOutcome, run_analyze, write_formats};

use crate::Result;
use crate::cli::args::Args;
use crate::config::Config;
use std::io::Write;

/// Main command runner; the report goes to stdout
pub fn run(args: Args) -> Result<Option<AnalyzeOutcome>> {
    args.validate()?;
    let config = shared::load_configuration(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, &config, &mut out)
}

/// Run the requested action with an already layered `config`
///
/// Returns `None` when only the format list was requested.
pub fn execute<W: Write>(
    args: &Args,
    config: &Config,
    out: &mut W,
) -> Result<Option<AnalyzeOutcome>> {
    if args.list_formats {
        write_formats(config, out)?;
        return Ok(None);
    }

    run_analyze(config, out).map(Some)
}
