use clap::Parser;
use std::process;
use timecard_analyzer::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::shared::setup_logging(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }

    match commands::run(args) {
        Ok(_outcome) => {
            // Report has already been written to stdout
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
