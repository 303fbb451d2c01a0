//! The binary entry point for the wither room finder.

use std::process::ExitCode;

use clap::Parser;
use wither_config::CliArgs;

fn main() -> ExitCode {
    // Usage errors exit with status 2 inside clap.
    let args = CliArgs::parse();

    match wither_app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
