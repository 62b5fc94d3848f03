//! Command-line interface layer.
//!
//! Parses arguments, runs a command and prints its result. The library
//! layers (`core`, `rules`) never print; everything user facing lives here.

use std::{process::ExitCode, time::Instant};

use anyhow::Result;

pub mod actions;
pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::run;

use commands::CommandKind;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let started = Instant::now();
    let result = run(args)?;
    report::print(&result, verbose);

    if result.kind == CommandKind::Check {
        report::print_timing(started.elapsed());
    }

    Ok(ExitStatus::from_result(&result).into())
}
