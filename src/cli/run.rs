//! Dispatches parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with error/warning counts and exit behavior
//! - `Err` if the command fails (e.g., invalid config, missing catalogs directory)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, clean::clean, init::init, lookup::lookup, stats::stats,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
