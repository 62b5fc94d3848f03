use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsglot::cli::{Arguments, Command, ExitStatus};

/// Environment variable holding a `tracing` filter (e.g. `tsglot=debug`).
const LOG_ENV: &str = "TSGLOT_LOG";

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = tsglot::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match tsglot::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr so stdout stays machine readable (and free for MCP).
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
