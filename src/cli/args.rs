//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tsglot commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, placeholders, numerus forms, etc.)
//! - `clean`: Remove vanished/obsolete entries from catalogs
//! - `stats`: Show translation progress per catalog
//! - `lookup`: Resolve a source string like the application would
//! - `init`: Initialize tsglot configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.args.common.verbose,
            Some(Command::Init(_)) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Catalogs directory, relative to the project root (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Context the message belongs to (e.g. "katvan::Editor")
    #[arg(long)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count used to pick the numerus form and fill %n
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Only use catalogs of this language (e.g. "he")
    #[arg(long)]
    pub language: Option<String>,

    /// Value for %1, %2, ... (repeat for each argument)
    #[arg(long = "arg", value_name = "VALUE")]
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source text to resolve
    pub source: String,
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for translation issues (unfinished, placeholders, numerus forms, ...)
    Check(CheckCommand),
    /// Remove vanished and obsolete entries from catalogs
    Clean(CleanCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Resolve a source string to its translation
    Lookup(LookupCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init(InitCommand),
    /// Start MCP server for AI coding agents
    Serve,
}
