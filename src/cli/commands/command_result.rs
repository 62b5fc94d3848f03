use std::path::PathBuf;

use crate::core::CatalogStats;
use crate::issues::{Issue, VanishedIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Clean,
    Stats,
    Lookup,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Vanished and obsolete entries found.
    pub stale_count: usize,
    /// Entries actually removed (0 in dry-run mode).
    pub removed_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub stale_issues: Vec<VanishedIssue>,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub context: String,
    pub source: String,
    /// Translated text, or the source text when nothing was found.
    pub text: String,
    pub found: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub created: bool,
}

/// Result of running tsglot commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues reported by the command, sorted.
    /// Parse errors only, for commands other than `check`.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were parsed.
    pub catalogs_checked: usize,
    /// Number of messages across parsed catalogs.
    pub messages_checked: usize,
}
