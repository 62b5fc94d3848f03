//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsglot to be used as a library.

use std::{
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;

use super::{
    actions::{Action, RemoveMessage},
    commands::{
        CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
    },
};
use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::{pad_display, truncate_display};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Environment variable that suppresses the timing line.
pub const DISABLE_TIMING_ENV: &str = "TSGLOT_DISABLE_TIMING";

/// Widest catalog path shown in the stats table.
const MAX_PATH_WIDTH: usize = 48;

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, location and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Gutter width for the "=" lines, as wide as the largest line number
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize, messages: usize) {
    print_success_to(catalogs, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, messages: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} ({} {}) - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print how long the command took, unless disabled via environment.
pub fn print_timing(elapsed: Duration) {
    if std::env::var_os(DISABLE_TIMING_ENV).is_some() {
        return;
    }
    eprintln!(
        "{}",
        format!("Finished in {:.2}s", elapsed.as_secs_f64()).dimmed()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let loc = issue.location();
    let location = match &loc {
        ReportLocation::Message(ctx) => {
            format!("{}:{}:{}", ctx.file_path(), ctx.line(), ctx.col())
        }
        ReportLocation::File { path, line: 0 } => path.to_string(),
        ReportLocation::File { path, line } => format!("{}:{}", path, line),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let ReportLocation::Message(ctx) = &loc {
        print_note(writer, max_line_width, "context:".bold(), &ctx.context);
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        print_note(writer, max_line_width, "note:".bold(), &details);
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        print_note(writer, max_line_width, "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_note<W: Write>(
    writer: &mut W,
    max_line_width: usize,
    label: colored::ColoredString,
    text: &str,
) {
    let _ = writeln!(
        writer,
        "{:>width$} {} {} {}",
        "",
        "=".blue(),
        label,
        text,
        width = max_line_width
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalogs_checked, result.messages_checked);
            }
            // Parse errors are part of the report
            return;
        }
        CommandSummary::Clean(summary) => print_clean(summary),
        CommandSummary::Stats(summary) => print_stats(summary, &mut io::stdout().lock()),
        CommandSummary::Lookup(summary) => print_lookup(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_clean(summary: &CleanSummary) {
    if summary.stale_count == 0 {
        println!("{} {}", SUCCESS_MARK.green(), "No stale entries to clean.".green());
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} stale entr{} from {} file(s).",
            "Removed".green().bold(),
            summary.removed_count,
            if summary.removed_count == 1 { "y" } else { "ies" },
            summary.file_count
        );
    } else {
        RemoveMessage::preview(&summary.stale_issues);
        println!(
            "{} {} stale entr{} from {} file(s).",
            "Would remove".yellow().bold(),
            summary.stale_count,
            if summary.stale_count == 1 { "y" } else { "ies" },
            summary.file_count
        );
        println!("Run with {} to rewrite these catalogs.", "--apply".cyan());
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.json {
        if let Ok(json) = serde_json::to_string_pretty(&summary.catalogs) {
            let _ = writeln!(writer, "{}", json);
        }
        return;
    }
    print_stats_table(&summary.catalogs, writer);
}

fn print_stats_table<W: Write>(catalogs: &[CatalogStats], writer: &mut W) {
    if catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let paths: Vec<String> = catalogs
        .iter()
        .map(|s| truncate_display(&s.file_path, MAX_PATH_WIDTH))
        .collect();
    let path_width = paths
        .iter()
        .map(|p| unicode_width::UnicodeWidthStr::width(p.as_str()))
        .max()
        .unwrap_or(0)
        .max("Catalog".len());

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{}  {:<8} {:>8} {:>8} {:>10} {:>6} {:>7}",
            pad_display("Catalog", path_width),
            "Language",
            "Messages",
            "Finished",
            "Unfinished",
            "Stale",
            "Done"
        )
        .bold()
    );

    for (stats, path) in catalogs.iter().zip(&paths) {
        let done = format!("{:.1}%", stats.completion);
        let done = if stats.unfinished == 0 {
            done.green()
        } else {
            done.yellow()
        };
        let _ = writeln!(
            writer,
            "{}  {:<8} {:>8} {:>8} {:>10} {:>6} {:>7}",
            pad_display(path, path_width),
            stats.language,
            stats.messages,
            stats.finished,
            stats.unfinished,
            stats.stale,
            done
        );
    }
}

fn print_lookup(summary: &LookupSummary) {
    println!("{}", summary.text);
    if !summary.found {
        eprintln!(
            "{} no translation for \"{}\" in context \"{}\", using source text",
            "warning:".bold().yellow(),
            summary.source,
            summary.context
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            summary.path.display()
        );
    }
}

// ============================================================
// Tests
// ============================================================
