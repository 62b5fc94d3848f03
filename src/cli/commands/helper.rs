use super::{CommandKind, CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    kind: CommandKind,
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    catalogs_checked: usize,
    messages_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    match &summary {
        CommandSummary::Init(summary) if !summary.created => error_count += 1,
        CommandSummary::Lookup(summary) if !summary.found => error_count += 1,
        _ => {}
    }

    CommandResult {
        kind,
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
        messages_checked,
    }
}
