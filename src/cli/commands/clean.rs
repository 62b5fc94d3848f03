use std::collections::HashSet;

use anyhow::{Ok, Result};

use super::super::{
    actions::{Action, RemoveMessage},
    args::CleanCommand,
};
use super::helper::finish;
use super::{CleanSummary, CommandKind, CommandResult, CommandSummary};
use crate::{core::CheckContext, issues::Issue, rules::vanished::check_vanished_issues};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let stale_issues = check_vanished_issues(&ctx);
    let stale_count = stale_issues.len();

    let (removed_count, file_count) = if apply && !stale_issues.is_empty() {
        let stats = RemoveMessage::run(&stale_issues)?;
        (stats.changes_applied, stats.files_modified)
    } else {
        let files: HashSet<&str> = stale_issues
            .iter()
            .map(|issue| issue.context.file_path())
            .collect();
        (0, files.len())
    };

    let parse_errors = ctx.parse_errors();
    let all_issues: Vec<Issue> = parse_errors
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandKind::Clean,
        CommandSummary::Clean(CleanSummary {
            stale_count,
            removed_count,
            file_count,
            is_apply: apply,
            stale_issues,
        }),
        all_issues,
        ctx.catalogs().len(),
        ctx.message_count(),
        false,
    ))
}
