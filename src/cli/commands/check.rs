use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandKind, CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        accelerator::check_accelerator_issues, duplicate::check_duplicate_issues,
        identical::check_identical_issues, language::check_language_issues,
        numerus::check_numerus_issues, placeholder::check_placeholder_issues,
        unfinished::check_unfinished_issues, vanished::check_vanished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Vanished,
    NumerusForms,
    Placeholder,
    Accelerator,
    Duplicate,
    Identical,
    Language,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Vanished,
            CheckRule::NumerusForms,
            CheckRule::Placeholder,
            CheckRule::Accelerator,
            CheckRule::Duplicate,
            CheckRule::Identical,
            CheckRule::Language,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues = run_checks(&ctx, &checks);

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandKind::Check,
        CommandSummary::Check,
        all_issues,
        ctx.catalogs().len(),
        ctx.message_count(),
        true,
    ))
}

/// Run the given rules against a loaded context.
///
/// Parse errors are not included; callers add `ctx.parse_errors()` when
/// they want them reported.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
            CheckRule::NumerusForms => {
                let issues = check_numerus_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusForms));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Accelerator => {
                let issues = check_accelerator_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Accelerator));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::Identical => {
                let issues = check_identical_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
            CheckRule::Language => {
                let issues = check_language_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Language));
            }
        }
    }

    all_issues
}
