use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CommandKind, CommandResult, CommandSummary, StatsSummary};
use crate::{
    core::{CatalogStats, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let catalogs: Vec<CatalogStats> = ctx
        .catalogs()
        .iter()
        .map(CatalogStats::from_catalog)
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandKind::Stats,
        CommandSummary::Stats(StatsSummary {
            catalogs,
            json: args.json,
        }),
        issues,
        ctx.catalogs().len(),
        ctx.message_count(),
        false,
    ))
}
