use anyhow::{Ok, Result};
use tracing::debug;

use super::super::args::LookupCommand;
use super::helper::finish;
use super::{CommandKind, CommandResult, CommandSummary, LookupSummary};
use crate::{
    core::{CheckContext, placeholder::fill_args},
    issues::Issue,
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let translator = ctx.translator(args.language.as_deref());
    debug!(
        catalogs = translator.catalogs().len(),
        context = %args.context,
        "resolving source text"
    );

    let comment = args.comment.as_deref();
    let found = translator
        .lookup(&args.context, &cmd.source, comment, args.count)
        .is_some();
    let text = translator.translate(&args.context, &cmd.source, comment, args.count);

    let values: Vec<&str> = args.values.iter().map(String::as_str).collect();
    let text = if values.is_empty() {
        text
    } else {
        fill_args(&text, &values)
    };

    // Catalogs that failed to parse take no part in the lookup
    let parse_errors: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandKind::Lookup,
        CommandSummary::Lookup(LookupSummary {
            context: args.context.clone(),
            source: cmd.source.clone(),
            text,
            found,
        }),
        parse_errors,
        translator.catalogs().len(),
        ctx.message_count(),
        true,
    ))
}
