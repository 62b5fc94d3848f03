//! Stale entry detection rule.
//!
//! Vanished and obsolete messages are kept by lupdate for reference after
//! their source text left the application. They are reported so that
//! `clean` can remove them.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext},
    issues::VanishedIssue,
    rules::helpers::{message_context, sort_issues},
};

pub fn check_vanished_issues(ctx: &CheckContext) -> Vec<VanishedIssue> {
    check_vanished(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_vanished(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<VanishedIssue> {
    let mut issues: Vec<VanishedIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(context, message)| {
                    message.is_stale() && !ignore_contexts.contains(&context.name)
                })
                .map(move |(context, message)| VanishedIssue {
                    context: message_context(catalog, context, message),
                    kind: message.translation.kind,
                })
        })
        .collect();

    sort_issues(&mut issues, |i| &i.context);
    issues
}
