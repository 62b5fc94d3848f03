//! Unfinished translation detection rule.
//!
//! Reports live messages that have no usable translation: either the
//! translation is marked `type="unfinished"` or one of its forms is empty.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, TranslationType},
    issues::{UnfinishedIssue, UnfinishedReason},
    rules::helpers::{checked_messages, message_context, sort_issues},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_unfinished(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in checked_messages(catalog, ignore_contexts) {
            let reason = if message.translation.kind == TranslationType::Unfinished {
                UnfinishedReason::Marked
            } else if message.translation.forms.is_empty() {
                UnfinishedReason::Empty
            } else if message.translation.forms.has_empty_form() {
                UnfinishedReason::EmptyForm
            } else {
                continue;
            };

            issues.push(UnfinishedIssue {
                context: message_context(catalog, context, message),
                reason,
            });
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}
