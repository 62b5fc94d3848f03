//! Duplicate message detection rule.
//!
//! Within one catalog the key of a message is (context, source,
//! disambiguation comment). A second live entry with the same key can
//! never be looked up.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{Catalog, CheckContext},
    issues::DuplicateIssue,
    rules::helpers::{checked_messages, message_context, sort_issues},
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    check_duplicates(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_duplicates(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let mut first_seen: HashMap<(&str, &str, Option<&str>), usize> = HashMap::new();

        for (context, message) in checked_messages(catalog, ignore_contexts) {
            let key = (
                context.name.as_str(),
                message.source.as_str(),
                message.disambiguation(),
            );
            match first_seen.get(&key) {
                Some(&first_line) => issues.push(DuplicateIssue {
                    context: message_context(catalog, context, message),
                    first_line,
                }),
                None => {
                    first_seen.insert(key, message.line);
                }
            }
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}
