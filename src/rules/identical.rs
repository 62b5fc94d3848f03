//! Identical translation detection rule.
//!
//! Flags finished translations that are exactly their source text, which
//! usually means the text was copied instead of translated. Texts without
//! alphabetic characters (`%1 / %2`, `...`) and texts listed in
//! `ignoreTexts` (product names such as "Typst") are exempt. Catalogs in
//! their own source language are skipped entirely.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, TranslationForms, primary_subtag},
    issues::IdenticalIssue,
    rules::helpers::{checked_messages, message_context, sort_issues},
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    check_identical(ctx.catalogs(), &ctx.ignore_contexts, &ctx.ignore_texts)
}

pub fn check_identical(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
    ignore_texts: &HashSet<String>,
) -> Vec<IdenticalIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        if is_source_language(catalog) {
            continue;
        }

        for (context, message) in checked_messages(catalog, ignore_contexts) {
            if !message.translation.is_complete() {
                continue;
            }
            let TranslationForms::Single(text) = &message.translation.forms else {
                continue;
            };
            if *text != message.source
                || !contains_alphabetic(text)
                || ignore_texts.contains(text.as_str())
            {
                continue;
            }

            issues.push(IdenticalIssue {
                context: message_context(catalog, context, message),
            });
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}

fn is_source_language(catalog: &Catalog) -> bool {
    catalog
        .source_language
        .as_deref()
        .is_some_and(|source| primary_subtag(source) == catalog.language_code())
}
