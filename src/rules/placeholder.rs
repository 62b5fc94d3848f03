//! Placeholder consistency rule.
//!
//! Every translated form must use the same positional markers (`%1`..`%N`)
//! as its source, otherwise `QString::arg` fills the wrong slots or drops
//! arguments. Numerus forms may omit `%n` (singular wording), but a plain
//! translation must not introduce `%n` when the source has none.

use std::collections::{BTreeSet, HashSet};

use crate::{
    core::{
        Catalog, CheckContext, TranslationForms,
        placeholder::{format_placeholder, has_count_placeholder, positional_placeholders},
    },
    issues::PlaceholderIssue,
    rules::helpers::{checked_messages, message_context, sort_issues},
};

const COUNT_PLACEHOLDER: &str = "%n";

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    check_placeholders(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_placeholders(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in checked_messages(catalog, ignore_contexts) {
            let expected = positional_placeholders(&message.source);
            let source_has_count = has_count_placeholder(&message.source);

            let forms: Vec<(Option<usize>, &str)> = match &message.translation.forms {
                TranslationForms::Single(text) => vec![(None, text.as_str())],
                TranslationForms::Numerus(forms) => forms
                    .iter()
                    .enumerate()
                    .map(|(i, f)| (Some(i), f.as_str()))
                    .collect(),
            };

            for (form, text) in forms {
                // Untranslated forms are reported by `unfinished`
                if text.is_empty() {
                    continue;
                }

                let found = positional_placeholders(text);
                let missing = difference(&expected, &found);
                let mut unexpected = difference(&found, &expected);

                if !message.numerus && !source_has_count && has_count_placeholder(text) {
                    unexpected.push(COUNT_PLACEHOLDER.to_string());
                }
                if missing.is_empty() && unexpected.is_empty() {
                    continue;
                }

                issues.push(PlaceholderIssue {
                    context: message_context(catalog, context, message),
                    missing,
                    unexpected,
                    form,
                });
            }
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}

fn difference(left: &BTreeSet<u8>, right: &BTreeSet<u8>) -> Vec<String> {
    left.difference(right).map(|n| format_placeholder(*n)).collect()
}
