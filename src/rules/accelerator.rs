//! Keyboard accelerator rule.
//!
//! Menu and button texts mark their mnemonic with `&` (`&File`). When the
//! source has one the translation should provide one too, and a
//! translation should not invent a mnemonic the source does not have.
//! Disabled with `"checkAccelerators": false`.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, TranslationForms, placeholder::accelerator},
    issues::AcceleratorIssue,
    rules::helpers::{checked_messages, message_context, sort_issues},
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorIssue> {
    if !ctx.config.check_accelerators {
        return Vec::new();
    }
    check_accelerators(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_accelerators(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<AcceleratorIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in checked_messages(catalog, ignore_contexts) {
            // Numerus texts are never menu entries
            let TranslationForms::Single(text) = &message.translation.forms else {
                continue;
            };
            if text.is_empty() {
                continue;
            }

            let source_accelerator = accelerator(&message.source);
            let translation_accelerator = accelerator(text);
            if source_accelerator.is_some() == translation_accelerator.is_some() {
                continue;
            }

            issues.push(AcceleratorIssue {
                context: message_context(catalog, context, message),
                source_accelerator,
                translation_accelerator,
            });
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}
