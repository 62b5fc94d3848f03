//! Numerus form count rule.
//!
//! A message marked `numerus="yes"` must carry exactly as many
//! `<numerusform>` elements as the catalog language's plural rule
//! requires (two for Hebrew). A plain message must not carry any.
//!
//! Numerus messages with no text at all are left to the `unfinished` rule.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, TranslationForms},
    issues::NumerusFormsIssue,
    rules::helpers::{checked_messages, message_context, sort_issues},
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusFormsIssue> {
    check_numerus(ctx.catalogs(), &ctx.ignore_contexts)
}

pub fn check_numerus(
    catalogs: &[Catalog],
    ignore_contexts: &HashSet<String>,
) -> Vec<NumerusFormsIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let expected = catalog.plural_rule().form_count();

        for (context, message) in checked_messages(catalog, ignore_contexts) {
            let forms = &message.translation.forms;
            if forms.is_empty() {
                continue;
            }

            let actual = match forms {
                TranslationForms::Numerus(forms) => forms.len(),
                TranslationForms::Single(_) => 0,
            };

            let mismatch = if message.numerus {
                actual != expected
            } else {
                actual > 0
            };
            if !mismatch {
                continue;
            }

            issues.push(NumerusFormsIssue {
                context: message_context(catalog, context, message),
                language: catalog.language.clone(),
                expected: if message.numerus { expected } else { 0 },
                actual,
                numerus: message.numerus,
            });
        }
    }

    sort_issues(&mut issues, |i| &i.context);
    issues
}
