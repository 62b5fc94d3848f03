//! Helper functions shared by rule implementations.
//!
//! - `message_context`: builds the report location of a message
//! - `checked_messages`: live messages outside ignored contexts
//! - `sort_issues`: deterministic ordering (file, line, source)

use std::collections::HashSet;

use crate::core::{Catalog, Context, Message, MessageContext, MessageLocation};

/// Column reported for message issues: `<message>` sits at four spaces.
pub const MESSAGE_COL: usize = 5;

/// Build the report location of `message` inside `catalog`.
pub fn message_context(catalog: &Catalog, context: &Context, message: &Message) -> MessageContext {
    MessageContext::new(
        MessageLocation::new(&catalog.file_path, message.line, MESSAGE_COL),
        &context.name,
        &message.source,
        message.translation.forms.display_value(),
    )
}

/// Messages every rule except `vanished` looks at: not stale, and not in
/// a context listed in `ignoreContexts`.
pub fn checked_messages<'a>(
    catalog: &'a Catalog,
    ignore_contexts: &'a HashSet<String>,
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    catalog
        .live_messages()
        .filter(|(ctx, _)| !ignore_contexts.contains(&ctx.name))
}

/// Sort issues by file path, then line, then source text.
pub fn sort_issues<T, F>(issues: &mut [T], context_of: F)
where
    F: Fn(&T) -> &MessageContext,
{
    issues.sort_by(|a, b| {
        let (a, b) = (context_of(a), context_of(b));
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.source.cmp(&b.source))
    });
}
