//! Runtime-style translation lookup over loaded catalogs.
//!
//! Mirrors how an application resolves strings with installed translators:
//! the most recently loaded catalog is searched first, only finished
//! non-empty translations count, and a miss yields the source string.

use tracing::debug;

use crate::core::{
    data::{Catalog, Message, TranslationForms, TranslationType},
    placeholder::fill_count,
};

#[derive(Debug, Default)]
pub struct Translator {
    catalogs: Vec<Catalog>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, catalog: Catalog) {
        debug!(
            file = %catalog.file_path,
            language = %catalog.language,
            messages = catalog.message_count(),
            "loaded catalog"
        );
        self.catalogs.push(catalog);
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Translated text for a message, or the source text when no catalog
    /// has a usable translation.
    ///
    /// `%n` / `%Ln` are replaced with `n` when a count is given.
    pub fn translate(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: Option<i64>,
    ) -> String {
        let text = self
            .lookup(context, source, disambiguation, n)
            .unwrap_or(source);
        match n {
            Some(count) => fill_count(text, count),
            None => text.to_string(),
        }
    }

    /// The raw translated form, without fallback or count substitution.
    ///
    /// For numerus messages the form is chosen by the catalog's plural
    /// rule (`n == None` selects the first form). Unfinished, stale and
    /// empty translations are not found.
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: Option<i64>,
    ) -> Option<&str> {
        let wanted_comment = disambiguation.filter(|c| !c.is_empty());

        self.catalogs.iter().rev().find_map(|catalog| {
            let message = find_message(catalog, context, source, wanted_comment)?;
            select_form(catalog, message, n)
        })
    }
}

fn find_message<'a>(
    catalog: &'a Catalog,
    context: &str,
    source: &str,
    comment: Option<&str>,
) -> Option<&'a Message> {
    catalog
        .live_messages()
        .find(|(ctx, msg)| {
            ctx.name == context && msg.source == source && msg.disambiguation() == comment
        })
        .map(|(_, msg)| msg)
}

fn select_form<'a>(catalog: &Catalog, message: &'a Message, n: Option<i64>) -> Option<&'a str> {
    if message.translation.kind != TranslationType::Finished {
        return None;
    }

    let text = match &message.translation.forms {
        TranslationForms::Single(text) => text.as_str(),
        TranslationForms::Numerus(forms) => {
            let index = n.map_or(0, |count| catalog.plural_rule().form_index(count));
            // Catalogs with too few forms fall back to the last one.
            forms.get(index).or_else(|| forms.last())?.as_str()
        }
    };

    (!text.is_empty()).then_some(text)
}
