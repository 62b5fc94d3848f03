use std::fmt;

use crate::core::plural::PluralRule;

/// State of a `<translation>` element, taken from its `type` attribute.
///
/// | `type` attribute | Variant |
/// |------------------|---------|
/// | absent           | `Finished` |
/// | `unfinished`     | `Unfinished` |
/// | `vanished`       | `Vanished` |
/// | `obsolete`       | `Obsolete` |
///
/// Vanished and obsolete entries are *stale*: their source text no longer
/// appears in the application, they are kept only for reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationType {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationType {
    /// Map a `type` attribute value. Unknown values are treated as finished.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("unfinished") => TranslationType::Unfinished,
            Some("vanished") => TranslationType::Vanished,
            Some("obsolete") => TranslationType::Obsolete,
            _ => TranslationType::Finished,
        }
    }

    /// The `type` attribute value to write, `None` for finished entries.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationType::Finished => None,
            TranslationType::Unfinished => Some("unfinished"),
            TranslationType::Vanished => Some("vanished"),
            TranslationType::Obsolete => Some("obsolete"),
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, TranslationType::Vanished | TranslationType::Obsolete)
    }
}

impl fmt::Display for TranslationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationType::Finished => write!(f, "finished"),
            TranslationType::Unfinished => write!(f, "unfinished"),
            TranslationType::Vanished => write!(f, "vanished"),
            TranslationType::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// The translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationForms {
    /// Plain `<translation>text</translation>`.
    Single(String),
    /// One entry per `<numerusform>` child, in document order.
    Numerus(Vec<String>),
}

impl Default for TranslationForms {
    fn default() -> Self {
        TranslationForms::Single(String::new())
    }
}

impl TranslationForms {
    /// All forms as string slices (a single form for plain translations).
    pub fn forms(&self) -> Vec<&str> {
        match self {
            TranslationForms::Single(text) => vec![text.as_str()],
            TranslationForms::Numerus(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// True when no form carries any text.
    pub fn is_empty(&self) -> bool {
        self.forms().iter().all(|form| form.is_empty())
    }

    /// True when at least one form is empty, or a numerus translation has
    /// no forms at all.
    pub fn has_empty_form(&self) -> bool {
        match self {
            TranslationForms::Single(text) => text.is_empty(),
            TranslationForms::Numerus(forms) => {
                forms.is_empty() || forms.iter().any(String::is_empty)
            }
        }
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self, TranslationForms::Numerus(_))
    }

    /// Human readable value for reports; numerus forms are joined with " | ".
    pub fn display_value(&self) -> String {
        self.forms().join(" | ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub kind: TranslationType,
    pub forms: TranslationForms,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationType::Finished,
            forms: TranslationForms::Single(text.into()),
        }
    }

    pub fn numerus(forms: Vec<String>) -> Self {
        Self {
            kind: TranslationType::Finished,
            forms: TranslationForms::Numerus(forms),
        }
    }

    pub fn with_kind(mut self, kind: TranslationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_stale(&self) -> bool {
        self.kind.is_stale()
    }

    /// Finished and carrying text in every form.
    pub fn is_complete(&self) -> bool {
        self.kind == TranslationType::Finished && !self.forms.has_empty_form()
    }
}

/// A `<location filename=".." line=".."/>` reference into application code.
///
/// `line` is kept verbatim because lupdate may write relative offsets ("+3").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: Option<String>,
}

/// A single `<message>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Source text in the base language, entities decoded.
    pub source: String,
    /// Disambiguation comment (`<comment>`), part of the lookup key.
    pub comment: Option<String>,
    /// Developer note for translators (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Note left by a translator (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    /// `numerus="yes"`: the message is count dependent.
    pub numerus: bool,
    pub translation: Translation,
    /// Line of the `<message>` element (1-indexed, 0 when built in memory).
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        let numerus = translation.forms.is_numerus();
        Self {
            source: source.into(),
            comment: None,
            extra_comment: None,
            translator_comment: None,
            locations: Vec::new(),
            numerus,
            translation,
            line: 0,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_stale(&self) -> bool {
        self.translation.is_stale()
    }

    /// Disambiguation comment, treating an empty comment as absent.
    pub fn disambiguation(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// A named group of messages, typically one UI class of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// One parsed `.ts` file: every context and message for a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Path of the file the catalog was read from.
    pub file_path: String,
    /// `TS@version`, "2.1" for current Qt releases.
    pub version: String,
    /// `TS@language`, e.g. "he_IL".
    pub language: String,
    /// `TS@sourcelanguage`, e.g. "en_US".
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

pub const DEFAULT_TS_VERSION: &str = "2.1";

impl Catalog {
    pub fn new(file_path: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            version: DEFAULT_TS_VERSION.to_string(),
            language: language.into(),
            source_language: None,
            contexts: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// Iterate over every message along with its context, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    /// Messages that are not vanished or obsolete.
    pub fn live_messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.messages().filter(|(_, msg)| !msg.is_stale())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }

    /// Primary language subtag in lowercase ("he_IL" -> "he").
    pub fn language_code(&self) -> String {
        primary_subtag(&self.language)
    }

    pub fn plural_rule(&self) -> PluralRule {
        PluralRule::for_language(&self.language)
    }
}

/// Lowercased primary language subtag of a locale tag ("pt-BR" -> "pt").
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
