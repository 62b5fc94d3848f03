//! Issue types for catalog checks.
//!
//! This module defines all issue types that can be detected in `.ts` catalogs.
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Action: to fix the issue (remove stale messages)

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, TranslationType};
use crate::utils::single_line;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Unfinished,
    Vanished,
    NumerusForms,
    Placeholder,
    Accelerator,
    Duplicate,
    Identical,
    Language,
    ParseError,
}

impl Rule {
    /// Every rule, in report order.
    pub const ALL: [Rule; 9] = [
        Rule::Unfinished,
        Rule::Vanished,
        Rule::NumerusForms,
        Rule::Placeholder,
        Rule::Accelerator,
        Rule::Duplicate,
        Rule::Identical,
        Rule::Language,
        Rule::ParseError,
    ];

    pub fn severity(self) -> Severity {
        match self {
            Rule::Unfinished => UnfinishedIssue::severity(),
            Rule::Vanished => VanishedIssue::severity(),
            Rule::NumerusForms => NumerusFormsIssue::severity(),
            Rule::Placeholder => PlaceholderIssue::severity(),
            Rule::Accelerator => AcceleratorIssue::severity(),
            Rule::Duplicate => DuplicateIssue::severity(),
            Rule::Identical => IdenticalIssue::severity(),
            Rule::Language => LanguageMismatchIssue::severity(),
            Rule::ParseError => ParseErrorIssue::severity(),
        }
    }

    /// Look up a rule by its report name ("numerus-forms").
    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.to_string() == name)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::NumerusForms => write!(f, "numerus-forms"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Accelerator => write!(f, "accelerator"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Identical => write!(f, "identical"),
            Rule::Language => write!(f, "language"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Why a live message counts as untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfinishedReason {
    /// `type="unfinished"` on the translation.
    Marked,
    /// Finished, but no form carries text.
    Empty,
    /// Finished numerus translation with some forms left empty.
    EmptyForm,
}

impl std::fmt::Display for UnfinishedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnfinishedReason::Marked => write!(f, "marked unfinished"),
            UnfinishedReason::Empty => write!(f, "empty translation"),
            UnfinishedReason::EmptyForm => write!(f, "empty numerus form"),
        }
    }
}

/// Live message without a usable translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    pub reason: UnfinishedReason,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Vanished or obsolete entry still kept in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: MessageContext,
    pub kind: TranslationType,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Numerus form count does not match the catalog language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub context: MessageContext,
    /// Catalog language (e.g., "he").
    pub language: String,
    /// Forms required by the language, 0 for non-numerus messages.
    pub expected: usize,
    pub actual: usize,
    /// Whether the message is marked `numerus="yes"`.
    pub numerus: bool,
}

impl NumerusFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusForms
    }
}

/// Translation disagrees with its source on `%1..%N` / `%n` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub context: MessageContext,
    /// Placeholders used by the source but absent in the translation.
    pub missing: Vec<String>,
    /// Placeholders the translation uses that the source does not.
    pub unexpected: Vec<String>,
    /// Index of the numerus form (None for plain translations).
    pub form: Option<usize>,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

/// Keyboard accelerator present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorIssue {
    pub context: MessageContext,
    pub source_accelerator: Option<char>,
    pub translation_accelerator: Option<char>,
}

impl AcceleratorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Accelerator
    }
}

/// Same (context, source, comment) defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Translation identical to its source text (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub context: MessageContext,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

// ============================================================
// Issue Types - Whole Files
// ============================================================

/// File name locale suffix disagrees with `TS@language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMismatchIssue {
    pub file_path: String,
    /// Locale derived from the file name (e.g., "ar" for `katvan_ar.ts`).
    pub file_locale: String,
    /// Language declared in the catalog.
    pub declared: String,
}

impl LanguageMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Language
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during checking.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    NumerusForms(NumerusFormsIssue),
    Placeholder(PlaceholderIssue),
    Accelerator(AcceleratorIssue),
    Duplicate(DuplicateIssue),
    Identical(IdenticalIssue),
    Language(LanguageMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (language mismatch, parse errors).
    File { path: &'a str, line: usize },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.to_string())
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tsglot clean --apply` to remove stale entries")
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} (\"{}\")", self.kind, single_line(&self.context.value)))
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.numerus {
            Some(format!(
                "expected {} numerus form(s) for '{}', found {}",
                self.expected, self.language, self.actual
            ))
        } else {
            Some(format!(
                "message is not numerus but has {} numerus form(s)",
                self.actual
            ))
        }
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        let mut details = parts.join("; ");
        if let Some(form) = self.form {
            details.push_str(&format!(" in numerus form {}", form + 1));
        }
        Some(details)
    }
}

impl Report for AcceleratorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match (self.source_accelerator, self.translation_accelerator) {
            (Some(c), None) => Some(format!(
                "source has accelerator '&{}', translation (\"{}\") has none",
                c,
                single_line(&self.context.value)
            )),
            (None, Some(c)) => Some(format!(
                "translation (\"{}\") has accelerator '&{}', source has none",
                single_line(&self.context.value),
                c
            )),
            _ => None,
        }
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined at line {}", self.first_line))
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add the text to `ignoreTexts` if it is the same in every language")
    }

    fn details(&self) -> Option<String> {
        Some("translation is identical to the source text".to_string())
    }
}

impl Report for LanguageMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: 1,
        }
    }

    fn message(&self) -> String {
        format!(
            "file name suggests '{}' but catalog declares '{}'",
            self.file_locale, self.declared
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: 0,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { line, .. } => line,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
