/// Position information in a catalog file.
///
/// Represents a specific location in a `.ts` file, used for error reporting
/// when there are issues with a message or its translation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./translations/katvan_he.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// Position with context information in catalog files.
///
/// Contains the context name, the source text and the translated value
/// of the message at this location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the `<context>` the message belongs to (e.g., "katvan::Editor").
    pub context: String,
    /// The base-language source text.
    pub source: String,
    /// The translated text (numerus forms joined with " | ").
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
