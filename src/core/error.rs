//! Error types for reading and writing translation catalogs.

use thiserror::Error;

/// Errors that can occur while loading a `.ts` catalog.
#[derive(Error, Debug)]
pub enum TsError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The XML itself is malformed (unbalanced tags, bad entities, ...).
    #[error("line {line}: malformed XML: {message}")]
    Xml { line: usize, message: String },

    /// The document has no `<TS>` root element.
    #[error("missing <TS> root element")]
    MissingRoot,

    /// A required attribute is absent.
    #[error("line {line}: <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        line: usize,
        element: String,
        attribute: String,
    },

    /// Well-formed XML that does not follow the TS document structure.
    #[error("line {line}: {message}")]
    Structure { line: usize, message: String },
}

impl TsError {
    /// Line the error was detected at, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            TsError::Xml { line, .. }
            | TsError::MissingAttribute { line, .. }
            | TsError::Structure { line, .. } => Some(*line),
            TsError::Io { .. } | TsError::MissingRoot => None,
        }
    }
}

/// Result type for catalog operations
pub type TsResult<T> = Result<T, TsError>;
