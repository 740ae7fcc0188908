//! Parse error type for list patterns.

use thiserror::Error;

/// An error that occurred while parsing a single pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Unparsable text at a 1-based character column.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// A placeholder is absent or occurs more than once.
    #[error("expected exactly one {placeholder} placeholder, found {found}")]
    PlaceholderCount {
        placeholder: &'static str,
        found: usize,
    },
}

impl TemplateError {
    /// Column to point diagnostics at; placeholder count errors point at the
    /// start of the pattern.
    pub fn column(&self) -> usize {
        match self {
            TemplateError::Syntax { column, .. } => *column,
            TemplateError::PlaceholderCount { .. } => 1,
        }
    }

    /// The error text without location information.
    pub fn message(&self) -> String {
        match self {
            TemplateError::Syntax { message, .. } => message.clone(),
            TemplateError::PlaceholderCount { .. } => self.to_string(),
        }
    }
}
