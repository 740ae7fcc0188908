//! Miette diagnostic wrapper for malformed list patterns.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::commands::Problem;

/// A miette-compatible diagnostic pointing into one pattern string.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(conjoin::pattern))]
pub struct PatternDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PatternDiagnostic {
    /// Create a diagnostic for a problem found in `file`.
    pub fn from_problem(file: &str, problem: &Problem) -> Self {
        let name = match problem.field {
            Some(field) => format!("{file}: {}/{}.{field}", problem.locale, problem.key),
            None => format!("{file}: {}", problem.locale),
        };
        let help = problem
            .field
            .map(|_| "patterns need exactly one {0} and one {1}".to_string());
        PatternDiagnostic {
            src: NamedSource::new(name, problem.source.clone()),
            span: byte_span(&problem.source, problem.column),
            message: problem.message.clone(),
            help,
        }
    }
}

/// Convert a 1-based character column into a one-character byte span,
/// clamped to the source.
fn byte_span(source: &str, column: usize) -> SourceSpan {
    let index = column.saturating_sub(1);
    let (offset, len) = source
        .char_indices()
        .nth(index)
        .map_or((source.len(), 0), |(offset, c)| (offset, c.len_utf8()));
    (offset, len).into()
}
