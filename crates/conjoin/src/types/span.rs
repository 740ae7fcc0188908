use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled piece of formatted list output.
///
/// Serializes in the shape of `Intl.ListFormat` parts:
/// `{ "type": "element", "value": "A" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Span {
    /// Connective text contributed by the locale patterns.
    Literal(String),
    /// One of the original items, verbatim.
    Element(String),
}

impl Span {
    /// The text covered by this span.
    pub fn text(&self) -> &str {
        match self {
            Span::Literal(text) | Span::Element(text) => text,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Span::Element(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Span::Literal(_))
    }

    /// The part type name: `"literal"` or `"element"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Span::Literal(_) => "literal",
            Span::Element(_) => "element",
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
