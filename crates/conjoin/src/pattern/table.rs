//! Validated list patterns and the four-pattern table used to join a list.

use serde::{Deserialize, Serialize};

use super::ast::{Segment, Slot, Template};
use super::error::TemplateError;
use super::template::parse_template;
use crate::error::FormatError;

/// A validated list pattern: exactly one `{0}` and one `{1}`, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    template: Template,
}

/// The result of substituting both placeholders of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Byte offset where the `{0}` value begins in `text`.
    pub first: usize,
    /// Byte offset where the `{1}` value begins in `text`.
    pub second: usize,
}

impl Pattern {
    /// Parse and validate a pattern string.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let template = parse_template(source)?;
        for (slot, placeholder) in [(Slot::First, "{0}"), (Slot::Second, "{1}")] {
            let found = template.count(slot);
            if found != 1 {
                return Err(TemplateError::PlaceholderCount { placeholder, found });
            }
        }
        Ok(Self {
            source: source.to_string(),
            template,
        })
    }

    /// The pattern string this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Substitute `first` for `{0}` and `second` for `{1}`.
    ///
    /// Substitution is a single pass: placeholder-like text inside the values
    /// is copied through untouched.
    pub fn apply(&self, first: &str, second: &str) -> Substitution {
        let literal_len: usize = self
            .template
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::Placeholder(_) => 0,
            })
            .sum();
        let mut text = String::with_capacity(literal_len + first.len() + second.len());
        let mut first_at = 0;
        let mut second_at = 0;
        for segment in &self.template.segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Placeholder(Slot::First) => {
                    first_at = text.len();
                    text.push_str(first);
                }
                Segment::Placeholder(Slot::Second) => {
                    second_at = text.len();
                    text.push_str(second);
                }
            }
        }
        Substitution {
            text,
            first: first_at,
            second: second_at,
        }
    }
}

/// The four patterns a locale uses to join a list of one type and style.
///
/// - `two` joins a list of exactly two items.
/// - `start` joins the first two items of a longer list.
/// - `middle` adds each inner item to the accumulated text.
/// - `end` adds the final item.
///
/// Deserializes from (and serializes to) a [`RawPatternTable`], validating
/// every pattern on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPatternTable", into = "RawPatternTable")]
pub struct PatternTable {
    two: Pattern,
    start: Pattern,
    middle: Pattern,
    end: Pattern,
}

/// Unvalidated pattern strings, as stored in locale data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPatternTable {
    pub two: String,
    pub start: String,
    pub middle: String,
    pub end: String,
}

impl PatternTable {
    /// Parse and validate all four patterns.
    ///
    /// Fails with [`FormatError::MalformedPatternTable`] naming the first
    /// offending pattern.
    pub fn new(two: &str, start: &str, middle: &str, end: &str) -> Result<Self, FormatError> {
        Ok(Self {
            two: parse_field("two", two)?,
            start: parse_field("start", start)?,
            middle: parse_field("middle", middle)?,
            end: parse_field("end", end)?,
        })
    }

    /// A table that uses the same pattern for every position.
    pub fn uniform(pattern: &str) -> Result<Self, FormatError> {
        Self::new(pattern, pattern, pattern, pattern)
    }

    pub fn two(&self) -> &Pattern {
        &self.two
    }

    pub fn start(&self) -> &Pattern {
        &self.start
    }

    pub fn middle(&self) -> &Pattern {
        &self.middle
    }

    pub fn end(&self) -> &Pattern {
        &self.end
    }

    /// The pattern that performs the last combining step for a list of `len`
    /// items: `two` for two items, `end` for three or more, and none for
    /// shorter lists, which are never combined.
    pub fn pattern_for_len(&self, len: usize) -> Option<&Pattern> {
        match len {
            0 | 1 => None,
            2 => Some(&self.two),
            _ => Some(&self.end),
        }
    }
}

fn parse_field(field: &'static str, source: &str) -> Result<Pattern, FormatError> {
    Pattern::parse(source).map_err(|e| FormatError::MalformedPatternTable {
        field,
        column: e.column(),
        message: e.message(),
    })
}

impl TryFrom<RawPatternTable> for PatternTable {
    type Error = FormatError;

    fn try_from(raw: RawPatternTable) -> Result<Self, Self::Error> {
        PatternTable::new(&raw.two, &raw.start, &raw.middle, &raw.end)
    }
}

impl From<PatternTable> for RawPatternTable {
    fn from(table: PatternTable) -> Self {
        RawPatternTable {
            two: table.two.source,
            start: table.start.source,
            middle: table.middle.source,
            end: table.end.source,
        }
    }
}
