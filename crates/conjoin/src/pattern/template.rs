//! Pattern string parser using winnow.
//!
//! Handles:
//! - Literal text
//! - Placeholders `{0}` and `{1}`
//! - Escape sequences: `{{` and `}}`

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{Segment, Slot, Template};
use super::error::TemplateError;

/// Parse a pattern string into a template.
///
/// Placeholder counts are not checked here; see [`Pattern::parse`](super::Pattern::parse).
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    let parsed = template(&mut remaining);
    let column = input[..input.len() - remaining.len()].chars().count() + 1;
    match parsed {
        Ok(t) if remaining.is_empty() => Ok(t),
        Ok(_) => Err(TemplateError::Syntax {
            column,
            message: unexpected(remaining),
        }),
        Err(e) => Err(TemplateError::Syntax {
            column,
            message: format!("parse error: {e}"),
        }),
    }
}

/// Describe the text the parser stopped at.
fn unexpected(remaining: &str) -> String {
    if remaining.starts_with('}') {
        return "unmatched '}' (use '}}' for a literal brace)".to_string();
    }
    let placeholder: String = remaining.chars().take_while(|&c| c != '}').collect();
    if remaining.len() > placeholder.len() {
        format!("unknown placeholder '{placeholder}}}', expected {{0}} or {{1}}")
    } else {
        "unclosed '{' (use '{{' for a literal brace)".to_string()
    }
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments, so escapes join their surrounding text.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_run)).parse_next(input)
}

/// `{{` -> `{`, `}}` -> `}`
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', alt(('0'.value(Slot::First), '1'.value(Slot::Second))), '}')
        .map(Segment::Placeholder)
        .parse_next(input)
}

fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}
