//! Splits joined output into literal and element spans.

use crate::error::FormatError;
use crate::types::{JoinResult, Span};

/// Partition the output of [`join`](crate::join) into spans.
///
/// Walks the items in order, emitting a [`Span::Literal`] for any text
/// between the previous item and the next one, then the item itself as a
/// [`Span::Element`]. Text after the last item becomes a trailing literal.
/// An empty list yields no spans.
///
/// Fails with [`FormatError::MalformedJoinResult`] when the offsets do not
/// match the items: wrong count, decreasing or overlapping spans, spans
/// outside the text, or text that differs from the item.
pub fn extract_spans<S: AsRef<str>>(
    result: &JoinResult,
    items: &[S],
) -> Result<Vec<Span>, FormatError> {
    let text = result.text();
    let offsets = result.offsets();
    if offsets.len() != items.len() {
        return Err(FormatError::malformed_join(format!(
            "{} offsets for {} items",
            offsets.len(),
            items.len()
        )));
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut spans = Vec::with_capacity(items.len() * 2 + 1);
    let mut cursor = 0;
    for (index, (item, &offset)) in items.iter().zip(offsets).enumerate() {
        let item = item.as_ref();
        if offset < cursor {
            return Err(FormatError::malformed_join(format!(
                "item {index} starts at byte {offset}, inside the previous span ending at {cursor}"
            )));
        }
        let end = offset
            .checked_add(item.len())
            .ok_or_else(|| FormatError::malformed_join(format!("item {index} offset overflows")))?;
        let Some(element) = text.get(offset..end) else {
            return Err(FormatError::malformed_join(format!(
                "item {index} span {offset}..{end} is not within the {} byte output",
                text.len()
            )));
        };
        if element != item {
            return Err(FormatError::malformed_join(format!(
                "item {index} does not match the output text at byte {offset}"
            )));
        }
        if cursor < offset {
            spans.push(Span::Literal(text[cursor..offset].to_string()));
        }
        spans.push(Span::Element(element.to_string()));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span::Literal(text[cursor..].to_string()));
    }
    Ok(spans)
}
