//! Joins list items with a pattern table, tracking where each item lands.

use tracing::trace;

use crate::pattern::{Pattern, PatternTable};
use crate::types::JoinResult;

/// Join `items` into a single string using `patterns`.
///
/// Lists of three or more items are folded left to right: `start` combines
/// the first two items, `middle` adds each inner item, and `end` adds the
/// last. Every fold shifts the offsets of the items already in the
/// accumulated text by the position where that text lands in the new string.
///
/// Offsets are byte offsets into the returned text.
pub fn join<S: AsRef<str>>(items: &[S], patterns: &PatternTable) -> JoinResult {
    match items {
        [] => JoinResult::default(),
        [only] => JoinResult::new(only.as_ref(), vec![0]),
        [first, second] => {
            let joined = patterns.two().apply(first.as_ref(), second.as_ref());
            JoinResult::new(joined.text, vec![joined.first, joined.second])
        }
        [first, second, middle @ .., last] => {
            let joined = patterns.start().apply(first.as_ref(), second.as_ref());
            let mut offsets = Vec::with_capacity(items.len());
            offsets.push(joined.first);
            offsets.push(joined.second);
            let mut acc = joined.text;
            for item in middle {
                acc = fold(acc, &mut offsets, patterns.middle(), item.as_ref());
            }
            let text = fold(acc, &mut offsets, patterns.end(), last.as_ref());
            JoinResult::new(text, offsets)
        }
    }
}

/// Apply `pattern` to the accumulated text and the next item.
fn fold(acc: String, offsets: &mut Vec<usize>, pattern: &Pattern, item: &str) -> String {
    let joined = pattern.apply(&acc, item);
    for offset in offsets.iter_mut() {
        *offset += joined.first;
    }
    offsets.push(joined.second);
    trace!(
        index = offsets.len() - 1,
        shift = joined.first,
        offset = joined.second,
        "folded list item"
    );
    joined.text
}
