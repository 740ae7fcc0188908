//! CLDR list patterns for English.

use crate::pattern::PatternTable;
use crate::types::PatternKey;

/// `(key, [two, start, middle, end])`
const ENGLISH: [(PatternKey, [&str; 4]); 5] = [
    (
        PatternKey::Standard,
        ["{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}"],
    ),
    (
        PatternKey::Or,
        ["{0} or {1}", "{0}, {1}", "{0}, {1}", "{0}, or {1}"],
    ),
    (
        PatternKey::Unit,
        ["{0}, {1}", "{0}, {1}", "{0}, {1}", "{0}, {1}"],
    ),
    (
        PatternKey::UnitShort,
        ["{0}, {1}", "{0}, {1}", "{0}, {1}", "{0}, {1}"],
    ),
    (
        PatternKey::UnitNarrow,
        ["{0} {1}", "{0} {1}", "{0} {1}", "{0} {1}"],
    ),
];

/// All English tables, keyed by pattern key.
pub(super) fn tables() -> impl Iterator<Item = (PatternKey, PatternTable)> {
    ENGLISH.into_iter().map(|(key, [two, start, middle, end])| {
        let table = PatternTable::new(two, start, middle, end)
            .expect("builtin English patterns should be well-formed");
        (key, table)
    })
}
