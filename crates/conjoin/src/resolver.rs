//! Maps list type and style to the key of the patterns that implement them.

use crate::error::FormatError;
use crate::types::{ListType, PatternKey, Style};

/// Resolve the pattern key for a list type and style.
///
/// Conjunctions and disjunctions have a single set of patterns, so `style`
/// only matters for unit lists, where an unset style means [`Style::Long`].
pub fn resolve_pattern_key(
    list_type: ListType,
    style: Option<Style>,
) -> Result<PatternKey, FormatError> {
    let key = match (list_type, style) {
        (ListType::Conjunction, _) => PatternKey::Standard,
        (ListType::Disjunction, _) => PatternKey::Or,
        (ListType::Unit, Some(Style::Narrow)) => PatternKey::UnitNarrow,
        (ListType::Unit, Some(Style::Short)) => PatternKey::UnitShort,
        (ListType::Unit, Some(Style::Long) | None) => PatternKey::Unit,
    };
    Ok(key)
}

/// Resolve the pattern key from option names such as `"unit"` and `"narrow"`.
///
/// Unknown names fail with [`FormatError::InvalidConfiguration`], including
/// suggestions for near misses.
pub fn resolve_pattern_key_str(
    list_type: &str,
    style: Option<&str>,
) -> Result<PatternKey, FormatError> {
    let list_type = list_type.parse::<ListType>()?;
    let style = style.map(str::parse::<Style>).transpose()?;
    resolve_pattern_key(list_type, style)
}
