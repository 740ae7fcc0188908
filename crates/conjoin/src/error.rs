//! Error types for list formatting.

use thiserror::Error;

use crate::types::PatternKey;

/// An error raised while configuring a formatter or processing its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Unsupported list type, style, or pattern key.
    #[error("invalid {option} '{value}'{}", format_suggestions(.suggestions))]
    InvalidConfiguration {
        option: &'static str,
        value: String,
        suggestions: Vec<String>,
    },

    /// A template is missing a placeholder, repeats one, or is unparsable.
    #[error("malformed '{field}' pattern at column {column}: {message}")]
    MalformedPatternTable {
        field: &'static str,
        column: usize,
        message: String,
    },

    /// Join offsets do not describe non-overlapping item spans in order.
    #[error("malformed join result: {message}")]
    MalformedJoinResult { message: String },

    /// Locale tag could not be parsed.
    #[error("invalid locale '{locale}': {message}")]
    InvalidLocale { locale: String, message: String },

    /// The pattern provider has no table for this locale and key.
    #[error("no '{key}' list patterns for locale '{locale}'")]
    MissingPatterns { locale: String, key: PatternKey },
}

impl FormatError {
    pub(crate) fn invalid_option(option: &'static str, value: &str, known: &[&str]) -> Self {
        FormatError::InvalidConfiguration {
            option,
            value: value.to_string(),
            suggestions: compute_suggestions(value, known),
        }
    }

    pub(crate) fn malformed_join(message: impl Into<String>) -> Self {
        FormatError::MalformedJoinResult {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Returns up to three candidates close to `target`, nearest first.
///
/// A candidate is close when its edit distance is at most one (for targets of
/// three characters or fewer) or two (for longer targets), or when `target` is
/// a non-empty prefix of it.
pub fn compute_suggestions(target: &str, candidates: &[&str]) -> Vec<String> {
    let lowered = target.to_ascii_lowercase();
    let max_distance = if lowered.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(&lowered, candidate);
            let prefix = !lowered.is_empty() && candidate.starts_with(&lowered);
            (dist <= max_distance || prefix).then(|| (dist, (*candidate).to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
