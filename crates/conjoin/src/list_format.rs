//! A configured list formatter: locale, list type, style, and the patterns
//! they resolve to.

use bon::Builder;
use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;
use crate::joiner::join;
use crate::pattern::PatternTable;
use crate::provider::PatternProvider;
use crate::resolver::resolve_pattern_key;
use crate::spans::extract_spans;
use crate::types::{JoinResult, ListType, PatternKey, Span, Style};

/// Locale used when none is given, or when the locale is `und`.
pub const DEFAULT_LOCALE: &str = "en";

/// Options for constructing a [`ListFormat`].
///
/// # Example
///
/// ```
/// use conjoin::{ListFormatOptions, ListType, Style};
///
/// let options = ListFormatOptions::builder()
///     .locale("de")
///     .list_type(ListType::Unit)
///     .style(Style::Narrow)
///     .build();
///
/// assert_eq!(options.locale, "de");
/// assert_eq!(ListFormatOptions::default().list_type, ListType::Conjunction);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(default, rename_all = "camelCase")]
pub struct ListFormatOptions {
    /// BCP 47 language tag.
    #[builder(default = DEFAULT_LOCALE.to_string())]
    pub locale: String,

    #[builder(default)]
    #[serde(rename = "type")]
    pub list_type: ListType,

    /// Unset means [`Style::Long`].
    pub style: Option<Style>,
}

impl Default for ListFormatOptions {
    fn default() -> Self {
        ListFormatOptions::builder().build()
    }
}

/// The options a [`ListFormat`] actually uses, after locale
/// canonicalization and style defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub locale: String,
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub style: Style,
}

/// Formats lists for one locale, list type, and style.
///
/// Patterns are fetched once at construction; formatting afterwards is pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormat {
    locale: String,
    list_type: ListType,
    style: Style,
    key: PatternKey,
    patterns: PatternTable,
}

impl ListFormat {
    /// Resolve `options` and fetch the matching patterns from `provider`.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidLocale`] if the locale tag does not parse
    /// - [`FormatError::MissingPatterns`] if the provider has no table
    pub fn try_new<P>(options: ListFormatOptions, provider: &P) -> Result<Self, FormatError>
    where
        P: PatternProvider + ?Sized,
    {
        let locale = canonicalize_locale(&options.locale)?;
        let key = resolve_pattern_key(options.list_type, options.style)?;
        let patterns = provider
            .patterns(&locale, key)
            .ok_or_else(|| FormatError::MissingPatterns {
                locale: locale.clone(),
                key,
            })?;
        debug!(%locale, list_type = %options.list_type, %key, "resolved list patterns");
        Ok(Self::assemble(locale, options, key, patterns))
    }

    /// Use `patterns` directly instead of asking a provider.
    pub fn with_patterns(
        options: ListFormatOptions,
        patterns: PatternTable,
    ) -> Result<Self, FormatError> {
        let locale = canonicalize_locale(&options.locale)?;
        let key = resolve_pattern_key(options.list_type, options.style)?;
        Ok(Self::assemble(locale, options, key, patterns))
    }

    fn assemble(
        locale: String,
        options: ListFormatOptions,
        key: PatternKey,
        patterns: PatternTable,
    ) -> Self {
        Self {
            locale,
            list_type: options.list_type,
            style: options.style.unwrap_or_default(),
            key,
            patterns,
        }
    }

    /// Join `items` into a single string.
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        self.join(items).into_text()
    }

    /// Join `items`, keeping the byte offset of each item.
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> JoinResult {
        join(items, &self.patterns)
    }

    /// Join `items` and split the result into literal and element spans.
    pub fn format_to_parts<S: AsRef<str>>(&self, items: &[S]) -> Result<Vec<Span>, FormatError> {
        let joined = self.join(items);
        extract_spans(&joined, items)
    }

    pub fn resolved_options(&self) -> ResolvedOptions {
        ResolvedOptions {
            locale: self.locale.clone(),
            list_type: self.list_type,
            style: self.style,
        }
    }

    /// The key the patterns were looked up under.
    pub fn pattern_key(&self) -> PatternKey {
        self.key
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }
}

/// Canonicalize a BCP 47 tag for pattern lookup.
///
/// Unicode and other extensions are dropped (`en-US-u-ca-buddhist` becomes
/// `en-US`), and the undetermined locale `und` becomes [`DEFAULT_LOCALE`].
pub fn canonicalize_locale(tag: &str) -> Result<String, FormatError> {
    let locale = Locale::try_from_str(tag).map_err(|e| FormatError::InvalidLocale {
        locale: tag.to_string(),
        message: e.to_string(),
    })?;
    let stripped = locale.id.to_string();
    if stripped == "und" {
        Ok(DEFAULT_LOCALE.to_string())
    } else {
        Ok(stripped)
    }
}
