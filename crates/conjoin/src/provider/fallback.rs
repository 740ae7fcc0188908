//! Locale fallback by truncating subtags.

use tracing::debug;

use super::PatternProvider;
use crate::pattern::PatternTable;
use crate::types::PatternKey;

/// Wraps a provider and retries lookups with less specific locales.
///
/// `sr-Latn-RS` is tried as `sr-Latn-RS`, then `sr-Latn`, then `sr`, and
/// finally as the configured root locale, if any.
#[derive(Debug, Clone)]
pub struct Fallback<P> {
    inner: P,
    root: Option<String>,
}

impl<P: PatternProvider> Fallback<P> {
    /// Fall back by truncation only.
    pub fn new(inner: P) -> Self {
        Self { inner, root: None }
    }

    /// Fall back by truncation, then to `root`.
    pub fn with_root(inner: P, root: impl Into<String>) -> Self {
        Self {
            inner,
            root: Some(root.into()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The locales tried for `locale`, most specific first.
    pub fn chain<'a>(&'a self, locale: &'a str) -> Vec<&'a str> {
        let mut chain = vec![locale];
        let mut current = locale;
        while let Some(pos) = current.rfind('-') {
            current = &current[..pos];
            chain.push(current);
        }
        if let Some(root) = self.root.as_deref()
            && !chain.contains(&root)
        {
            chain.push(root);
        }
        chain
    }
}

impl<P: PatternProvider> PatternProvider for Fallback<P> {
    fn patterns(&self, locale: &str, key: PatternKey) -> Option<PatternTable> {
        self.chain(locale).into_iter().find_map(|candidate| {
            let table = self.inner.patterns(candidate, key)?;
            if candidate != locale {
                debug!(requested = locale, resolved = candidate, %key, "list patterns fell back");
            }
            Some(table)
        })
    }
}
