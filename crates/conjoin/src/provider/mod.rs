//! Sources of locale list patterns.
//!
//! Formatting never reads locale data directly: it asks a [`PatternProvider`]
//! for the table stored under a locale and [`PatternKey`]. Providers decide
//! how tables are stored, cached, and which locale to fall back to.

mod english;
mod fallback;
mod store;

pub use fallback::Fallback;
pub use store::PatternStore;

use crate::pattern::PatternTable;
use crate::types::PatternKey;

/// Looks up the list patterns for a locale.
///
/// Lookups must be free of side effects; a provider may be queried
/// concurrently from several threads.
pub trait PatternProvider: Send + Sync {
    /// The patterns stored under `key` for `locale`, if any.
    fn patterns(&self, locale: &str, key: PatternKey) -> Option<PatternTable>;
}

impl<F> PatternProvider for F
where
    F: Fn(&str, PatternKey) -> Option<PatternTable> + Send + Sync,
{
    fn patterns(&self, locale: &str, key: PatternKey) -> Option<PatternTable> {
        self(locale, key)
    }
}
