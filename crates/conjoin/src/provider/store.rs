//! In-memory pattern provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PatternProvider, english};
use crate::pattern::PatternTable;
use crate::types::PatternKey;

/// Pattern tables held in memory, keyed by locale and pattern key.
///
/// Lookups are exact: the store never falls back to another locale. Wrap it
/// in a [`Fallback`](super::Fallback) for that.
///
/// Serializes as `{ "<locale>": { "<key>": { "two": .., "start": .., ... } } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternStore {
    tables: BTreeMap<String, BTreeMap<PatternKey, PatternTable>>,
}

impl PatternStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the English (`en`) patterns for every key.
    pub fn with_english() -> Self {
        let mut store = Self::new();
        for (key, table) in english::tables() {
            store.insert("en", key, table);
        }
        store
    }

    /// Add or replace the table for `locale` and `key`, returning the
    /// previous table.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: PatternKey,
        table: PatternTable,
    ) -> Option<PatternTable> {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key, table)
    }

    /// Copy every table from `other` into this store, replacing existing
    /// entries.
    pub fn extend(&mut self, other: PatternStore) {
        for (locale, tables) in other.tables {
            self.tables.entry(locale).or_default().extend(tables);
        }
    }

    pub fn get(&self, locale: &str, key: PatternKey) -> Option<&PatternTable> {
        self.tables.get(locale).and_then(|tables| tables.get(&key))
    }

    /// Locales with at least one table, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Keys stored for `locale`, in declaration order.
    pub fn keys(&self, locale: &str) -> Vec<PatternKey> {
        self.tables
            .get(locale)
            .map(|tables| tables.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PatternProvider for PatternStore {
    fn patterns(&self, locale: &str, key: PatternKey) -> Option<PatternTable> {
        self.get(locale, key).cloned()
    }
}
