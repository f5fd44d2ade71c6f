//! Favorite products persisted in local storage.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{KvBackend, ProductId, Store, StructuredLogger};

/// Ordered set of favorite product ids.
///
/// Stored as a JSON array of ids in insertion order. Never holds the same id
/// twice; a stored array with duplicates keeps only the first occurrence.
/// Entries that are neither numbers nor strings are skipped, the rest of the
/// array is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl<'de> Deserialize<'de> for Favorites {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from_ids(values.iter().filter_map(ProductId::from_json)))
    }
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ids, dropping repeats.
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Read the set persisted under `key`. Missing or corrupt data yields an
    /// empty set; unusable entries are dropped one by one.
    pub fn load<B: KvBackend>(store: &Store<B>, key: &str) -> Self {
        let values: Vec<serde_json::Value> = store.get_or_default(key);
        let mut ids = Vec::with_capacity(values.len());
        for value in &values {
            match ProductId::from_json(value) {
                Some(id) => ids.push(id),
                None => {
                    if let Some(logger) = store.logger() {
                        logger
                            .warn_builder("Dropping unusable favorite id")
                            .field("key", key)
                            .field("value", value.to_string())
                            .emit();
                    }
                }
            }
        }
        Self::from_ids(ids)
    }

    /// Whether `id` is a favorite.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Flip `id`: remove it if present, append it otherwise.
    ///
    /// Returns `true` if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.contains(id) {
            self.ids.retain(|existing| existing != id);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Toggle `id` against the persisted favorites and write the result back.
///
/// The persisted set is re-read on every call, so the last writer wins. A
/// failed write is logged; the returned set still reflects the toggle so the
/// indicator flips exactly once per activation.
pub fn toggle_favorite<B: KvBackend>(
    store: &Store<B>,
    key: &str,
    id: &ProductId,
    logger: &StructuredLogger,
) -> Favorites {
    let mut favorites = Favorites::load(store, key);
    let now_favorite = favorites.toggle(id);

    if let Err(e) = store.set(key, &favorites) {
        logger
            .error_builder("Failed to persist favorites")
            .field("product_id", id.to_string())
            .field("error", e.to_string())
            .emit();
    }

    logger
        .debug_builder("Favorite toggled")
        .field("product_id", id.to_string())
        .field_bool("favorite", now_favorite)
        .emit();

    favorites
}
