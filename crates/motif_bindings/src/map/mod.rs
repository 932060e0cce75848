//! Associative environment for open variable sets.

use rustc_hash::FxHashMap;

use crate::{Bindings, Key, Value};

/// Environment keyed by arbitrary identifiers.
///
/// Only live bindings are stored, so a snapshot costs proportional to the
/// number of bound variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapBindings<K: Key> {
    entries: FxHashMap<K, Value>,
}

impl<K: Key> MapBindings<K> {
    /// Create an empty environment.
    pub fn new() -> Self {
        MapBindings {
            entries: FxHashMap::default(),
        }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound variables in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Value)> {
        self.entries.iter()
    }

    /// Bound variables ordered by key.
    pub fn sorted(&self) -> Vec<(&K, &Value)>
    where
        K: Ord,
    {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl<K: Key> Default for MapBindings<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> FromIterator<(K, Value)> for MapBindings<K> {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        MapBindings {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Key> Bindings for MapBindings<K> {
    type Key = K;

    #[inline]
    fn get(&self, key: &K) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: K, value: Value) {
        self.entries.insert(key, value);
    }
}
