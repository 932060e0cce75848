//! Variable domains: which identifiers a pattern references, and at what kind.

use rustc_hash::FxHashMap;

use motif_bindings::{Key, ValueKind};

/// Read-only map from variable identifier to the kind the pattern needs.
///
/// Computed by walking a pattern tree. Evaluation and matching never consult
/// it; it exists for callers that want to inspect a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<K: Key> {
    vars: FxHashMap<K, ValueKind>,
}

impl<K: Key> Domain<K> {
    pub fn new() -> Self {
        Domain {
            vars: FxHashMap::default(),
        }
    }

    /// Record `key` as required at `kind`.
    ///
    /// A later record for the same key replaces the earlier one.
    pub fn insert(&mut self, key: K, kind: ValueKind) {
        self.vars.insert(key, kind);
    }

    /// The kind required for `key`, if the pattern references it.
    pub fn get(&self, key: &K) -> Option<ValueKind> {
        self.vars.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Referenced variables in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, ValueKind)> {
        self.vars.iter().map(|(key, kind)| (key, *kind))
    }

    /// Referenced identifiers ordered by key.
    pub fn sorted_keys(&self) -> Vec<&K>
    where
        K: Ord,
    {
        let mut keys: Vec<_> = self.vars.keys().collect();
        keys.sort();
        keys
    }
}

impl<K: Key> Default for Domain<K> {
    fn default() -> Self {
        Self::new()
    }
}
