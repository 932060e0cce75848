//! Index-addressed environment for small, closed variable sets.

use crate::{Bindings, Value};

/// Environment keyed by `usize`, one slot per variable.
///
/// Created with a size covering the known variables. Setting a key past the
/// end grows the slot vector rather than failing, so a dense environment
/// never rejects a binding the associative one would accept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseBindings {
    slots: Vec<Option<Value>>,
}

impl DenseBindings {
    /// Create an environment with `size` unbound slots.
    pub fn new(size: usize) -> Self {
        DenseBindings {
            slots: vec![None; size],
        }
    }

    /// Wrap an existing slot vector.
    pub fn from_slots(slots: Vec<Option<Value>>) -> Self {
        DenseBindings { slots }
    }

    /// Number of slots, bound or not.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of bound slots.
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The bound slots, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(key, slot)| slot.as_ref().map(|value| (key, value)))
    }

    /// Consume the environment, returning its slots.
    pub fn into_slots(self) -> Vec<Option<Value>> {
        self.slots
    }
}

impl Bindings for DenseBindings {
    type Key = usize;

    #[inline]
    fn get(&self, key: &usize) -> Option<&Value> {
        self.slots.get(*key).and_then(Option::as_ref)
    }

    fn set(&mut self, key: usize, value: Value) {
        if key >= self.slots.len() {
            self.slots.resize(key.saturating_add(1), None);
        }
        if let Some(slot) = self.slots.get_mut(key) {
            *slot = Some(value);
        }
    }
}
