//! Motif Bindings - variable environments for the motif pattern algebra.
//!
//! This crate provides:
//! - Bound values (`Value`) and their kind tags (`ValueKind`)
//! - The `ValueType` bridge between Rust types and value kinds
//! - The `Bindings` trait consumed by pattern evaluation and matching
//! - Two interchangeable environments: `DenseBindings` and `MapBindings`
//!
//! # Choosing an Environment
//!
//! Both environments have identical semantics. Pick by the shape of the
//! variable domain:
//! - `DenseBindings`: small, closed set of `usize` identifiers. Slot access
//!   is an index, a snapshot copies every slot.
//! - `MapBindings<K>`: open set of arbitrary identifiers. A snapshot copies
//!   only live bindings.
//!
//! # Snapshots
//!
//! Environments are plain owned values. `snapshot()` returns an independent
//! copy, so a matcher that forks one environment into several branches can
//! extend each branch without the others observing it.

mod dense;
mod map;
mod value;

use std::fmt;
use std::hash::Hash;

pub use dense::DenseBindings;
pub use map::MapBindings;
pub use value::{Value, ValueKind, ValueType};

/// Requirements on a variable identifier.
///
/// `Display` is used to name variables in error messages and when rendering
/// patterns.
pub trait Key: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> Key for T {}

/// A mutable, copyable mapping from identifier to bound value.
///
/// Absence of a key means the variable is unbound.
pub trait Bindings: Clone {
    /// Identifier type for variables in this environment.
    type Key: Key;

    /// Look up the value bound to `key`.
    fn get(&self, key: &Self::Key) -> Option<&Value>;

    /// Bind `key` to `value`, replacing any previous binding.
    fn set(&mut self, key: Self::Key, value: Value);

    /// Independent copy of the current bindings.
    ///
    /// Mutating the copy never affects `self`, and vice versa.
    fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Whether `key` currently has a binding.
    fn is_bound(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
}
