//! Motif Patterns - a small pattern algebra over strings and typed values.
//!
//! This crate provides:
//! - `Pattern<K, T>`: variables, literals and string concatenation
//! - Evaluation: produce a value from a binding environment
//! - Matching: enumerate every environment under which a pattern produces a
//!   given value
//! - Substitution with kind checking, and domain inspection
//! - `MatchBudget` to bound the search, and `PatternError` for failures
//!
//! # Example
//!
//! ```
//! use motif_bindings::{Bindings, MapBindings, Value};
//! use motif_patterns::Pattern;
//!
//! let pattern = Pattern::concat([
//!     Pattern::text("root/"),
//!     Pattern::variable("a"),
//!     Pattern::text(".mp3"),
//! ]);
//! let found = pattern.matches(MapBindings::new(), &"root/song.mp3".to_string());
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].get(&"a"), Some(&Value::string("song")));
//! assert_eq!(pattern.evaluate(&found[0]).ok(), Some("root/song.mp3".to_string()));
//! ```
//!
//! # Matching Order
//!
//! Results are returned in a fixed order: literal anchors are located left to
//! right, and adjacent free variables are split shortest first. Ambiguous
//! inputs yield one environment per decomposition; none are dropped or
//! merged.

mod budget;
mod domain;
mod errors;
mod matcher;
mod pattern;

pub use budget::MatchBudget;
pub use domain::Domain;
pub use errors::{
    budget_exceeded, type_mismatch, unresolved, PatternError, PatternErrorKind, PatternResult,
};
pub use pattern::{Concat, Pattern};
