//! Error types for pattern evaluation, substitution and bounded matching.
//!
//! `PatternErrorKind` carries the structured category; `PatternError` pairs it
//! with the rendered message. Factory functions (`unresolved`,
//! `type_mismatch`, `budget_exceeded`) are the public way to build errors and
//! keep `message == kind.to_string()`.
//!
//! "No match" is not an error: matching reports it as an empty result.

use std::fmt;

use motif_bindings::ValueKind;

/// Result of a fallible pattern operation.
pub type PatternResult<T> = Result<T, PatternError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// A variable read during evaluation has no binding.
    Unresolved { name: String },

    /// A bound value, or a substitution's replacement, has the wrong kind.
    TypeMismatch { expected: ValueKind, got: ValueKind },

    /// A bounded match explored more branches than its budget allows.
    BudgetExceeded { limit: usize },
}

impl fmt::Display for PatternErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved { name } => write!(f, "unresolved variable: {name}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::BudgetExceeded { limit } => {
                write!(f, "match search exhausted its budget of {limit} branches")
            }
        }
    }
}

/// Pattern operation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PatternError {
    /// Structured error category.
    pub kind: PatternErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl PatternError {
    fn from_kind(kind: PatternErrorKind) -> Self {
        let message = kind.to_string();
        PatternError { kind, message }
    }

    /// Whether this error is a budget overrun rather than a typing failure.
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self.kind, PatternErrorKind::BudgetExceeded { .. })
    }
}

/// A variable has no binding.
#[cold]
pub fn unresolved(name: impl fmt::Display) -> PatternError {
    PatternError::from_kind(PatternErrorKind::Unresolved {
        name: name.to_string(),
    })
}

/// A value of kind `got` appeared where `expected` is required.
#[cold]
pub fn type_mismatch(expected: ValueKind, got: ValueKind) -> PatternError {
    PatternError::from_kind(PatternErrorKind::TypeMismatch { expected, got })
}

/// A bounded match spent its whole budget of `limit` branches.
#[cold]
pub fn budget_exceeded(limit: usize) -> PatternError {
    PatternError::from_kind(PatternErrorKind::BudgetExceeded { limit })
}
