//! The pattern algebra: variables, literals and string concatenation.
//!
//! A `Pattern<K, T>` describes a family of `T` values. `K` names variables;
//! `T` is the produced type. A `Concat` is only built through
//! [`Pattern::concat`], which exists for `T = String` and keeps the parts
//! normalized.
//!
//! # Operations
//!
//! - `evaluate`: synthesize a value from bindings. Never mutates them.
//! - `matches`: find every environment extending the seed under which the
//!   pattern evaluates to a given value. "No match" is an empty vector.
//! - `substitute`: replace a variable by another pattern, checking that the
//!   replacement produces the kind the variable stood for.
//! - `domain`: the variables referenced and their kinds.

mod concat;
mod display;

use motif_bindings::{Bindings, Key, Value, ValueKind, ValueType};
use motif_stack::ensure_sufficient_stack;

use crate::budget::MatchBudget;
use crate::domain::Domain;
use crate::errors::{type_mismatch, unresolved, PatternResult};

pub use concat::Concat;

/// A pattern over values of type `T` with variables named by `K`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern<K, T> {
    /// Matches or produces whatever is bound to the identifier.
    Variable(K),
    /// Matches or produces exactly this value.
    Literal(T),
    /// Concatenation of string-producing parts.
    ///
    /// Produces text. Under a `T` with no text form it never matches, and
    /// evaluation fails with `TypeMismatch`.
    Concat(Concat<K>),
}

impl<K: Key, T: ValueType> Pattern<K, T> {
    /// A variable pattern.
    pub fn variable(id: K) -> Self {
        Pattern::Variable(id)
    }

    /// A literal pattern.
    pub fn literal(value: T) -> Self {
        Pattern::Literal(value)
    }

    /// Kind of value this pattern produces.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Pattern::Literal(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&K> {
        match self {
            Pattern::Variable(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_concat(&self) -> Option<&Concat<K>> {
        match self {
            Pattern::Concat(concat) => Some(concat),
            _ => None,
        }
    }

    /// Produce the value this pattern denotes under `env`.
    ///
    /// Fails with `Unresolved` when a variable is unbound and with
    /// `TypeMismatch` when a binding has the wrong kind.
    pub fn evaluate<B>(&self, env: &B) -> PatternResult<T>
    where
        B: Bindings<Key = K>,
    {
        match self {
            Pattern::Variable(id) => read_variable(env, id),
            Pattern::Literal(value) => Ok(value.clone()),
            Pattern::Concat(concat) => {
                let text = concat.evaluate(env)?;
                T::from_text(text).ok_or_else(|| type_mismatch(T::KIND, ValueKind::Str))
            }
        }
    }

    /// Every environment extending `env` under which this pattern equals
    /// `value`, in search order.
    ///
    /// Runs without a branch limit. See [`Pattern::matches_within`] for the
    /// bounded form.
    pub fn matches<B>(&self, env: B, value: &T) -> Vec<B>
    where
        B: Bindings<Key = K>,
    {
        // An unlimited budget never reports exhaustion.
        self.matches_within(env, value, &mut MatchBudget::unlimited())
            .unwrap_or_default()
    }

    /// Like [`Pattern::matches`], charging every explored branch to `budget`.
    ///
    /// Returns `BudgetExceeded` if the budget runs out before the search
    /// finishes; partial results are discarded.
    #[tracing::instrument(level = "debug", skip_all, fields(limit = ?budget.limit()))]
    pub fn matches_within<B>(
        &self,
        env: B,
        value: &T,
        budget: &mut MatchBudget,
    ) -> PatternResult<Vec<B>>
    where
        B: Bindings<Key = K>,
    {
        let found = self.match_value(env, value, budget)?;
        tracing::debug!(
            results = found.len(),
            branches = budget.spent(),
            "match finished"
        );
        Ok(found)
    }

    fn match_value<B>(&self, env: B, value: &T, budget: &mut MatchBudget) -> PatternResult<Vec<B>>
    where
        B: Bindings<Key = K>,
    {
        budget.charge()?;
        match self {
            Pattern::Variable(id) => Ok(bind_or_check(
                env,
                id,
                |bound| value.matches_value(bound),
                || value.clone().into_value(),
            )),
            Pattern::Literal(literal) => Ok(if literal == value {
                vec![env]
            } else {
                Vec::new()
            }),
            Pattern::Concat(concat) => match value.as_text() {
                Some(text) => concat.match_text(env, text, budget),
                None => Ok(Vec::new()),
            },
        }
    }

    /// Replace every occurrence of variable `target` with `replacement`.
    ///
    /// The replacement must produce the kind expected where the variable
    /// occurs; otherwise this fails with `TypeMismatch` and `self` is left as
    /// it was. Concatenations are rebuilt, so literals that become adjacent are
    /// merged.
    pub fn substitute<U: ValueType>(
        &self,
        target: &K,
        replacement: &Pattern<K, U>,
    ) -> PatternResult<Pattern<K, T>> {
        match self {
            Pattern::Variable(id) if id == target => replacement
                .clone()
                .retype::<T>()
                .ok_or_else(|| type_mismatch(T::KIND, U::KIND)),
            Pattern::Variable(_) | Pattern::Literal(_) => Ok(self.clone()),
            Pattern::Concat(concat) => concat
                .substitute(target, replacement)?
                .retype::<T>()
                .ok_or_else(|| type_mismatch(T::KIND, ValueKind::Str)),
        }
    }

    /// The variables this pattern references, with their kinds.
    pub fn domain(&self) -> Domain<K> {
        let mut domain = Domain::new();
        self.write_domain(&mut domain);
        domain
    }

    /// Add this pattern's variables to `domain`.
    pub fn write_domain(&self, domain: &mut Domain<K>) {
        match self {
            Pattern::Variable(id) => domain.insert(id.clone(), T::KIND),
            Pattern::Literal(_) => {}
            Pattern::Concat(concat) => concat.write_domain(domain),
        }
    }

    /// Reinterpret this pattern as producing `U`.
    ///
    /// `None` when `U` is a different kind from `T`.
    fn retype<U: ValueType>(self) -> Option<Pattern<K, U>> {
        if T::KIND != U::KIND {
            return None;
        }
        match self {
            Pattern::Variable(id) => Some(Pattern::Variable(id)),
            Pattern::Literal(value) => U::from_value(&value.into_value()).map(Pattern::Literal),
            Pattern::Concat(concat) => Some(Pattern::Concat(concat)),
        }
    }
}

impl<K: Key> Pattern<K, String> {
    /// A string literal.
    pub fn text(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Concatenate string patterns.
    ///
    /// Adjacent literals are merged and empty literals dropped. An
    /// all-literal input collapses to one literal, and a single remaining
    /// part is returned as is.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Pattern<K, String>>,
    {
        Concat::build(parts)
    }

    /// Match against borrowed text.
    ///
    /// Concatenation parts are matched against slices of the input through
    /// this entry point, so no substring is copied unless it gets bound.
    pub(crate) fn match_text<B>(
        &self,
        env: B,
        text: &str,
        budget: &mut MatchBudget,
    ) -> PatternResult<Vec<B>>
    where
        B: Bindings<Key = K>,
    {
        budget.charge()?;
        match self {
            Pattern::Variable(id) => Ok(bind_or_check(
                env,
                id,
                |bound| bound.as_str() == Some(text),
                || Value::string(text),
            )),
            Pattern::Literal(literal) => Ok(if literal == text {
                vec![env]
            } else {
                Vec::new()
            }),
            Pattern::Concat(concat) => {
                ensure_sufficient_stack(|| concat.match_text(env, text, budget))
            }
        }
    }
}

/// Read `id` from `env` as a `T`.
fn read_variable<K, T, B>(env: &B, id: &K) -> PatternResult<T>
where
    K: Key,
    T: ValueType,
    B: Bindings<Key = K>,
{
    let bound = env.get(id).ok_or_else(|| unresolved(id))?;
    T::from_value(bound).ok_or_else(|| type_mismatch(T::KIND, bound.kind()))
}

/// Match a variable: bind it if free, otherwise compare with its binding.
///
/// The binding branch extends `env` in place; it is already this branch's own
/// copy. The comparison branch returns `env` untouched.
fn bind_or_check<B: Bindings>(
    mut env: B,
    id: &B::Key,
    equals: impl FnOnce(&Value) -> bool,
    make: impl FnOnce() -> Value,
) -> Vec<B> {
    match env.get(id).map(equals) {
        None => {
            env.set(id.clone(), make());
            vec![env]
        }
        Some(true) => vec![env],
        Some(false) => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
