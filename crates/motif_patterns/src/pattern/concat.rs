//! Concatenation patterns and their normalizing builder.

use std::fmt;

use motif_bindings::{Bindings, Key, ValueType};
use motif_stack::ensure_sufficient_stack;

use super::Pattern;
use crate::budget::MatchBudget;
use crate::domain::Domain;
use crate::errors::PatternResult;
use crate::matcher;

/// An ordered sequence of string patterns, produced end to end.
///
/// Always holds at least two parts, at least one of them non-literal, and
/// never two adjacent literals. Only [`Pattern::concat`] constructs it.
///
/// Nesting depth is unbounded, so every walk over the parts (including
/// clone, comparison and drop) grows the stack as it descends.
pub struct Concat<K> {
    parts: Box<[Pattern<K, String>]>,
}

impl<K> Concat<K> {
    /// The normalized parts, in order.
    pub fn parts(&self) -> &[Pattern<K, String>] {
        &self.parts
    }
}

impl<K: fmt::Debug> fmt::Debug for Concat<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_struct("Concat").field("parts", &self.parts).finish())
    }
}

impl<K: Clone> Clone for Concat<K> {
    fn clone(&self) -> Self {
        Concat {
            parts: ensure_sufficient_stack(|| self.parts.clone()),
        }
    }
}

impl<K: PartialEq> PartialEq for Concat<K> {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.parts == other.parts)
    }
}

impl<K: Eq> Eq for Concat<K> {}

impl<K> Drop for Concat<K> {
    fn drop(&mut self) {
        let parts = std::mem::take(&mut self.parts);
        ensure_sufficient_stack(move || drop(parts));
    }
}

impl<K: Key> Concat<K> {
    /// Normalize `parts` into a pattern.
    pub(super) fn build<I>(parts: I) -> Pattern<K, String>
    where
        I: IntoIterator<Item = Pattern<K, String>>,
    {
        let mut merged = Vec::new();
        let mut text = String::new();
        for part in parts {
            match part {
                Pattern::Literal(literal) => text.push_str(&literal),
                other => {
                    if !text.is_empty() {
                        merged.push(Pattern::Literal(std::mem::take(&mut text)));
                    }
                    merged.push(other);
                }
            }
        }

        if merged.is_empty() {
            return Pattern::Literal(text);
        }
        if !text.is_empty() {
            merged.push(Pattern::Literal(text));
        } else if merged.len() == 1 {
            if let Some(only) = merged.pop() {
                return only;
            }
        }
        Pattern::Concat(Concat {
            parts: merged.into_boxed_slice(),
        })
    }

    pub(super) fn evaluate<B>(&self, env: &B) -> PatternResult<String>
    where
        B: Bindings<Key = K>,
    {
        let mut out = String::new();
        for part in self.parts.iter() {
            let piece = ensure_sufficient_stack(|| part.evaluate(env))?;
            out.push_str(&piece);
        }
        Ok(out)
    }

    pub(super) fn match_text<B>(
        &self,
        env: B,
        text: &str,
        budget: &mut MatchBudget,
    ) -> PatternResult<Vec<B>>
    where
        B: Bindings<Key = K>,
    {
        matcher::match_concat(&self.parts, env, text, budget)
    }

    pub(super) fn substitute<U: ValueType>(
        &self,
        target: &K,
        replacement: &Pattern<K, U>,
    ) -> PatternResult<Pattern<K, String>> {
        let parts = self
            .parts
            .iter()
            .map(|part| ensure_sufficient_stack(|| part.substitute(target, replacement)))
            .collect::<PatternResult<Vec<_>>>()?;
        Ok(Self::build(parts))
    }

    pub(super) fn write_domain(&self, domain: &mut Domain<K>) {
        for part in self.parts.iter() {
            ensure_sufficient_stack(|| part.write_domain(domain));
        }
    }
}
