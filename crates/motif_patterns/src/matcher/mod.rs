//! Concatenation matching.
//!
//! Reconciles the parts of a concatenation against one input string:
//!
//! 1. A leading literal must be a prefix of the input; the cursor moves past
//!    it.
//! 2. A trailing literal must be a suffix; the effective end shrinks by its
//!    length.
//! 3. The remaining parts are consumed left to right against a frontier of
//!    candidates, each an environment plus a cursor. One part is always
//!    *pending*: it has not been matched yet because its extent depends on
//!    what follows it.
//!    - If the next part is a literal, every occurrence of it after a
//!      candidate's cursor fixes the pending part's extent.
//!    - Otherwise the pending part is tried at every length, shortest first.
//! 4. The last pending part takes whatever remains up to the effective end.
//!
//! Every sub-match gets its own snapshot of the candidate's environment, so
//! branches never observe each other's bindings. Results come out in
//! frontier order: occurrences left to right, splits shortest first. Nothing
//! is deduplicated.

mod scan;

use motif_bindings::{Bindings, Key};

use crate::budget::MatchBudget;
use crate::errors::PatternResult;
use crate::Pattern;

/// A partial match: bindings so far and the input offset reached.
struct Candidate<B> {
    env: B,
    cursor: usize,
}

/// Match normalized concatenation `parts` against `text`.
pub(crate) fn match_concat<K, B>(
    parts: &[Pattern<K, String>],
    env: B,
    text: &str,
    budget: &mut MatchBudget,
) -> PatternResult<Vec<B>>
where
    K: Key,
    B: Bindings<Key = K>,
{
    let mut parts = parts;
    let mut cursor = 0;
    let mut end = text.len();

    if let Some((Pattern::Literal(prefix), rest)) = parts.split_first() {
        if !scan::has_prefix(text, prefix) {
            return Ok(Vec::new());
        }
        cursor = prefix.len();
        parts = rest;
    }
    if let Some((Pattern::Literal(suffix), rest)) = parts.split_last() {
        if !scan::has_suffix(text, suffix) {
            return Ok(Vec::new());
        }
        end -= suffix.len();
        parts = rest;
    }
    // Prefix and suffix overlap in the input.
    if cursor > end {
        return Ok(Vec::new());
    }

    let Some((first, middle)) = parts.split_first() else {
        // Only anchors: they must tile the input exactly.
        return Ok(if cursor == end { vec![env] } else { Vec::new() });
    };

    let mut frontier = vec![Candidate { env, cursor }];
    let mut pending = first;
    let mut rest = middle.iter();

    while let Some(next) = rest.next() {
        let mut advanced = Vec::new();
        match next {
            Pattern::Literal(anchor) => {
                for candidate in &frontier {
                    for start in scan::occurrences(text, anchor, candidate.cursor, end) {
                        let piece = &text[candidate.cursor..start];
                        let found = pending.match_text(candidate.env.snapshot(), piece, budget)?;
                        advanced.extend(found.into_iter().map(|env| Candidate {
                            env,
                            cursor: start + anchor.len(),
                        }));
                    }
                }
                match rest.next() {
                    Some(after) => pending = after,
                    // Only reachable with unnormalized parts ending in two
                    // literals: the first was an interior anchor, the second
                    // the suffix. The anchor must then reach the end.
                    None => {
                        return Ok(advanced
                            .into_iter()
                            .filter(|candidate| candidate.cursor == end)
                            .map(|candidate| candidate.env)
                            .collect());
                    }
                }
            }
            _ => {
                for candidate in &frontier {
                    for split in scan::split_points(text, candidate.cursor, end) {
                        let piece = &text[candidate.cursor..split];
                        let found = pending.match_text(candidate.env.snapshot(), piece, budget)?;
                        advanced.extend(
                            found
                                .into_iter()
                                .map(|env| Candidate { env, cursor: split }),
                        );
                    }
                }
                pending = next;
            }
        }

        tracing::trace!(
            candidates = advanced.len(),
            remaining = rest.len(),
            "concat frontier advanced"
        );
        frontier = advanced;
        if frontier.is_empty() {
            return Ok(Vec::new());
        }
    }

    let mut results = Vec::new();
    for candidate in frontier {
        let piece = &text[candidate.cursor..end];
        results.extend(pending.match_text(candidate.env, piece, budget)?);
    }
    Ok(results)
}
