//! Search budget for matching.
//!
//! Concatenations of adjacent variables with no literal between them are
//! matched by trying every split length, which is exponential in the number
//! of such variables. A `MatchBudget` caps the number of explored branches;
//! once spent, the match aborts with `PatternErrorKind::BudgetExceeded`
//! instead of running on.

use crate::errors::{budget_exceeded, PatternResult};

/// Counter of explored match branches with an optional ceiling.
///
/// One unit is charged for every node-level match attempt: the root call
/// and every candidate substring handed to a sub-pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchBudget {
    limit: Option<usize>,
    spent: usize,
}

impl MatchBudget {
    /// A budget that never runs out.
    pub fn unlimited() -> Self {
        MatchBudget {
            limit: None,
            spent: 0,
        }
    }

    /// A budget allowing at most `limit` explored branches.
    pub fn with_limit(limit: usize) -> Self {
        MatchBudget {
            limit: Some(limit),
            spent: 0,
        }
    }

    /// The ceiling, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Branches explored so far.
    pub fn spent(&self) -> usize {
        self.spent
    }

    /// Branches left before the ceiling, if any.
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.spent))
    }

    /// Charge one branch, failing once the ceiling is passed.
    #[inline]
    pub(crate) fn charge(&mut self) -> PatternResult<()> {
        self.spent = self.spent.saturating_add(1);
        match self.limit {
            Some(limit) if self.spent > limit => {
                tracing::debug!(limit, "match budget exhausted");
                Err(budget_exceeded(limit))
            }
            _ => Ok(()),
        }
    }
}
