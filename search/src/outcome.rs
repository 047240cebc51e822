//! Search results.

use serde::Serialize;

use crate::contract::Cost;

/// Why a search invocation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminationReason {
    /// An end state was reached.
    GoalReached,
    /// The frontier emptied without reaching an end state.
    FrontierExhausted,
    /// Every branch dead-ended before the depth limit.
    DeadEnd,
    /// The hard depth ceiling was reached without an end state.
    DepthCapReached { max_depth: u32 },
    /// The configured expansion budget ran out.
    ExpansionBudgetExceeded { max_expansions: u64 },
}

/// A path from the start state to an end state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution<A> {
    /// Actions in start → end order.
    pub actions: Vec<A>,
    /// Sum of edge costs along `actions`.
    pub total_cost: Cost,
}

/// Result of a search invocation.
///
/// `solution == None` is the "no path" sentinel. The empty, zero-cost
/// solution is a real answer (the start state is an end state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<A> {
    pub solution: Option<Solution<A>>,
    /// Diagnostic count of explored states; not part of correctness.
    pub states_explored: u64,
    pub termination: TerminationReason,
}

impl<A> SearchOutcome<A> {
    #[must_use]
    pub fn solved(actions: Vec<A>, total_cost: Cost, states_explored: u64) -> Self {
        Self {
            solution: Some(Solution {
                actions,
                total_cost,
            }),
            states_explored,
            termination: TerminationReason::GoalReached,
        }
    }

    #[must_use]
    pub fn no_path(termination: TerminationReason, states_explored: u64) -> Self {
        Self {
            solution: None,
            states_explored,
            termination,
        }
    }

    /// Returns `true` if an end state was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The action sequence, or `None` if no path was found.
    #[must_use]
    pub fn actions(&self) -> Option<&[A]> {
        self.solution.as_ref().map(|s| s.actions.as_slice())
    }

    /// The total path cost, or `None` if no path was found.
    #[must_use]
    pub fn total_cost(&self) -> Option<Cost> {
        self.solution.as_ref().map(|s| s.total_cost)
    }
}
