//! Search problem and search algorithm contract traits.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SearchError;
use crate::outcome::SearchOutcome;

/// Path cost. Integer costs give a total order and bit-reproducible sums.
pub type Cost = i64;

/// An outgoing edge produced by [`SearchProblem::succ_and_cost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<S, A> {
    /// Label carried only for path reconstruction.
    pub action: A,
    /// Destination state.
    pub state: S,
    /// Edge cost. Must be non-negative for uniform cost search.
    pub cost: Cost,
}

impl<S, A> Edge<S, A> {
    #[must_use]
    pub fn new(action: A, state: S, cost: Cost) -> Self {
        Self {
            action,
            state,
            cost,
        }
    }
}

/// A lazily generated search space.
///
/// # Contract
///
/// - `is_end` must be a pure function of the state.
/// - `succ_and_cost` must be deterministic: same state → same edges in the
///   same order. An empty vector marks a dead end.
/// - Edge costs must be non-negative for [`crate::ucs::UniformCostSearch`]
///   to return an optimal path. Violations are caller responsibility unless
///   [`crate::policy::SearchPolicy::reject_negative_costs`] is set.
pub trait SearchProblem {
    /// Opaque position in the search space.
    type State: Clone + Eq + Hash + Debug;
    /// Opaque edge label.
    type Action: Clone + Debug;

    /// The unique initial state.
    fn start_state(&self) -> Self::State;

    /// Whether `state` is an end state.
    fn is_end(&self, state: &Self::State) -> bool;

    /// Outgoing edges of `state`.
    fn succ_and_cost(&self, state: &Self::State) -> Vec<Edge<Self::State, Self::Action>>;
}

/// A search algorithm that solves any [`SearchProblem`].
pub trait SearchAlgorithm<P: SearchProblem> {
    /// Stable algorithm identifier recorded in run reports.
    fn name(&self) -> &'static str;

    /// Search `problem` from its start state.
    ///
    /// Absence of a path is a normal outcome (`solution == None`), not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] for pre-flight policy failures and for
    /// detected problem contract violations.
    fn solve(&self, problem: &P) -> Result<SearchOutcome<P::Action>, SearchError>;
}
