//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures and detected contract violations
//! only. Running out of states, depth, or budget is not an error: those
//! outcomes are expressed via [`crate::outcome::TerminationReason`] with no
//! solution attached.

/// Typed failure of a search invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy failed pre-flight validation. No state was explored.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The problem produced a negative edge cost, which voids the
    /// optimality guarantee of uniform cost search.
    #[error("negative edge cost {cost} on action {action} from state {state}")]
    NegativeEdgeCost {
        state: String,
        action: String,
        cost: i64,
    },

    /// A finalized end state could not be walked back to the start state.
    #[error("backpointer chain broken at state {state}")]
    BrokenBackpointer { state: String },
}
