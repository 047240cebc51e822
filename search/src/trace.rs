//! Verbosity-gated diagnostics.
//!
//! Events go through the `tracing` facade. This crate never installs a
//! subscriber; callers decide where events land. A `Tracer` only filters by
//! the policy's [`Verbosity`], so the same search yields the same outcome at
//! every level.

use std::fmt::Debug;

use crate::contract::Cost;
use crate::outcome::SearchOutcome;
use crate::policy::Verbosity;

/// Emits search diagnostics at or below a configured verbosity.
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    algorithm: &'static str,
    verbosity: Verbosity,
}

impl Tracer {
    #[must_use]
    pub fn new(algorithm: &'static str, verbosity: Verbosity) -> Self {
        Self {
            algorithm,
            verbosity,
        }
    }

    #[must_use]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    /// Level 2: a state was popped or visited.
    pub fn exploring<S: Debug>(&self, state: &S, past_cost: Cost) {
        if self.enabled(Verbosity::States) {
            tracing::debug!(algorithm = self.algorithm, ?state, past_cost, "exploring");
        }
    }

    /// Level 3: an edge is being expanded.
    pub fn edge<S: Debug, A: Debug>(&self, action: &A, to: &S, past_cost: Cost, cost: Cost) {
        if self.enabled(Verbosity::Edges) {
            tracing::trace!(
                algorithm = self.algorithm,
                ?action,
                ?to,
                past_cost,
                cost,
                "expanding edge"
            );
        }
    }

    /// Level 3: a leaf decision point was reached.
    pub fn leaf<S: Debug>(&self, state: &S, depth: u32, past_cost: Cost, recorded: bool) {
        if self.enabled(Verbosity::Edges) {
            tracing::trace!(
                algorithm = self.algorithm,
                ?state,
                depth,
                past_cost,
                recorded,
                "leaf candidate"
            );
        }
    }

    /// Level 2: a deepening pass finished.
    pub fn pass_finished(&self, limit: u32, found_goal: bool, committed_depth: u32) {
        if self.enabled(Verbosity::States) {
            tracing::debug!(
                algorithm = self.algorithm,
                limit,
                found_goal,
                committed_depth,
                "deepening pass finished"
            );
        }
    }

    /// Level 1: summary of a finished search.
    pub fn summary<A: Debug>(&self, outcome: &SearchOutcome<A>) {
        if !self.enabled(Verbosity::Summary) {
            return;
        }
        match &outcome.solution {
            Some(solution) => tracing::info!(
                algorithm = self.algorithm,
                states_explored = outcome.states_explored,
                total_cost = solution.total_cost,
                actions = ?solution.actions,
                "search finished"
            ),
            None => tracing::info!(
                algorithm = self.algorithm,
                states_explored = outcome.states_explored,
                termination = ?outcome.termination,
                "no path found"
            ),
        }
    }
}
