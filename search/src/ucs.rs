//! Uniform cost search (Dijkstra's algorithm) over an implicit graph.

use std::collections::HashMap;

use crate::contract::{Cost, SearchAlgorithm, SearchProblem};
use crate::error::SearchError;
use crate::frontier::PriorityQueue;
use crate::outcome::{SearchOutcome, TerminationReason};
use crate::policy::SearchPolicy;
use crate::trace::Tracer;

/// Cost-optimal search for problems with non-negative edge costs.
///
/// The first end state extracted from the frontier carries the minimal
/// path cost from the start state. Termination on infinite spaces is the
/// caller's concern (or `max_expansions`).
#[derive(Debug, Clone, Default)]
pub struct UniformCostSearch {
    policy: SearchPolicy,
}

impl UniformCostSearch {
    #[must_use]
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }
}

impl<P: SearchProblem> SearchAlgorithm<P> for UniformCostSearch {
    fn name(&self) -> &'static str {
        "uniform_cost"
    }

    fn solve(&self, problem: &P) -> Result<SearchOutcome<P::Action>, SearchError> {
        let tracer = Tracer::new(<Self as SearchAlgorithm<P>>::name(self), self.policy.verbosity);

        let mut frontier = PriorityQueue::new();
        let mut backpointers: HashMap<P::State, (P::Action, P::State)> = HashMap::new();
        let mut states_explored: u64 = 0;

        let start = problem.start_state();
        frontier.update(start.clone(), 0);

        let outcome = loop {
            let Some((state, past_cost)) = frontier.remove_min() else {
                break SearchOutcome::no_path(TerminationReason::FrontierExhausted, states_explored);
            };

            if self.policy.budget_exhausted(states_explored) {
                break SearchOutcome::no_path(
                    TerminationReason::ExpansionBudgetExceeded {
                        max_expansions: states_explored,
                    },
                    states_explored,
                );
            }
            states_explored += 1;
            tracer.exploring(&state, past_cost);

            if problem.is_end(&state) {
                let actions = reconstruct_path(&backpointers, &start, state)?;
                break SearchOutcome::solved(actions, past_cost, states_explored);
            }

            for edge in problem.succ_and_cost(&state) {
                tracer.edge(&edge.action, &edge.state, past_cost, edge.cost);
                if edge.cost < 0 && self.policy.reject_negative_costs {
                    return Err(SearchError::NegativeEdgeCost {
                        state: format!("{state:?}"),
                        action: format!("{:?}", edge.action),
                        cost: edge.cost,
                    });
                }
                let new_cost: Cost = past_cost.saturating_add(edge.cost);
                if frontier.update(edge.state.clone(), new_cost) {
                    // Better route to edge.state.
                    backpointers.insert(edge.state, (edge.action, state.clone()));
                }
            }
        };

        tracer.summary(&outcome);
        Ok(outcome)
    }
}

/// Walk backpointers from `end` to `start` and return the actions in
/// start → end order.
///
/// # Errors
///
/// Returns [`SearchError::BrokenBackpointer`] if some state on the way has
/// no recorded predecessor.
pub fn reconstruct_path<S, A>(
    backpointers: &HashMap<S, (A, S)>,
    start: &S,
    end: S,
) -> Result<Vec<A>, SearchError>
where
    S: Eq + std::hash::Hash + std::fmt::Debug,
    A: Clone,
{
    let mut actions = Vec::new();
    let mut cursor = &end;
    while cursor != start {
        let Some((action, prev)) = backpointers.get(cursor) else {
            return Err(SearchError::BrokenBackpointer {
                state: format!("{cursor:?}"),
            });
        };
        actions.push(action.clone());
        cursor = prev;
        if actions.len() > backpointers.len() {
            // A chain longer than the map must loop.
            return Err(SearchError::BrokenBackpointer {
                state: format!("{cursor:?}"),
            });
        }
    }
    actions.reverse();
    Ok(actions)
}
