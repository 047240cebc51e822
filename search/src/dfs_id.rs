//! Depth-first search with iterative deepening.
//!
//! Each pass is a plain recursive depth-first walk bounded by an absolute
//! depth limit. Recursion depth never exceeds `max_depth`, so the call stack
//! stays small regardless of graph size.
//!
//! # Pass loop
//!
//! ```text
//! limit = anchor.depth + min(bound, max_depth - anchor.depth)
//!   → recurse(anchor) → goal recorded?            → GoalReached
//!                     → budget hit?               → ExpansionBudgetExceeded
//!                     → no leaf at all?           → DeadEnd
//!                     → limit == max_depth?       → DepthCapReached
//!                     → Commit: anchor = best intermediate
//!   → bound += depth_step
//! ```

use std::ops::ControlFlow;

use crate::contract::{Cost, SearchAlgorithm, SearchProblem};
use crate::error::SearchError;
use crate::outcome::{SearchOutcome, TerminationReason};
use crate::policy::{DeepeningStrategy, SearchPolicy};
use crate::trace::Tracer;

/// A leaf decision point recorded during one pass.
///
/// `depth` is absolute (edges from the start state), including any
/// committed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafCandidate<S, A> {
    /// Actions from the start state to `state`.
    pub actions: Vec<A>,
    pub state: S,
    pub cost: Cost,
    pub depth: u32,
}

impl<S, A> LeafCandidate<S, A> {
    /// Intermediate preference: strictly deeper wins regardless of cost;
    /// at equal depth strictly cheaper wins. Ties keep the incumbent.
    #[must_use]
    pub fn displaces(&self, incumbent: &Self) -> bool {
        self.depth > incumbent.depth || (self.depth == incumbent.depth && self.cost < incumbent.cost)
    }

    /// Goal preference: strictly cheaper wins; at equal cost strictly
    /// shallower wins. Ties keep the incumbent.
    #[must_use]
    pub fn improves_goal(&self, incumbent: &Self) -> bool {
        self.cost < incumbent.cost || (self.cost == incumbent.cost && self.depth < incumbent.depth)
    }
}

/// Immutable snapshot handed down the recursion.
#[derive(Debug, Clone)]
struct Frame<S, A> {
    actions: Vec<A>,
    state: S,
    cost: Cost,
    depth: u32,
}

impl<S, A> From<LeafCandidate<S, A>> for Frame<S, A> {
    fn from(leaf: LeafCandidate<S, A>) -> Self {
        Self {
            actions: leaf.actions,
            state: leaf.state,
            cost: leaf.cost,
            depth: leaf.depth,
        }
    }
}

type Leaf<P> = LeafCandidate<<P as SearchProblem>::State, <P as SearchProblem>::Action>;

/// Accumulator for a single depth-bounded pass.
struct Pass<'p, P: SearchProblem> {
    problem: &'p P,
    tracer: Tracer,
    policy: &'p SearchPolicy,
    limit: u32,
    explored: u64,
    best_goal: Option<Leaf<P>>,
    best_intermediate: Option<Leaf<P>>,
}

impl<'p, P: SearchProblem> Pass<'p, P> {
    fn new(
        problem: &'p P,
        tracer: Tracer,
        policy: &'p SearchPolicy,
        limit: u32,
        explored: u64,
    ) -> Self {
        Self {
            problem,
            tracer,
            policy,
            limit,
            explored,
            best_goal: None,
            best_intermediate: None,
        }
    }

    /// Visit `frame`. Breaks only when the expansion budget runs out.
    fn recurse(&mut self, frame: Frame<P::State, P::Action>) -> ControlFlow<()> {
        if self.policy.budget_exhausted(self.explored) {
            return ControlFlow::Break(());
        }
        self.explored += 1;
        self.tracer.exploring(&frame.state, frame.cost);

        let is_end = self.problem.is_end(&frame.state);
        if is_end || frame.depth >= self.limit {
            self.record_leaf(frame, is_end);
            return ControlFlow::Continue(());
        }

        for edge in self.problem.succ_and_cost(&frame.state) {
            self.tracer
                .edge(&edge.action, &edge.state, frame.cost, edge.cost);
            let mut actions = frame.actions.clone();
            actions.push(edge.action);
            self.recurse(Frame {
                actions,
                state: edge.state,
                cost: frame.cost.saturating_add(edge.cost),
                depth: frame.depth + 1,
            })?;
        }
        ControlFlow::Continue(())
    }

    fn record_leaf(&mut self, frame: Frame<P::State, P::Action>, is_end: bool) {
        let candidate = LeafCandidate {
            actions: frame.actions,
            state: frame.state,
            cost: frame.cost,
            depth: frame.depth,
        };
        let (slot, wins): (&mut Option<Leaf<P>>, fn(&Leaf<P>, &Leaf<P>) -> bool) = if is_end {
            (&mut self.best_goal, LeafCandidate::improves_goal)
        } else {
            (&mut self.best_intermediate, LeafCandidate::displaces)
        };
        let recorded = match slot.as_ref() {
            Some(incumbent) => wins(&candidate, incumbent),
            None => true,
        };
        self.tracer
            .leaf(&candidate.state, candidate.depth, candidate.cost, recorded);
        if recorded {
            *slot = Some(candidate);
        }
    }
}

/// Iterative-deepening depth-first search with a hard depth ceiling.
///
/// `max_depth` bounds the total path length, committed prefix included: a
/// path longer than `max_depth` is never found even if it exists.
///
/// Leaves are ranked in two separate slots. Non-goal leaves prefer depth
/// first, then lower cost. Goal leaves prefer lower cost first, then
/// shallower depth, so with `initial_depth` or `depth_step` above 1 a
/// cheaper deep goal beats a pricier shallow one found in the same pass.
/// In both slots the first leaf found keeps a full tie.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstIterativeDeepening {
    policy: SearchPolicy,
}

impl DepthFirstIterativeDeepening {
    #[must_use]
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }
}

impl<P: SearchProblem> SearchAlgorithm<P> for DepthFirstIterativeDeepening {
    fn name(&self) -> &'static str {
        "dfs_iterative_deepening"
    }

    fn solve(&self, problem: &P) -> Result<SearchOutcome<P::Action>, SearchError> {
        self.policy.validate_deepening()?;
        let policy = &self.policy;
        let tracer = Tracer::new(<Self as SearchAlgorithm<P>>::name(self), policy.verbosity);

        let mut anchor: Frame<P::State, P::Action> = Frame {
            actions: Vec::new(),
            state: problem.start_state(),
            cost: 0,
            depth: 0,
        };
        let mut bound = policy.initial_depth.min(policy.max_depth);
        let mut explored: u64 = 0;

        let outcome = loop {
            let remaining = policy.max_depth - anchor.depth;
            let limit = anchor.depth + bound.min(remaining);

            let mut pass = Pass::new(problem, tracer, policy, limit, explored);
            let flow = pass.recurse(anchor.clone());
            explored = pass.explored;
            tracer.pass_finished(limit, pass.best_goal.is_some(), anchor.depth);

            if let Some(goal) = pass.best_goal {
                break SearchOutcome::solved(goal.actions, goal.cost, explored);
            }
            if flow.is_break() {
                break SearchOutcome::no_path(
                    TerminationReason::ExpansionBudgetExceeded {
                        max_expansions: explored,
                    },
                    explored,
                );
            }
            let Some(intermediate) = pass.best_intermediate else {
                break SearchOutcome::no_path(TerminationReason::DeadEnd, explored);
            };
            if limit >= policy.max_depth {
                break SearchOutcome::no_path(
                    TerminationReason::DepthCapReached {
                        max_depth: policy.max_depth,
                    },
                    explored,
                );
            }

            if policy.deepening == DeepeningStrategy::Commit {
                anchor = intermediate.into();
            }
            bound = bound.saturating_add(policy.depth_step);
        };

        tracer.summary(&outcome);
        Ok(outcome)
    }
}
