//! `LineWorld`: travel along blocks `1..=target` by walking or tram.
//!
//! From block `s`, `walk` moves to `s + 1` at cost 1 and `tram` moves to
//! `2 * s` at cost 2, as long as the destination does not pass `target`.
//! The end state is `target`.

use wayfinder_search::{Edge, SearchProblem};

use crate::contract::SearchWorld;

/// Cost of one walking step.
const WALK_COST: i64 = 1;

/// Cost of one tram ride.
const TRAM_COST: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAction {
    Walk,
    Tram,
}

/// Number-line transportation world.
#[derive(Debug, Clone, Copy)]
pub struct LineWorld {
    target: u64,
}

impl LineWorld {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }
}

impl SearchProblem for LineWorld {
    type State = u64;
    type Action = LineAction;

    fn start_state(&self) -> u64 {
        1
    }

    fn is_end(&self, state: &u64) -> bool {
        *state == self.target
    }

    fn succ_and_cost(&self, state: &u64) -> Vec<Edge<u64, LineAction>> {
        let mut edges = Vec::with_capacity(2);
        if *state < self.target {
            edges.push(Edge::new(LineAction::Walk, state + 1, WALK_COST));
        }
        if let Some(doubled) = state.checked_mul(2) {
            if doubled <= self.target {
                edges.push(Edge::new(LineAction::Tram, doubled, TRAM_COST));
            }
        }
        edges
    }
}

impl SearchWorld for LineWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "line_world"
    }

    fn action_label(&self, action: &LineAction) -> String {
        match action {
            LineAction::Walk => "walk".into(),
            LineAction::Tram => "tram".into(),
        }
    }
}
