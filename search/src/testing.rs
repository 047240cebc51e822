//! Unit-test fixtures: a small explicit graph problem.

use std::collections::{BTreeSet, HashMap};

use crate::contract::{Cost, Edge, SearchProblem};

/// Edge-list problem over `&'static str` states and actions.
#[derive(Debug, Clone, Default)]
pub(crate) struct MapProblem {
    start: &'static str,
    ends: BTreeSet<&'static str>,
    edges: HashMap<&'static str, Vec<Edge<&'static str, &'static str>>>,
}

impl MapProblem {
    pub(crate) fn new(start: &'static str, ends: &[&'static str]) -> Self {
        Self {
            start,
            ends: ends.iter().copied().collect(),
            edges: HashMap::new(),
        }
    }

    pub(crate) fn edge(
        mut self,
        from: &'static str,
        action: &'static str,
        to: &'static str,
        cost: Cost,
    ) -> Self {
        self.edges
            .entry(from)
            .or_default()
            .push(Edge::new(action, to, cost));
        self
    }
}

impl SearchProblem for MapProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_end(&self, state: &Self::State) -> bool {
        self.ends.contains(state)
    }

    fn succ_and_cost(&self, state: &Self::State) -> Vec<Edge<Self::State, Self::Action>> {
        self.edges.get(state).cloned().unwrap_or_default()
    }
}
