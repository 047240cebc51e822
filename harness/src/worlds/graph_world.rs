//! `GraphWorld`: an explicit edge-list world with string states and actions.
//!
//! Edges are enumerated in insertion order, so search results are
//! reproducible for a given construction sequence.

use std::collections::{BTreeMap, BTreeSet};

use wayfinder_search::{Cost, Edge, SearchProblem};

use crate::contract::SearchWorld;

/// Explicit directed graph built with a fluent API.
///
/// ```
/// use wayfinder_harness::worlds::graph_world::GraphWorld;
///
/// let world = GraphWorld::new("tiny", "S")
///     .edge("S", "go", "E", 2)
///     .end("E");
/// # let _ = world;
/// ```
#[derive(Debug, Clone)]
pub struct GraphWorld {
    id: String,
    start: String,
    ends: BTreeSet<String>,
    edges: BTreeMap<String, Vec<Edge<String, String>>>,
}

impl GraphWorld {
    #[must_use]
    pub fn new(id: &str, start: &str) -> Self {
        Self {
            id: id.to_string(),
            start: start.to_string(),
            ends: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Add a directed edge `from --action/cost--> to`.
    #[must_use]
    pub fn edge(mut self, from: &str, action: &str, to: &str, cost: Cost) -> Self {
        self.edges
            .entry(from.to_string())
            .or_default()
            .push(Edge::new(action.to_string(), to.to_string(), cost));
        self
    }

    /// Mark `state` as an end state.
    #[must_use]
    pub fn end(mut self, state: &str) -> Self {
        self.ends.insert(state.to_string());
        self
    }

    /// Number of edges across all states.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl SearchProblem for GraphWorld {
    type State = String;
    type Action = String;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_end(&self, state: &String) -> bool {
        self.ends.contains(state)
    }

    fn succ_and_cost(&self, state: &String) -> Vec<Edge<String, String>> {
        self.edges.get(state).cloned().unwrap_or_default()
    }
}

impl SearchWorld for GraphWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn action_label(&self, action: &String) -> String {
        action.clone()
    }
}
