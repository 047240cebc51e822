//! End-to-end acceptance locks for the two algorithms and the queue.
//!
//! - UCS picks the cheaper three-edge route over the two-edge one
//! - UCS reports no path when the end state is disconnected
//! - decrease-key queue keeps the lowest priority and never reopens
//! - DFS-ID treats `max_depth` as a hard ceiling

use lock_tests::fixtures::{chain_world, scenario_a, scenario_b, straight_chain};
use wayfinder_search::frontier::PriorityQueue;
use wayfinder_search::{
    DeepeningStrategy, DepthFirstIterativeDeepening, SearchAlgorithm, SearchPolicy,
    TerminationReason, UniformCostSearch,
};

fn labels(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|a| (*a).to_string()).collect()
}

// --- Cheapest path ---

#[test]
fn ucs_prefers_cheaper_longer_path() {
    let outcome = UniformCostSearch::default().solve(&scenario_a()).unwrap();
    assert_eq!(
        outcome.actions().map(<[String]>::to_vec),
        Some(labels(&["b1", "b2", "c2"]))
    );
    assert_eq!(outcome.total_cost(), Some(3));
    assert_eq!(outcome.termination, TerminationReason::GoalReached);
}

#[test]
fn dfs_returns_first_depth_that_reaches_goal() {
    let outcome = DepthFirstIterativeDeepening::default()
        .solve(&scenario_a())
        .unwrap();
    // The first pass that reaches E (limit 2) only sees c1,c2 at cost 6.
    assert!(outcome.is_solved());
    assert_eq!(
        outcome.actions().map(<[String]>::to_vec),
        Some(labels(&["c1", "c2"]))
    );
    assert_eq!(outcome.total_cost(), Some(6));
}

// --- Disconnected end state ---

#[test]
fn ucs_reports_no_path_for_disconnected_end() {
    let outcome = UniformCostSearch::default().solve(&scenario_b()).unwrap();
    assert!(!outcome.is_solved());
    assert_eq!(outcome.actions(), None);
    assert_eq!(outcome.total_cost(), None);
    assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
    assert_eq!(outcome.states_explored, 3);
}

#[test]
fn dfs_runs_out_of_leaves_for_disconnected_end() {
    let outcome = DepthFirstIterativeDeepening::default()
        .solve(&scenario_b())
        .unwrap();
    assert!(!outcome.is_solved());
    assert_eq!(outcome.termination, TerminationReason::DeadEnd);
}

// --- Decrease-key queue ---

#[test]
fn queue_decrease_key_sequence() {
    let mut queue = PriorityQueue::new();
    assert!(queue.update("x", 5));
    assert!(!queue.update("x", 7));
    assert_eq!(queue.priority(&"x"), Some(5));
    assert!(queue.update("x", 2));
    assert_eq!(queue.remove_min(), Some(("x", 2)));
    assert_eq!(queue.remove_min(), None);
    assert!(!queue.update("x", 0), "extracted states stay final");
    assert_eq!(queue.remove_min(), None);
}

// --- Depth ceiling ---

#[test]
fn dfs_does_not_find_path_beyond_cap() {
    let world = chain_world(12);
    let outcome = DepthFirstIterativeDeepening::default()
        .solve(&world)
        .unwrap();
    assert!(!outcome.is_solved());
    assert_eq!(
        outcome.termination,
        TerminationReason::DepthCapReached { max_depth: 10 }
    );

    // The path does exist.
    let reference = UniformCostSearch::default().solve(&world).unwrap();
    assert_eq!(reference.total_cost(), Some(12));
}

#[test]
fn commit_strategy_advances_to_cap_and_stops() {
    let policy = SearchPolicy {
        deepening: DeepeningStrategy::Commit,
        ..SearchPolicy::default()
    };
    let dfs = DepthFirstIterativeDeepening::new(policy);

    // Commits n1, n3, n6, then the pass to n10 hits the ceiling.
    let outcome = dfs.solve(&straight_chain(12)).unwrap();
    assert!(!outcome.is_solved());
    assert_eq!(
        outcome.termination,
        TerminationReason::DepthCapReached { max_depth: 10 }
    );

    let within = dfs.solve(&straight_chain(10)).unwrap();
    assert_eq!(within.total_cost(), Some(10));
}

#[test]
fn commit_strategy_can_commit_to_dead_end() {
    // Every node lists its dead-end side edge first; on the depth and cost
    // tie the first leaf is kept, so the first commit is x0.
    let policy = SearchPolicy {
        deepening: DeepeningStrategy::Commit,
        ..SearchPolicy::default()
    };
    let outcome = DepthFirstIterativeDeepening::new(policy)
        .solve(&chain_world(12))
        .unwrap();
    assert_eq!(outcome.termination, TerminationReason::DeadEnd);
}

#[test]
fn raising_cap_finds_path() {
    let policy = SearchPolicy {
        max_depth: 12,
        ..SearchPolicy::default()
    };
    let outcome = DepthFirstIterativeDeepening::new(policy)
        .solve(&chain_world(12))
        .unwrap();
    assert_eq!(outcome.total_cost(), Some(12));
    assert_eq!(outcome.actions().map(<[String]>::len), Some(12));
}
