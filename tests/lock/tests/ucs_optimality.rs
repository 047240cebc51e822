//! UCS optimality and DFS-ID soundness on random non-negative graphs,
//! checked against a Bellman-Ford oracle.

use lock_tests::fixtures::RandomGraph;
use proptest::prelude::*;
use wayfinder_search::{
    DepthFirstIterativeDeepening, SearchAlgorithm, SearchPolicy, TerminationReason,
    UniformCostSearch,
};

fn random_graph() -> impl Strategy<Value = RandomGraph> {
    (2usize..8).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count, 0i64..10), 0..20)
            .prop_map(move |edges| RandomGraph { node_count, edges })
    })
}

proptest! {
    #[test]
    fn ucs_cost_matches_bellman_ford(graph in random_graph()) {
        let outcome = UniformCostSearch::default().solve(&graph.to_world()).unwrap();
        prop_assert_eq!(outcome.total_cost(), graph.min_cost());
    }

    #[test]
    fn ucs_actions_replay_to_reported_cost(graph in random_graph()) {
        let outcome = UniformCostSearch::default().solve(&graph.to_world()).unwrap();
        if let Some(solution) = &outcome.solution {
            prop_assert_eq!(graph.replay(&solution.actions), Some(solution.total_cost));
        }
    }

    #[test]
    fn ucs_without_path_explores_reachable_component(graph in random_graph()) {
        let outcome = UniformCostSearch::default().solve(&graph.to_world()).unwrap();
        if !outcome.is_solved() {
            prop_assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
            prop_assert_eq!(outcome.states_explored, graph.reachable_count() as u64);
        }
    }

    #[test]
    fn dfs_solutions_are_valid_and_never_beat_ucs(graph in random_graph()) {
        let world = graph.to_world();
        let policy = SearchPolicy {
            max_depth: 4,
            max_expansions: Some(100_000),
            ..SearchPolicy::default()
        };
        let dfs = DepthFirstIterativeDeepening::new(policy).solve(&world).unwrap();
        let ucs = UniformCostSearch::default().solve(&world).unwrap();
        if let Some(solution) = &dfs.solution {
            prop_assert!(solution.actions.len() <= 4);
            prop_assert_eq!(graph.replay(&solution.actions), Some(solution.total_cost));
            let optimum = ucs.total_cost();
            prop_assert!(optimum.is_some());
            prop_assert!(optimum <= Some(solution.total_cost));
        }
    }

    #[test]
    fn solving_twice_is_identical(graph in random_graph()) {
        let world = graph.to_world();
        let first = UniformCostSearch::default().solve(&world).unwrap();
        let second = UniformCostSearch::default().solve(&world).unwrap();
        prop_assert_eq!(first, second);
    }
}
