//! Depth-ceiling and leaf-preference properties for iterative deepening.

use lock_tests::fixtures::DepthProbe;
use proptest::prelude::*;
use wayfinder_search::dfs_id::LeafCandidate;
use wayfinder_search::{
    Cost, DeepeningStrategy, DepthFirstIterativeDeepening, SearchAlgorithm, SearchPolicy,
    TerminationReason,
};

fn strategy() -> impl Strategy<Value = DeepeningStrategy> {
    prop_oneof![Just(DeepeningStrategy::Restart), Just(DeepeningStrategy::Commit)]
}

fn leaf(depth: u32, cost: Cost) -> LeafCandidate<(), ()> {
    LeafCandidate {
        actions: Vec::new(),
        state: (),
        cost,
        depth,
    }
}

proptest! {
    #[test]
    fn no_state_beyond_max_depth_is_examined(
        branching in 1u32..4,
        goal_depth in prop::option::of(0u32..12),
        max_depth in 1u32..8,
        deepening in strategy(),
    ) {
        let probe = DepthProbe::new(branching, goal_depth);
        let policy = SearchPolicy { max_depth, deepening, ..SearchPolicy::default() };
        let outcome = DepthFirstIterativeDeepening::new(policy).solve(&probe).unwrap();
        prop_assert!(probe.deepest() <= max_depth);
        if let Some(solution) = &outcome.solution {
            prop_assert!(solution.actions.len() <= max_depth as usize);
        }
    }

    #[test]
    fn restart_finds_goal_within_cap_at_cheapest_cost(
        branching in 1u32..4,
        goal_depth in 0u32..6,
    ) {
        let probe = DepthProbe::new(branching, Some(goal_depth));
        let outcome = DepthFirstIterativeDeepening::default().solve(&probe).unwrap();
        prop_assert_eq!(outcome.termination, TerminationReason::GoalReached);
        // Branch 0 costs 1 at every level.
        prop_assert_eq!(outcome.total_cost(), Some(Cost::from(goal_depth)));
        prop_assert!(outcome.actions().unwrap_or_default().iter().all(|&b| b == 0));
    }

    #[test]
    fn goal_beyond_cap_hits_ceiling(branching in 1u32..3, extra in 1u32..4) {
        let probe = DepthProbe::new(branching, Some(10 + extra));
        let outcome = DepthFirstIterativeDeepening::default().solve(&probe).unwrap();
        prop_assert!(!outcome.is_solved());
        prop_assert_eq!(outcome.termination, TerminationReason::DepthCapReached { max_depth: 10 });
        prop_assert_eq!(probe.deepest(), 10);
    }

    #[test]
    fn intermediate_preference_is_a_strict_order(
        a in (0u32..5, 0i64..5),
        b in (0u32..5, 0i64..5),
        c in (0u32..5, 0i64..5),
    ) {
        let (a, b, c) = (leaf(a.0, a.1), leaf(b.0, b.1), leaf(c.0, c.1));
        prop_assert!(!a.displaces(&a));
        prop_assert!(!(a.displaces(&b) && b.displaces(&a)));
        if a.displaces(&b) && b.displaces(&c) {
            prop_assert!(a.displaces(&c));
        }
        if a.depth > b.depth {
            prop_assert!(a.displaces(&b));
        }
    }

    #[test]
    fn goal_preference_is_a_strict_order(
        a in (0u32..5, 0i64..5),
        b in (0u32..5, 0i64..5),
    ) {
        let (a, b) = (leaf(a.0, a.1), leaf(b.0, b.1));
        prop_assert!(!a.improves_goal(&a));
        prop_assert!(!(a.improves_goal(&b) && b.improves_goal(&a)));
        if a.cost < b.cost {
            prop_assert!(a.improves_goal(&b));
        }
    }
}
