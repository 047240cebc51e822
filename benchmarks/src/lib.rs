//! Shared regimes and helpers for wayfinder benchmark suites.

use wayfinder_harness::worlds::grid_world::GridWorld;
use wayfinder_harness::worlds::line_world::LineWorld;
use wayfinder_search::{
    DepthFirstIterativeDeepening, SearchAlgorithm, SearchOutcome, SearchPolicy, SearchProblem,
    UniformCostSearch,
};

/// A named world plus the policy it is benchmarked under.
pub struct Regime<W> {
    pub name: &'static str,
    pub world: W,
    pub policy: SearchPolicy,
}

/// Open grids of growing size. UCS visits every cell closer than the goal,
/// so cost grows with the square of the side.
#[must_use]
pub fn grid_regimes() -> Vec<Regime<GridWorld>> {
    [("grid_8", 8usize), ("grid_32", 32), ("grid_96", 96)]
        .into_iter()
        .map(|(name, side)| Regime {
            name,
            world: GridWorld::open_square(side),
            policy: SearchPolicy::default(),
        })
        .collect()
}

/// Line worlds whose shortest walk/tram plan fits inside the default
/// depth cap, so both algorithms reach the goal.
#[must_use]
pub fn line_regimes() -> Vec<Regime<LineWorld>> {
    vec![
        Regime {
            name: "line_37",
            world: LineWorld::new(37),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "line_500",
            world: LineWorld::new(500),
            policy: SearchPolicy {
                max_depth: 14,
                ..SearchPolicy::default()
            },
        },
    ]
}

/// Run UCS under `policy`.
///
/// # Panics
///
/// Panics if the search returns an error. Benchmark runs are expected to succeed.
pub fn run_ucs<P: SearchProblem>(problem: &P, policy: &SearchPolicy) -> SearchOutcome<P::Action> {
    UniformCostSearch::new(policy.clone())
        .solve(problem)
        .expect("ucs should succeed in benchmarks")
}

/// Run iterative-deepening DFS under `policy`.
///
/// # Panics
///
/// Panics if the search returns an error.
pub fn run_dfs_id<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action> {
    DepthFirstIterativeDeepening::new(policy.clone())
        .solve(problem)
        .expect("dfs-id should succeed in benchmarks")
}
