//! Binary that runs the reference worlds through both algorithms and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `run_fixture`
//!
//! Output: one `key=value` line per run, in a fixed order.

use lock_tests::fixtures::{scenario_a, scenario_b};
use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::runner::{run_search, AlgorithmKind};
use wayfinder_harness::worlds::grid_world::GridWorld;
use wayfinder_harness::worlds::line_world::LineWorld;
use wayfinder_search::SearchPolicy;

const MAZE: &str = "
    S..#....
    .#.#.##.
    .#...#..
    .####.#.
    ......#G
";

fn emit<W: SearchWorld>(world: &W, algorithm: AlgorithmKind) {
    let report = run_search(world, algorithm, &SearchPolicy::default()).expect("run failed");
    println!("{}.{algorithm:?}.digest={}", report.world_id, report.digest);
}

fn main() {
    let maze = GridWorld::parse(MAZE).expect("maze parses");
    for algorithm in [AlgorithmKind::UniformCost, AlgorithmKind::DfsIterativeDeepening] {
        emit(&scenario_a(), algorithm);
        emit(&scenario_b(), algorithm);
        emit(&LineWorld::new(37), algorithm);
        emit(&maze, algorithm);
    }
}
