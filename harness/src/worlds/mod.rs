//! Reference worlds for the harness runner, lock tests and benchmarks.

pub mod graph_world;
pub mod grid_world;
pub mod line_world;
