//! Wayfinder Search: generic search over lazily generated state spaces.
//!
//! Callers describe a space by implementing [`contract::SearchProblem`];
//! algorithms implement [`contract::SearchAlgorithm`] and return a
//! [`outcome::SearchOutcome`]. The engine never inspects states or actions
//! beyond equality and hashing.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_search  ←  wayfinder_harness
//! (contract, frontier,  (worlds, runner,
//!  ucs, dfs_id)          report digests)
//! ```
//!
//! # Key types
//!
//! - [`UniformCostSearch`]: Dijkstra over the implicit graph, cost-optimal
//!   for non-negative edge costs
//! - [`DepthFirstIterativeDeepening`]: depth-bounded DFS with a hard ceiling
//! - [`frontier::PriorityQueue`]: decrease-key queue with lazy deletion
//! - [`SearchPolicy`]: depth, budget and verbosity configuration

#![forbid(unsafe_code)]

pub mod contract;
pub mod dfs_id;
pub mod error;
pub mod frontier;
pub mod outcome;
pub mod policy;
pub mod trace;
pub mod ucs;

#[cfg(test)]
mod testing;

pub use contract::{Cost, Edge, SearchAlgorithm, SearchProblem};
pub use dfs_id::DepthFirstIterativeDeepening;
pub use error::SearchError;
pub use outcome::{SearchOutcome, Solution, TerminationReason};
pub use policy::{DeepeningStrategy, SearchPolicy, Verbosity};
pub use ucs::UniformCostSearch;
