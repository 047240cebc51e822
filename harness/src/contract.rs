//! World contract: what a world adds on top of a search problem.
//!
//! Worlds provide the problem itself plus stable labels for reporting.
//! Worlds may NOT hash, serialize reports, or pick algorithms; those are
//! runner concerns.

use wayfinder_search::SearchProblem;

/// A search problem the harness runner can execute and report on.
pub trait SearchWorld: SearchProblem {
    /// Unique world identifier (e.g., `"line_world"`).
    fn world_id(&self) -> &str;

    /// Stable, human-readable label for `action` used in run reports.
    ///
    /// Labels must be deterministic: report digests depend on them.
    fn action_label(&self, action: &Self::Action) -> String;
}
