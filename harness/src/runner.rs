//! Harness runner: executes a world under a policy and produces a report.
//!
//! # Pipeline
//!
//! ```text
//! algorithm.solve(world)
//!   → label actions → report JSON → canonical_json_bytes()
//!   → canonical_hash(DOMAIN_RUN_REPORT)
//! ```
//!
//! Reports are deterministic: the same world, algorithm and policy always
//! produce byte-identical report JSON and therefore the same digest.

use serde::Serialize;

use wayfinder_search::{
    DepthFirstIterativeDeepening, SearchAlgorithm, SearchError, SearchOutcome, SearchPolicy,
    Solution, UniformCostSearch,
};

use crate::canon::{canonical_json_bytes, CanonError};
use crate::contract::SearchWorld;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_POLICY_SNAPSHOT, DOMAIN_RUN_REPORT};

/// Report schema identifier embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "wayfinder.run_report.v1";

/// Which search algorithm the runner uses. Reports record the chosen
/// algorithm's [`SearchAlgorithm::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    UniformCost,
    DfsIterativeDeepening,
}

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The search itself failed (policy or problem contract violation).
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    /// A report value could not be converted to JSON.
    #[error("report serialization failed: {detail}")]
    Serialize { detail: String },
    /// Canonical JSON serialization failed.
    #[error("canonicalization failed: {0}")]
    Canon(#[from] CanonError),
    /// Report bytes do not hash to the recorded digest.
    #[error("report digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch { recorded: String, computed: String },
}

/// The result of a harness run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    pub algorithm: AlgorithmKind,
    /// Outcome with actions rendered through [`SearchWorld::action_label`].
    pub outcome: SearchOutcome<String>,
    /// Canonical JSON bytes of the policy snapshot.
    pub policy_bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_POLICY_SNAPSHOT, policy_bytes)`.
    pub policy_digest: ContentHash,
    /// Canonical JSON bytes of the full report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_RUN_REPORT, bytes)`.
    pub digest: ContentHash,
}

/// Run `algorithm` over `world` under `policy` and build a report.
///
/// A run that finds no path still produces a report; only search errors
/// and serialization failures are returned as `Err`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid or the world
/// violates the problem contract, and [`RunError::Serialize`] /
/// [`RunError::Canon`] if the report cannot be canonicalized.
pub fn run_search<W: SearchWorld>(
    world: &W,
    algorithm: AlgorithmKind,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    let (algorithm_name, outcome) = match algorithm {
        AlgorithmKind::UniformCost => solve_named(&UniformCostSearch::new(policy.clone()), world)?,
        AlgorithmKind::DfsIterativeDeepening => {
            solve_named(&DepthFirstIterativeDeepening::new(policy.clone()), world)?
        }
    };
    let outcome = label_outcome(world, outcome);

    let policy_json = to_json(policy)?;
    let policy_bytes = canonical_json_bytes(&policy_json)?;
    let policy_digest = canonical_hash(DOMAIN_POLICY_SNAPSHOT, &policy_bytes);

    let report_json = serde_json::json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "world_id": world.world_id(),
        "algorithm": algorithm_name,
        "policy": policy_json,
        "policy_digest": policy_digest.to_string(),
        "outcome": to_json(&outcome)?,
    });
    let bytes = canonical_json_bytes(&report_json)?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);

    tracing::debug!(
        world_id = world.world_id(),
        ?algorithm,
        solved = outcome.is_solved(),
        states_explored = outcome.states_explored,
        %digest,
        "run finished"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        algorithm,
        outcome,
        policy_bytes,
        policy_digest,
        bytes,
        digest,
    })
}

/// Recompute the report digest from its bytes and compare.
///
/// # Errors
///
/// Returns [`RunError::DigestMismatch`] if the bytes were altered.
pub fn verify_report(report: &RunReport) -> Result<(), RunError> {
    let computed = canonical_hash(DOMAIN_RUN_REPORT, &report.bytes);
    if computed != report.digest {
        return Err(RunError::DigestMismatch {
            recorded: report.digest.to_string(),
            computed: computed.to_string(),
        });
    }
    Ok(())
}

fn solve_named<W: SearchWorld, A: SearchAlgorithm<W>>(
    algorithm: &A,
    world: &W,
) -> Result<(&'static str, SearchOutcome<W::Action>), SearchError> {
    Ok((algorithm.name(), algorithm.solve(world)?))
}

fn label_outcome<W: SearchWorld>(
    world: &W,
    outcome: SearchOutcome<W::Action>,
) -> SearchOutcome<String> {
    SearchOutcome {
        solution: outcome.solution.map(|s| Solution {
            actions: s.actions.iter().map(|a| world.action_label(a)).collect(),
            total_cost: s.total_cost,
        }),
        states_explored: outcome.states_explored,
        termination: outcome.termination,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, RunError> {
    serde_json::to_value(value).map_err(|e| RunError::Serialize {
        detail: e.to_string(),
    })
}
