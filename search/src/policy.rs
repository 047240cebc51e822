//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Diagnostic verbosity. Gates trace output only; never affects results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Verbosity {
    /// No diagnostics.
    #[default]
    Silent,
    /// Summary on completion.
    Summary,
    /// Summary plus one event per explored state.
    States,
    /// States plus one event per expanded edge and leaf decision.
    Edges,
}

impl TryFrom<u8> for Verbosity {
    type Error = SearchError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Summary),
            2 => Ok(Self::States),
            3 => Ok(Self::Edges),
            other => Err(SearchError::InvalidPolicy {
                detail: format!("verbosity level {other} is not one of 0..=3"),
            }),
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Silent => 0,
            Verbosity::Summary => 1,
            Verbosity::States => 2,
            Verbosity::Edges => 3,
        }
    }
}

/// How iterative deepening proceeds after a pass finds no end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepeningStrategy {
    /// Every deeper pass restarts from the start state.
    #[default]
    Restart,
    /// The best intermediate solution of the failed pass is committed and the
    /// next pass starts from its end state. Committed depth counts against
    /// `max_depth`.
    Commit,
}

/// Search budget, depth and diagnostics configuration.
///
/// Shared by both algorithms. Uniform cost search reads only `verbosity`,
/// `max_expansions` and `reject_negative_costs`; it accepts any depth
/// settings, including ones [`SearchPolicy::validate_deepening`] rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Diagnostic trace level.
    pub verbosity: Verbosity,
    /// Hard depth ceiling for iterative deepening (path length in edges).
    pub max_depth: u32,
    /// Depth limit of the first iterative-deepening pass.
    pub initial_depth: u32,
    /// Limit increase between iterative-deepening passes.
    pub depth_step: u32,
    /// Behavior after a pass without an end state.
    pub deepening: DeepeningStrategy,
    /// Optional cap on explored states across the whole invocation.
    pub max_expansions: Option<u64>,
    /// Fail fast with [`SearchError::NegativeEdgeCost`] in uniform cost search.
    pub reject_negative_costs: bool,
}

impl SearchPolicy {
    /// Validate the iterative-deepening fields before any state is explored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `depth_step` is zero, or if
    /// `max_depth > 0` and `initial_depth` is zero or exceeds `max_depth`.
    pub fn validate_deepening(&self) -> Result<(), SearchError> {
        if self.depth_step == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "depth_step must be positive".into(),
            });
        }
        if self.max_depth == 0 {
            // Only the start state is examined; the deepening fields are moot.
            return Ok(());
        }
        if self.initial_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "initial_depth must be positive".into(),
            });
        }
        if self.initial_depth > self.max_depth {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "initial_depth {} exceeds max_depth {}",
                    self.initial_depth, self.max_depth
                ),
            });
        }
        Ok(())
    }

    /// Whether `explored` states already exhaust the expansion budget.
    #[must_use]
    pub fn budget_exhausted(&self, explored: u64) -> bool {
        self.max_expansions.is_some_and(|cap| explored >= cap)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Silent,
            max_depth: 10,
            initial_depth: 1,
            depth_step: 1,
            deepening: DeepeningStrategy::Restart,
            max_expansions: None,
            reject_negative_costs: true,
        }
    }
}
