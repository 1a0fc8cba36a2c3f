use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored reasoning observation fed to the oracle phase detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredObservation {
    /// Causal-depth score; 3 is the qualifying ceiling.
    pub score: u8,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Session-scoped oracle phase state.
///
/// Threaded explicitly through [`processing`](crate) calls and periodically
/// checkpointed by external storage; never a hidden module-level singleton.
/// One logical stream of observations per session id — concurrent writers
/// must serialize externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleState {
    /// Beta posterior success count (prior included).
    pub alpha: u32,
    /// Beta posterior failure count (prior included).
    pub beta: u32,
    pub is_active: bool,
    /// Display-only streak of consecutive qualifying observations.
    pub consecutive_qualifying: u32,
    /// Mean confidence over the history window.
    pub average_confidence: f64,
    /// Posterior probability that the qualifying rate exceeds chance.
    pub posterior: f64,
    /// Last raw observations, capped window.
    pub history: Vec<ScoredObservation>,
    /// How many times the phase has activated over the session.
    pub activation_count: u32,
    pub last_observation_at: Option<DateTime<Utc>>,
}

/// What a single observation changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OracleTransition {
    pub qualifying: bool,
    pub posterior: f64,
    /// The phase switched on with this observation.
    pub activated: bool,
    /// The phase switched off with this observation.
    pub deactivated: bool,
    pub is_active: bool,
}
