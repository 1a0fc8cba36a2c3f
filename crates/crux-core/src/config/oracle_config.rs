use serde::{Deserialize, Serialize};

use crate::constants::ORACLE_HISTORY_WINDOW;

use super::defaults;

/// Oracle phase-detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Beta prior success count.
    pub prior_alpha: u32,
    /// Beta prior failure count.
    pub prior_beta: u32,
    /// Causal-depth score an observation must hit to qualify.
    pub qualifying_score: u8,
    /// Minimum confidence for an observation to qualify.
    pub confidence_threshold: f64,
    /// Posterior at or above which the phase activates.
    pub activation_threshold: f64,
    /// Posterior below which an active phase deactivates.
    pub deactivation_threshold: f64,
    /// Time gap (seconds) beyond which the display streak resets.
    pub streak_gap_limit_secs: i64,
    /// Raw observations retained in the history window.
    pub history_window: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            prior_alpha: defaults::DEFAULT_ORACLE_PRIOR_ALPHA,
            prior_beta: defaults::DEFAULT_ORACLE_PRIOR_BETA,
            qualifying_score: defaults::DEFAULT_ORACLE_QUALIFYING_SCORE,
            confidence_threshold: defaults::DEFAULT_ORACLE_CONFIDENCE_THRESHOLD,
            activation_threshold: defaults::DEFAULT_ORACLE_ACTIVATION_THRESHOLD,
            deactivation_threshold: defaults::DEFAULT_ORACLE_DEACTIVATION_THRESHOLD,
            streak_gap_limit_secs: defaults::DEFAULT_STREAK_GAP_LIMIT_SECS,
            history_window: ORACLE_HISTORY_WINDOW,
        }
    }
}
