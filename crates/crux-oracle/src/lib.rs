//! # crux-oracle
//!
//! Detects when a session's reasoning has entered a sustained causal phase.
//! Each scored observation either qualifies (causal-depth score at the
//! ceiling with high confidence) or does not; qualification counts feed a
//! Beta posterior, and the phase activates when the posterior probability
//! that the qualifying rate beats chance crosses the activation threshold.
//! Deactivation uses a lower threshold so the phase does not flap.

pub mod posterior;
pub mod streak;

use tracing::info;

use crux_core::config::OracleConfig;
use crux_core::models::{OracleState, OracleTransition, ScoredObservation};

use crate::posterior::posterior_above_half;

/// Fresh session state seeded from the configured prior.
pub fn initial_state(config: &OracleConfig) -> OracleState {
    OracleState {
        alpha: config.prior_alpha,
        beta: config.prior_beta,
        is_active: false,
        consecutive_qualifying: 0,
        average_confidence: 0.0,
        posterior: posterior_above_half(config.prior_alpha, config.prior_beta),
        history: Vec::new(),
        activation_count: 0,
        last_observation_at: None,
    }
}

/// Fold one observation into the session state.
pub fn process_observation(
    state: &mut OracleState,
    observation: &ScoredObservation,
    config: &OracleConfig,
) -> OracleTransition {
    let qualifying = observation.score == config.qualifying_score
        && observation.confidence >= config.confidence_threshold;

    streak::update(state, qualifying, observation.timestamp, config);

    if qualifying {
        state.alpha += 1;
    } else {
        state.beta += 1;
    }
    state.posterior = posterior_above_half(state.alpha, state.beta);

    let mut activated = false;
    let mut deactivated = false;
    if !state.is_active && state.posterior >= config.activation_threshold {
        state.is_active = true;
        state.activation_count += 1;
        activated = true;
        info!(
            posterior = state.posterior,
            activations = state.activation_count,
            "oracle phase activated"
        );
    } else if state.is_active && state.posterior < config.deactivation_threshold {
        state.is_active = false;
        deactivated = true;
        info!(posterior = state.posterior, "oracle phase deactivated");
    }

    state.history.push(observation.clone());
    if state.history.len() > config.history_window {
        let excess = state.history.len() - config.history_window;
        state.history.drain(..excess);
    }
    state.average_confidence = if state.history.is_empty() {
        0.0
    } else {
        state.history.iter().map(|o| o.confidence).sum::<f64>() / state.history.len() as f64
    };
    state.last_observation_at = Some(observation.timestamp);

    OracleTransition {
        qualifying,
        posterior: state.posterior,
        activated,
        deactivated,
        is_active: state.is_active,
    }
}
