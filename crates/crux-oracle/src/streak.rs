//! Display-only streak of consecutive qualifying observations.
//!
//! The streak never gates activation; it resets on a non-qualifying
//! observation or when too much time passes between observations.

use chrono::{DateTime, Utc};

use crux_core::config::OracleConfig;
use crux_core::models::OracleState;

/// Update the streak for one observation. Call before the counts change.
pub fn update(
    state: &mut OracleState,
    qualifying: bool,
    observed_at: DateTime<Utc>,
    config: &OracleConfig,
) {
    if gap_exceeded(state.last_observation_at, observed_at, config) {
        state.consecutive_qualifying = 0;
    }
    if qualifying {
        state.consecutive_qualifying += 1;
    } else {
        state.consecutive_qualifying = 0;
    }
}

fn gap_exceeded(
    last: Option<DateTime<Utc>>,
    observed_at: DateTime<Utc>,
    config: &OracleConfig,
) -> bool {
    last.is_some_and(|previous| {
        (observed_at - previous).num_seconds() > config.streak_gap_limit_secs
    })
}
