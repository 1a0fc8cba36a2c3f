use chrono::{DateTime, Duration, TimeZone, Utc};

use crux_core::config::OracleConfig;
use crux_core::models::{OracleState, ScoredObservation};
use crux_oracle::{initial_state, process_observation};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
}

fn observation(score: u8, confidence: f64, at: DateTime<Utc>) -> ScoredObservation {
    ScoredObservation {
        score,
        confidence,
        timestamp: at,
    }
}

/// Feed `count` observations spaced one second apart, returning the state.
fn feed(state: &mut OracleState, config: &OracleConfig, score: u8, confidence: f64, count: usize) {
    let base = state.last_observation_at.unwrap_or_else(start);
    for i in 0..count {
        let at = base + Duration::seconds(i as i64 + 1);
        process_observation(state, &observation(score, confidence, at), config);
    }
}

#[test]
fn fresh_state_is_inactive_and_skeptical() {
    let config = OracleConfig::default();
    let state = initial_state(&config);
    assert!(!state.is_active);
    assert!(state.posterior < 0.01);
    assert_eq!(state.alpha, 1);
    assert_eq!(state.beta, 9);
}

#[test]
fn twenty_qualifying_observations_activate_the_phase() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    feed(&mut state, &config, 3, 0.95, 20);
    assert!(state.is_active);
    assert!(state.posterior >= 0.95);
    assert_eq!(state.activation_count, 1);
    assert_eq!(state.consecutive_qualifying, 20);
    assert_eq!(state.alpha, 21);
    assert_eq!(state.beta, 9);
}

#[test]
fn activation_fires_exactly_once_per_crossing() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    let base = start();
    let mut activations = 0;
    for i in 0..20 {
        let at = base + Duration::seconds(i + 1);
        let t = process_observation(&mut state, &observation(3, 0.95, at), &config);
        if t.activated {
            activations += 1;
        }
    }
    assert_eq!(activations, 1);
}

#[test]
fn one_failure_keeps_an_active_phase_active() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    feed(&mut state, &config, 3, 0.95, 20);
    assert!(state.is_active);

    let at = state.last_observation_at.unwrap() + Duration::seconds(1);
    let t = process_observation(&mut state, &observation(1, 0.95, at), &config);
    assert!(!t.qualifying);
    assert!(!t.deactivated);
    assert!(state.is_active);
    assert!(state.posterior >= 0.90);
    assert_eq!(state.consecutive_qualifying, 0);
}

#[test]
fn sustained_failures_deactivate_below_the_floor() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    feed(&mut state, &config, 3, 0.95, 20);
    assert!(state.is_active);

    feed(&mut state, &config, 0, 0.95, 5);
    assert!(!state.is_active);
    assert!(state.posterior < 0.90);
    assert_eq!(state.activation_count, 1);
}

#[test]
fn low_confidence_observations_do_not_qualify() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    let at = start();
    let t = process_observation(&mut state, &observation(3, 0.5, at), &config);
    assert!(!t.qualifying);
    assert_eq!(state.alpha, 1);
    assert_eq!(state.beta, 10);
}

#[test]
fn time_gap_resets_the_streak_but_not_the_counts() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    let at = start();
    process_observation(&mut state, &observation(3, 0.95, at), &config);
    assert_eq!(state.consecutive_qualifying, 1);

    let late = at + Duration::seconds(config.streak_gap_limit_secs + 1);
    process_observation(&mut state, &observation(3, 0.95, late), &config);
    assert_eq!(state.consecutive_qualifying, 1);
    assert_eq!(state.alpha, 3);
}

#[test]
fn history_window_is_capped_and_averaged() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    feed(&mut state, &config, 3, 0.6, 15);
    assert_eq!(state.history.len(), config.history_window);

    let at = state.last_observation_at.unwrap() + Duration::seconds(1);
    process_observation(&mut state, &observation(3, 1.0, at), &config);
    assert_eq!(state.history.len(), config.history_window);
    // Window now holds nine 0.6s and one 1.0.
    let expected = (9.0 * 0.6 + 1.0) / 10.0;
    assert!((state.average_confidence - expected).abs() < 1e-9);
}

#[test]
fn streak_is_display_only_and_never_gates_activation() {
    let config = OracleConfig::default();
    let mut state = initial_state(&config);
    // Qualifying observations separated by large gaps: streak stays at 1
    // but the posterior still climbs to activation.
    let mut at = start();
    for _ in 0..20 {
        at = at + Duration::seconds(config.streak_gap_limit_secs + 1);
        process_observation(&mut state, &observation(3, 0.95, at), &config);
    }
    assert_eq!(state.consecutive_qualifying, 1);
    assert!(state.is_active);
}
