//! Priority ranking over non-terminal hypotheses.
//!
//! Intervention value dominates, identifiability and falsifiability follow,
//! novelty and confidence break near-ties. Tested hypotheses always rank
//! above merely proposed ones.

use crux_core::models::{Hypothesis, HypothesisScores, HypothesisState};

const INTERVENTION_VALUE_WEIGHT: f64 = 100.0;
const IDENTIFIABILITY_WEIGHT: f64 = 20.0;
const FALSIFIABILITY_WEIGHT: f64 = 10.0;
const NOVELTY_WEIGHT: f64 = 0.25;
const CONFIDENCE_WEIGHT: f64 = 1.0;

/// One ranking entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHypothesis {
    pub id: String,
    pub state: HypothesisState,
    pub score: f64,
}

/// Weighted priority score; absent components contribute nothing.
pub fn priority_score(scores: &HypothesisScores) -> f64 {
    scores.intervention_value.unwrap_or(0.0) * INTERVENTION_VALUE_WEIGHT
        + scores.identifiability.unwrap_or(0.0) * IDENTIFIABILITY_WEIGHT
        + scores.falsifiability.unwrap_or(0.0) * FALSIFIABILITY_WEIGHT
        + scores.novelty.unwrap_or(0.0) * NOVELTY_WEIGHT
        + scores.confidence.unwrap_or(0.0) * CONFIDENCE_WEIGHT
}

/// Rank the testable hypotheses: tested before proposed, higher score first,
/// ties broken lexically by id. Terminal and unregistered hypotheses are
/// excluded.
pub fn rank(hypotheses: &[Hypothesis]) -> Vec<RankedHypothesis> {
    let mut ranked: Vec<RankedHypothesis> = hypotheses
        .iter()
        .filter_map(|h| {
            let state = h.current_state()?;
            if state.is_terminal() {
                return None;
            }
            Some(RankedHypothesis {
                id: h.id.clone(),
                state,
                score: priority_score(&h.scores),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a_tested = a.state == HypothesisState::Tested;
        let b_tested = b.state == HypothesisState::Tested;
        b_tested
            .cmp(&a_tested)
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
}
