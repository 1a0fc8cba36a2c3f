use chrono::{TimeZone, Utc};

use crux_core::models::{
    Hypothesis, HypothesisScores, HypothesisState, LifecycleTrigger, ValidationOutcome,
};
use crux_lifecycle::{ensure_lifecycle, rank};

const LONG_FALSIFIER: &str = "intervening on dosage leaves the outcome unchanged";

fn hypothesis(id: &str, falsifier: Option<&str>) -> Hypothesis {
    Hypothesis {
        id: id.to_string(),
        statement: "dosage drives recovery".to_string(),
        falsifier: falsifier.map(str::to_string),
        scores: HypothesisScores::default(),
        validations: Vec::new(),
        audit: Vec::new(),
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

#[test]
fn fresh_hypothesis_is_registered_as_proposed() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    let appended = ensure_lifecycle(&mut h, now());
    assert_eq!(appended.len(), 1);
    assert_eq!(h.current_state(), Some(HypothesisState::Proposed));
    assert_eq!(appended[0].trigger, LifecycleTrigger::Generation);
}

#[test]
fn missing_falsifier_retracts() {
    let mut h = hypothesis("h1", None);
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Retracted));
    assert_eq!(h.audit.last().unwrap().trigger, LifecycleTrigger::ManualReview);
}

#[test]
fn short_falsifier_retracts() {
    let mut h = hypothesis("h1", Some("it breaks"));
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Retracted));
}

#[test]
fn falsifier_length_counts_characters_not_bytes() {
    // 21 Greek letters: 42 bytes, and still a valid falsifier.
    let mut long = hypothesis("h1", Some("αβγδεζηθικλμνξοπρστυφ"));
    ensure_lifecycle(&mut long, now());
    assert_eq!(long.current_state(), Some(HypothesisState::Proposed));

    // 12 letters is under the 20-character minimum despite 24 bytes.
    let mut short = hypothesis("h2", Some("αβγδεζηθικλμ"));
    ensure_lifecycle(&mut short, now());
    assert_eq!(short.current_state(), Some(HypothesisState::Retracted));
}

#[test]
fn tested_hypothesis_regresses_to_falsified() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.01),
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Tested));
    let trail_len = h.audit.len();

    // A later failing validation regresses tested to falsified.
    h.validations.push(ValidationOutcome {
        success: false,
        conclusion_valid: None,
        p_value: None,
        evidence_refs: vec!["run-8".to_string()],
    });
    let appended = ensure_lifecycle(&mut h, now());
    assert_eq!(appended.len(), 1);
    assert_eq!(h.current_state(), Some(HypothesisState::Falsified));
    assert_eq!(h.audit.len(), trail_len + 1);
    assert_eq!(
        h.audit.last().unwrap().trigger,
        LifecycleTrigger::InterventionResult
    );
}

#[test]
fn passing_validation_moves_to_tested() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.01),
        evidence_refs: vec!["run-7".to_string()],
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Tested));
    let last = h.audit.last().unwrap();
    assert_eq!(last.trigger, LifecycleTrigger::InterventionResult);
    assert_eq!(last.evidence_refs, vec!["run-7".to_string()]);
}

#[test]
fn missing_p_value_still_passes() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: None,
        p_value: None,
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Tested));
}

#[test]
fn invalid_conclusion_falsifies_with_counterfactual_trigger() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(false),
        p_value: Some(0.01),
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Falsified));
    assert_eq!(
        h.audit.last().unwrap().trigger,
        LifecycleTrigger::CounterfactualFailure
    );
}

#[test]
fn insignificant_p_value_falsifies() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.2),
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Falsified));
    assert_eq!(
        h.audit.last().unwrap().trigger,
        LifecycleTrigger::InterventionResult
    );
}

#[test]
fn rerunning_the_lifecycle_appends_nothing() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.01),
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    let trail_len = h.audit.len();
    let appended = ensure_lifecycle(&mut h, now());
    assert!(appended.is_empty());
    assert_eq!(h.audit.len(), trail_len);
}

#[test]
fn terminal_states_are_monotone() {
    let mut h = hypothesis("h1", Some(LONG_FALSIFIER));
    h.validations.push(ValidationOutcome {
        success: false,
        conclusion_valid: None,
        p_value: None,
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut h, now());
    assert_eq!(h.current_state(), Some(HypothesisState::Falsified));

    // A later passing validation must not resurrect it.
    h.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.01),
        evidence_refs: Vec::new(),
    });
    let appended = ensure_lifecycle(&mut h, now());
    assert!(appended.is_empty());
    assert_eq!(h.current_state(), Some(HypothesisState::Falsified));
}

#[test]
fn ranking_puts_tested_above_proposed_and_excludes_terminal() {
    let mut tested = hypothesis("b_tested", Some(LONG_FALSIFIER));
    tested.scores.intervention_value = Some(0.1);
    tested.validations.push(ValidationOutcome {
        success: true,
        conclusion_valid: Some(true),
        p_value: Some(0.01),
        evidence_refs: Vec::new(),
    });
    ensure_lifecycle(&mut tested, now());

    let mut proposed = hypothesis("a_proposed", Some(LONG_FALSIFIER));
    proposed.scores.intervention_value = Some(0.9);
    ensure_lifecycle(&mut proposed, now());

    let mut retracted = hypothesis("c_retracted", None);
    ensure_lifecycle(&mut retracted, now());

    let ranked = rank(&[proposed, retracted, tested]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b_tested", "a_proposed"]);
}

#[test]
fn ranking_breaks_score_ties_lexically() {
    let mut first = hypothesis("alpha", Some(LONG_FALSIFIER));
    let mut second = hypothesis("beta", Some(LONG_FALSIFIER));
    ensure_lifecycle(&mut first, now());
    ensure_lifecycle(&mut second, now());

    let ranked = rank(&[second, first]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[test]
fn intervention_value_dominates_the_score() {
    let mut low_iv = hypothesis("low", Some(LONG_FALSIFIER));
    low_iv.scores = HypothesisScores {
        intervention_value: Some(0.1),
        identifiability: Some(1.0),
        falsifiability: Some(1.0),
        novelty: Some(1.0),
        confidence: Some(1.0),
    };
    let mut high_iv = hypothesis("high", Some(LONG_FALSIFIER));
    high_iv.scores.intervention_value = Some(0.5);

    ensure_lifecycle(&mut low_iv, now());
    ensure_lifecycle(&mut high_iv, now());

    let ranked = rank(&[low_iv, high_iv]);
    assert_eq!(ranked[0].id, "high");
}
