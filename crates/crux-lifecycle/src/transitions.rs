//! The lifecycle state machine itself.

use chrono::{DateTime, Utc};

use crux_core::config::defaults::DEFAULT_P_VALUE_MAX;
use crux_core::constants::MIN_FALSIFIER_LEN;
use crux_core::models::{
    Hypothesis, HypothesisAuditEvent, HypothesisState, LifecycleTrigger, ValidationOutcome,
};

use crate::audit::append_deduped;

/// Advance a hypothesis to the state its evidence supports, appending audit
/// events for every transition taken. Returns the events actually appended.
///
/// Transitions, in order:
/// 1. A hypothesis with no audit trail is registered as `proposed`.
/// 2. A terminal hypothesis is left untouched.
/// 3. A missing or too-short falsifier retracts the hypothesis.
/// 4. The latest validation moves it to `tested` on a pass, `falsified` on
///    a failure. No validation means no further movement.
pub fn ensure_lifecycle(
    hypothesis: &mut Hypothesis,
    now: DateTime<Utc>,
) -> Vec<HypothesisAuditEvent> {
    let mut appended = Vec::new();

    if hypothesis.audit.is_empty() {
        let event = event(
            hypothesis,
            HypothesisState::Proposed,
            LifecycleTrigger::Generation,
            "hypothesis registered".to_string(),
            Vec::new(),
            now,
        );
        if append_deduped(hypothesis, event.clone()) {
            appended.push(event);
        }
    }

    if hypothesis.current_state().is_some_and(|s| s.is_terminal()) {
        return appended;
    }

    if !has_testable_falsifier(hypothesis) {
        let event = event(
            hypothesis,
            HypothesisState::Retracted,
            LifecycleTrigger::ManualReview,
            format!("falsifier is missing or shorter than {MIN_FALSIFIER_LEN} characters"),
            Vec::new(),
            now,
        );
        if append_deduped(hypothesis, event.clone()) {
            appended.push(event);
        }
        return appended;
    }

    let Some(validation) = hypothesis.latest_validation().cloned() else {
        return appended;
    };

    let event = match judge(&validation) {
        Verdict::Pass => event(
            hypothesis,
            HypothesisState::Tested,
            LifecycleTrigger::InterventionResult,
            "latest validation passed".to_string(),
            validation.evidence_refs.clone(),
            now,
        ),
        Verdict::ConclusionInvalid => event(
            hypothesis,
            HypothesisState::Falsified,
            LifecycleTrigger::CounterfactualFailure,
            "latest validation contradicted the stated conclusion".to_string(),
            validation.evidence_refs.clone(),
            now,
        ),
        Verdict::RunFailed => event(
            hypothesis,
            HypothesisState::Falsified,
            LifecycleTrigger::InterventionResult,
            "latest validation run failed".to_string(),
            validation.evidence_refs.clone(),
            now,
        ),
        Verdict::Insignificant(p) => event(
            hypothesis,
            HypothesisState::Falsified,
            LifecycleTrigger::InterventionResult,
            format!("latest validation p-value {p:.3} exceeds {DEFAULT_P_VALUE_MAX}"),
            validation.evidence_refs.clone(),
            now,
        ),
    };
    if append_deduped(hypothesis, event.clone()) {
        appended.push(event);
    }

    appended
}

enum Verdict {
    Pass,
    ConclusionInvalid,
    RunFailed,
    Insignificant(f64),
}

fn judge(validation: &ValidationOutcome) -> Verdict {
    if validation.conclusion_valid == Some(false) {
        return Verdict::ConclusionInvalid;
    }
    if !validation.success {
        return Verdict::RunFailed;
    }
    match validation.p_value {
        Some(p) if p > DEFAULT_P_VALUE_MAX => Verdict::Insignificant(p),
        _ => Verdict::Pass,
    }
}

fn has_testable_falsifier(hypothesis: &Hypothesis) -> bool {
    // Length in characters, not bytes.
    hypothesis
        .falsifier
        .as_deref()
        .is_some_and(|f| f.trim().chars().count() >= MIN_FALSIFIER_LEN)
}

fn event(
    hypothesis: &Hypothesis,
    state: HypothesisState,
    trigger: LifecycleTrigger,
    rationale: String,
    evidence_refs: Vec<String>,
    now: DateTime<Utc>,
) -> HypothesisAuditEvent {
    HypothesisAuditEvent {
        hypothesis_id: hypothesis.id.clone(),
        state,
        trigger,
        rationale,
        evidence_refs,
        timestamp: now,
    }
}
