use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states of a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisState {
    Proposed,
    Tested,
    Falsified,
    Retracted,
}

impl HypothesisState {
    /// Terminal states admit no further automated transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Falsified | Self::Retracted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Tested => "tested",
            Self::Falsified => "falsified",
            Self::Retracted => "retracted",
        }
    }
}

/// What caused a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleTrigger {
    Generation,
    InterventionResult,
    CounterfactualFailure,
    ManualReview,
}

impl LifecycleTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::InterventionResult => "intervention_result",
            Self::CounterfactualFailure => "counterfactual_failure",
            Self::ManualReview => "manual_review",
        }
    }
}

/// One append-only audit entry. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisAuditEvent {
    pub hypothesis_id: String,
    pub state: HypothesisState,
    pub trigger: LifecycleTrigger,
    pub rationale: String,
    pub evidence_refs: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl HypothesisAuditEvent {
    /// Content-equality key: everything except the timestamp, with evidence
    /// refs sorted. Two events with the same key are the same event.
    pub fn dedupe_key(&self) -> String {
        let mut refs = self.evidence_refs.clone();
        refs.sort();
        format!(
            "{}|{}|{}|{}|{}",
            self.hypothesis_id,
            self.state.as_str(),
            self.trigger.as_str(),
            self.rationale,
            refs.join(",")
        )
    }
}

/// Latest result of empirically testing a hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub success: bool,
    /// Whether the stated conclusion held; `None` means not assessed.
    pub conclusion_valid: Option<bool>,
    pub p_value: Option<f64>,
    #[serde(default)]
    pub evidence_refs: Vec<String>,
}

/// Ranking components; absent components score as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisScores {
    pub intervention_value: Option<f64>,
    pub identifiability: Option<f64>,
    pub falsifiability: Option<f64>,
    pub novelty: Option<f64>,
    pub confidence: Option<f64>,
}

/// A hypothesis with its full audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: String,
    pub statement: String,
    /// A condition or test whose outcome would disprove the hypothesis.
    pub falsifier: Option<String>,
    #[serde(default)]
    pub scores: HypothesisScores,
    /// Validation results in arrival order; the last entry is the latest.
    #[serde(default)]
    pub validations: Vec<ValidationOutcome>,
    /// Append-only audit trail; the last entry determines the current state.
    #[serde(default)]
    pub audit: Vec<HypothesisAuditEvent>,
}

impl Hypothesis {
    /// Current state: the most recent audit event's state, if any.
    pub fn current_state(&self) -> Option<HypothesisState> {
        self.audit.last().map(|e| e.state)
    }

    pub fn latest_validation(&self) -> Option<&ValidationOutcome> {
        self.validations.last()
    }
}
