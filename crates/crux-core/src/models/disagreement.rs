use serde::{Deserialize, Serialize};

use super::alignment::AlignmentQuality;

/// The type of a single disagreement atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    Assumption,
    Confounder,
    EdgePresence,
    EdgeSign,
    EdgeDirection,
    Intervention,
    Counterfactual,
}

impl AtomKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assumption => "assumption",
            Self::Confounder => "confounder",
            Self::EdgePresence => "edge_presence",
            Self::EdgeSign => "edge_sign",
            Self::EdgeDirection => "edge_direction",
            Self::Intervention => "intervention",
            Self::Counterfactual => "counterfactual",
        }
    }
}

/// Severity of a disagreement atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Groundedness triple attached to each atom, each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpistemicWeight {
    pub data_grounded: f64,
    pub mechanism_grounded: f64,
    pub assumption_grounded: f64,
}

impl EpistemicWeight {
    /// Mean of the three components, the quantity the aggregate scorer folds.
    pub fn mean(&self) -> f64 {
        (self.data_grounded + self.mechanism_grounded + self.assumption_grounded) / 3.0
    }
}

/// One quantized, typed unit of difference between two models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisagreementAtom {
    pub kind: AtomKind,
    pub severity: Severity,
    /// What the left model states (or lacks).
    pub left_value: String,
    /// What the right model states (or lacks).
    pub right_value: String,
    /// Canonical directed edge key, when the atom concerns one edge.
    pub edge: Option<String>,
    /// Canonical variable key, when the atom concerns one variable.
    pub variable: Option<String>,
    pub reason: String,
    pub weight: EpistemicWeight,
}

/// The complete, ordered comparison output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisagreementReport {
    /// Aggregate disagreement score in [0, 1]; 0 exactly when `atoms` is empty.
    pub score: f64,
    pub summary: String,
    pub atoms: Vec<DisagreementAtom>,
    pub alignment: AlignmentQuality,
}
