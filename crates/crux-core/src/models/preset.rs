use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::resolved_model::EdgeSign;

/// Structural stress-test operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetOp {
    AddEdge,
    RemoveEdge,
    RemoveVariable,
    ChallengeAssumption,
}

impl PresetOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddEdge => "add_edge",
            Self::RemoveEdge => "remove_edge",
            Self::RemoveVariable => "remove_variable",
            Self::ChallengeAssumption => "challenge_assumption",
        }
    }
}

/// The concrete structural edit a preset proposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ModelEdit {
    AddEdge {
        from: String,
        to: String,
        sign: EdgeSign,
    },
    RemoveEdge {
        from: String,
        to: String,
    },
    RemoveVariable {
        variable: String,
    },
    ChallengeAssumption {
        assumption: String,
    },
}

/// One ranked stress-test suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestPreset {
    pub op: PresetOp,
    /// Canonical machine description, e.g. `add_edge:smoking->cancer`.
    pub description: String,
    /// Humanized display label.
    pub label: String,
    pub rationale: String,
    pub expected_effect: String,
    pub edit: ModelEdit,
}

/// Requested generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetMode {
    /// challenge_assumption and add_edge only.
    Quick,
    /// All four operations.
    Full,
}

impl PresetMode {
    pub fn operations(&self) -> &'static [PresetOp] {
        match self {
            Self::Quick => &[PresetOp::ChallengeAssumption, PresetOp::AddEdge],
            Self::Full => &[
                PresetOp::ChallengeAssumption,
                PresetOp::AddEdge,
                PresetOp::RemoveEdge,
                PresetOp::RemoveVariable,
            ],
        }
    }
}

/// Both generation modes, each keyed by operation name in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub quick_estimate: BTreeMap<String, Vec<StressTestPreset>>,
    pub full_recompute: BTreeMap<String, Vec<StressTestPreset>>,
}
