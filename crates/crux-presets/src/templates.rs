//! Fixed expected-effect and rationale text per operation and per
//! add_edge category.

use crux_core::models::PresetOp;

/// Expected-effect string per operation. add_edge categories may override.
pub fn expected_effect(op: PresetOp) -> &'static str {
    match op {
        PresetOp::AddEdge => {
            "Aggregate disagreement shifts if the new pathway changes propagated intervention effects."
        }
        PresetOp::RemoveEdge => {
            "Downstream intervention effects weaken or vanish along the removed pathway."
        }
        PresetOp::RemoveVariable => {
            "Paths through the removed variable disappear; effects re-route or collapse."
        }
        PresetOp::ChallengeAssumption => {
            "Conclusions that lean on the challenged assumption lose support."
        }
    }
}

/// How an add_edge candidate was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEdgeCategory {
    ConfounderToOutcome,
    TreatmentToOutcome,
    HighOutdegreeToOutcome,
    StructuralGap,
}

impl AddEdgeCategory {
    pub fn rationale(&self, from: &str, to: &str) -> String {
        match self {
            Self::ConfounderToOutcome => format!(
                "{from} is a declared confounder with no direct path to {to}; a backdoor edge would bias the estimated effect"
            ),
            Self::TreatmentToOutcome => format!(
                "{from} looks treatment-like; a direct edge to {to} tests whether the effect is fully mediated"
            ),
            Self::HighOutdegreeToOutcome => format!(
                "{from} already drives several variables; a direct edge to {to} probes an unmodeled direct influence"
            ),
            Self::StructuralGap => format!(
                "no edge connects {from} to {to}; adding one stress-tests the claimed independence"
            ),
        }
    }

    /// Category-specific override of the operation-level expected effect.
    pub fn expected_effect(&self) -> &'static str {
        match self {
            Self::ConfounderToOutcome => {
                "The outcome effect estimate shifts once the backdoor path is open."
            }
            Self::TreatmentToOutcome => {
                "A surviving direct effect indicates incomplete mediation."
            }
            Self::HighOutdegreeToOutcome => {
                "Outcome sensitivity to the hub variable increases."
            }
            Self::StructuralGap => expected_effect(PresetOp::AddEdge),
        }
    }
}

/// The three domain-agnostic fallbacks when a model declares no assumptions
/// or confounders to challenge.
pub const GENERIC_CHALLENGES: [&str; 3] = [
    "Unmeasured confounding biases the estimated effect",
    "Selection into the modeled population is non-random",
    "Measurement error in the outcome is underestimated",
];
