use serde::{Deserialize, Serialize};

use crate::constants::MAX_PROPAGATION_DEPTH;
use crate::models::AtomKind;

use super::defaults;

/// Per-severity multipliers folded into the aggregate score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            high: defaults::DEFAULT_SEVERITY_WEIGHT_HIGH,
            medium: defaults::DEFAULT_SEVERITY_WEIGHT_MEDIUM,
            low: defaults::DEFAULT_SEVERITY_WEIGHT_LOW,
        }
    }
}

/// Coefficient triple applied to the combined evidence weight of both models
/// to produce an atom's epistemic-weight triple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpistemicMixing {
    pub data: f64,
    pub mechanism: f64,
    pub assumption: f64,
}

/// Type-specific mixing coefficients, all heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingTable {
    pub assumption: EpistemicMixing,
    pub confounder: EpistemicMixing,
    /// Shared by edge_presence, edge_sign and edge_direction atoms.
    pub edge: EpistemicMixing,
    pub intervention: EpistemicMixing,
    pub counterfactual: EpistemicMixing,
}

impl MixingTable {
    pub fn for_kind(&self, kind: AtomKind) -> EpistemicMixing {
        match kind {
            AtomKind::Assumption => self.assumption,
            AtomKind::Confounder => self.confounder,
            AtomKind::EdgePresence | AtomKind::EdgeSign | AtomKind::EdgeDirection => self.edge,
            AtomKind::Intervention => self.intervention,
            AtomKind::Counterfactual => self.counterfactual,
        }
    }
}

impl Default for MixingTable {
    fn default() -> Self {
        Self {
            assumption: EpistemicMixing {
                data: 0.35,
                mechanism: 0.45,
                assumption: 0.8,
            },
            confounder: EpistemicMixing {
                data: 0.4,
                mechanism: 0.5,
                assumption: 0.8,
            },
            edge: EpistemicMixing {
                data: 0.5,
                mechanism: 0.82,
                assumption: 0.35,
            },
            intervention: EpistemicMixing {
                data: 0.75,
                mechanism: 0.6,
                assumption: 0.3,
            },
            counterfactual: EpistemicMixing {
                data: 0.7,
                mechanism: 0.55,
                assumption: 0.35,
            },
        }
    }
}

/// Disagreement-detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Coverage threshold when both models share a domain.
    pub same_domain_coverage: f64,
    /// Coverage threshold when domains differ.
    pub cross_domain_coverage: f64,
    /// Minimum effect delta to report an intervention disagreement.
    pub intervention_delta_min: f64,
    /// Delta above which the intervention atom is high severity.
    pub intervention_delta_high: f64,
    /// Delta at or above which a counterfactual atom is also emitted.
    pub counterfactual_delta_min: f64,
    /// Propagation depth cap.
    pub max_depth: usize,
    pub severity_weights: SeverityWeights,
    pub mixing: MixingTable,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            same_domain_coverage: defaults::DEFAULT_SAME_DOMAIN_COVERAGE,
            cross_domain_coverage: defaults::DEFAULT_CROSS_DOMAIN_COVERAGE,
            intervention_delta_min: defaults::DEFAULT_INTERVENTION_DELTA_MIN,
            intervention_delta_high: defaults::DEFAULT_INTERVENTION_DELTA_HIGH,
            counterfactual_delta_min: defaults::DEFAULT_COUNTERFACTUAL_DELTA_MIN,
            max_depth: MAX_PROPAGATION_DEPTH,
            severity_weights: SeverityWeights::default(),
            mixing: MixingTable::default(),
        }
    }
}

impl DiffConfig {
    /// Coverage threshold for a comparison.
    pub fn coverage_threshold(&self, cross_domain: bool) -> f64 {
        if cross_domain {
            self.cross_domain_coverage
        } else {
            self.same_domain_coverage
        }
    }
}
