//! Epistemic-weight derivation: per-kind mixing over the combined
//! evidence weight of both models.

use crux_core::config::MixingTable;
use crux_core::models::{AtomKind, EpistemicWeight};

/// Computes atom weight triples for one comparison.
pub struct AtomWeights<'a> {
    mixing: &'a MixingTable,
    /// Mean of the two models' evidence-weight scalars.
    combined: f64,
}

impl<'a> AtomWeights<'a> {
    pub fn new(mixing: &'a MixingTable, left_evidence: f64, right_evidence: f64) -> Self {
        Self {
            mixing,
            combined: (left_evidence + right_evidence) / 2.0,
        }
    }

    pub fn for_kind(&self, kind: AtomKind) -> EpistemicWeight {
        let m = self.mixing.for_kind(kind);
        EpistemicWeight {
            data_grounded: (m.data * self.combined).clamp(0.0, 1.0),
            mechanism_grounded: (m.mechanism * self.combined).clamp(0.0, 1.0),
            assumption_grounded: (m.assumption * self.combined).clamp(0.0, 1.0),
        }
    }
}
