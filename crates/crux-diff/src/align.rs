//! Canonical-name lookup built from the ontology collaborator.

use std::collections::BTreeMap;

use crux_core::errors::CruxResult;
use crux_core::models::{AlignedName, AlignmentOutcome, CausalEdge, ResolvedModel};
use crux_core::traits::IVariableAligner;
use crux_resolve::normalize::canonical_key;

/// Identity aligner: every name maps to itself with full coverage. The
/// fallback when no ontology collaborator is wired in.
pub struct PassthroughAligner;

impl IVariableAligner for PassthroughAligner {
    fn align(&self, names: &[String]) -> CruxResult<AlignmentOutcome> {
        Ok(AlignmentOutcome {
            aligned: names
                .iter()
                .map(|n| AlignedName {
                    input: n.clone(),
                    canonical: n.clone(),
                    matched_by: "identity".to_string(),
                })
                .collect(),
            unknown: Vec::new(),
        })
    }
}

/// Lookup table mapping raw variable keys from both models to canonical
/// ontology terms, plus the achieved coverage.
pub struct AlignmentTable {
    map: BTreeMap<String, String>,
    /// Matched / total aligned inputs; 1.0 for empty input.
    pub coverage: f64,
    /// Inputs the ontology could not map, sorted.
    pub unknown: Vec<String>,
}

impl AlignmentTable {
    /// Align the union of variable names from both models in one call.
    pub fn build(
        aligner: &dyn IVariableAligner,
        left: &ResolvedModel,
        right: &ResolvedModel,
    ) -> CruxResult<Self> {
        let mut names = left.alignment_inputs();
        names.extend(right.alignment_inputs());
        names.sort();
        names.dedup();

        if names.is_empty() {
            return Ok(Self {
                map: BTreeMap::new(),
                coverage: 1.0,
                unknown: Vec::new(),
            });
        }

        let outcome = aligner.align(&names)?;
        let mut map = BTreeMap::new();
        for aligned in &outcome.aligned {
            // Ontology terms go through the same key normalization as raw
            // input so rewritten edges stay comparable.
            map.insert(aligned.input.clone(), canonical_key(&aligned.canonical));
        }

        let mut unknown = outcome.unknown;
        unknown.sort();
        unknown.dedup();

        let coverage = map.len() as f64 / names.len() as f64;
        Ok(Self {
            map,
            coverage,
            unknown,
        })
    }

    /// Canonical term for a raw key; unknown names keep their own key so
    /// downstream detectors still see the full structure.
    pub fn canonical(&self, key: &str) -> String {
        self.map
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Rewrite edge endpoints through the lookup, then restore canonical
    /// order and drop duplicates that alignment collapsed together.
    pub fn rewrite_edges(&self, edges: &[CausalEdge]) -> Vec<CausalEdge> {
        let mut rewritten: Vec<CausalEdge> = edges
            .iter()
            .map(|e| CausalEdge {
                from: self.canonical(&e.from),
                to: self.canonical(&e.to),
                sign: e.sign,
            })
            .filter(|e| e.from != e.to)
            .collect();
        rewritten.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        rewritten.dedup_by(|a, b| a.from == b.from && a.to == b.to);
        rewritten
    }
}
