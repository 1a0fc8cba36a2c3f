//! # crux-diff
//!
//! Diffs two resolved structural causal models into a deterministic,
//! severity-tagged disagreement report: alignment gate, edge
//! presence/sign/direction, assumption/confounder set differences, and
//! intervention probes run through a signed depth-bounded propagator.

pub mod align;
pub mod detect;
pub mod propagation;
pub mod score;
pub mod summary;
pub mod weights;

use std::sync::Arc;

use tracing::debug;

use crux_core::config::DiffConfig;
use crux_core::errors::CruxResult;
use crux_core::models::{
    AlignmentQuality, AtomKind, CompareRequest, DisagreementAtom, DisagreementReport,
    InterventionProbe, ResolvedModel, Severity,
};
use crux_core::traits::IVariableAligner;
use crux_resolve::ModelResolver;

use crate::align::AlignmentTable;
use crate::propagation::SignedGraph;
use crate::weights::AtomWeights;

/// The disagreement detector.
pub struct DiffEngine {
    config: DiffConfig,
    aligner: Arc<dyn IVariableAligner>,
}

impl DiffEngine {
    pub fn new(aligner: Arc<dyn IVariableAligner>) -> Self {
        Self::with_config(DiffConfig::default(), aligner)
    }

    pub fn with_config(config: DiffConfig, aligner: Arc<dyn IVariableAligner>) -> Self {
        Self { config, aligner }
    }

    /// Resolve both inputs, then compare. The two reads a reference-based
    /// request needs (registry, ontology) are independent of each other;
    /// everything after them is pure.
    pub fn compare_inputs(
        &self,
        resolver: &ModelResolver,
        request: &CompareRequest,
    ) -> CruxResult<DisagreementReport> {
        let left = resolver.resolve(&request.left)?;
        let right = resolver.resolve(&request.right)?;
        self.compare(&left, &right, &request.interventions)
    }

    /// Compare two resolved models. Identical inputs always yield identical
    /// atom ordering and numeric outputs: every detector iterates over
    /// canonically sorted keys, and atoms are emitted in a fixed phase order
    /// (alignment gate, edge presence, edge sign, edge direction,
    /// assumptions, confounders, interventions).
    pub fn compare(
        &self,
        left: &ResolvedModel,
        right: &ResolvedModel,
        probes: &[InterventionProbe],
    ) -> CruxResult<DisagreementReport> {
        let cross_domain = !left.domain.eq_ignore_ascii_case(&right.domain);
        let table = AlignmentTable::build(self.aligner.as_ref(), left, right)?;
        let threshold = self.config.coverage_threshold(cross_domain);
        let weights = AtomWeights::new(
            &self.config.mixing,
            left.evidence_weight,
            right.evidence_weight,
        );

        let mut atoms: Vec<DisagreementAtom> = Vec::new();
        if table.coverage < threshold {
            atoms.push(alignment_gate_atom(&table, threshold, &weights));
        }

        let left_edges = table.rewrite_edges(&left.edges);
        let right_edges = table.rewrite_edges(&right.edges);

        atoms.extend(detect::edges::presence(&left_edges, &right_edges, &weights));
        atoms.extend(detect::edges::sign(&left_edges, &right_edges, &weights));
        atoms.extend(detect::edges::direction(
            &left_edges,
            &right_edges,
            &weights,
        ));
        atoms.extend(detect::statements::assumptions(
            &left.assumptions,
            &right.assumptions,
            &weights,
        ));
        atoms.extend(detect::statements::confounders(
            &left.confounders,
            &right.confounders,
            &weights,
        ));
        atoms.extend(detect::interventions::probe_all(
            &SignedGraph::from_edges(&left_edges),
            &SignedGraph::from_edges(&right_edges),
            probes,
            &table,
            &self.config,
            &weights,
        ));

        let score = score::aggregate(&atoms, &self.config.severity_weights);
        let summary = summary::render(&atoms, table.coverage);
        debug!(
            left = %left.key,
            right = %right.key,
            atoms = atoms.len(),
            score,
            "comparison complete"
        );

        Ok(DisagreementReport {
            score,
            summary,
            atoms,
            alignment: AlignmentQuality {
                coverage: table.coverage,
                threshold,
                unknown_variables: table.unknown.clone(),
                cross_domain,
            },
        })
    }
}

/// Insufficient alignment is reported in-band so callers always receive a
/// complete report, even under poor coverage.
fn alignment_gate_atom(
    table: &AlignmentTable,
    threshold: f64,
    weights: &AtomWeights<'_>,
) -> DisagreementAtom {
    DisagreementAtom {
        kind: AtomKind::Assumption,
        severity: Severity::High,
        left_value: format!("coverage {:.2}", table.coverage),
        right_value: format!("threshold {threshold:.2}"),
        edge: None,
        variable: None,
        reason: format!(
            "variable alignment covers {:.0}% of names, below the {:.0}% threshold; \
             structural comparison proceeds with reduced confidence",
            table.coverage * 100.0,
            threshold * 100.0
        ),
        weight: weights.for_kind(AtomKind::Assumption),
    }
}
