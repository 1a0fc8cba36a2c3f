//! Intervention and counterfactual disagreements via the signed propagator.

use crux_core::config::DiffConfig;
use crux_core::models::{AtomKind, DisagreementAtom, InterventionProbe, Severity};
use crux_resolve::normalize::canonical_key;

use crate::align::AlignmentTable;
use crate::propagation::SignedGraph;
use crate::weights::AtomWeights;

/// Run every requested probe on both models and turn diverging effects into
/// intervention (and, for large gaps, counterfactual) atoms.
pub fn probe_all(
    left: &SignedGraph,
    right: &SignedGraph,
    probes: &[InterventionProbe],
    table: &AlignmentTable,
    config: &DiffConfig,
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    // Canonicalize and sort probes so atom order is input-order independent.
    let mut canonical: Vec<(String, String)> = probes
        .iter()
        .map(|p| {
            (
                table.canonical(&canonical_key(&p.variable)),
                table.canonical(&canonical_key(&p.outcome)),
            )
        })
        .collect();
    canonical.sort();
    canonical.dedup();

    let mut atoms = Vec::new();
    for (variable, outcome) in canonical {
        let effect_left = left.intervention_effect(&variable, &outcome, config.max_depth);
        let effect_right = right.intervention_effect(&variable, &outcome, config.max_depth);
        let delta = (effect_left - effect_right).abs();
        if delta <= config.intervention_delta_min {
            continue;
        }

        let severity = if delta > config.intervention_delta_high {
            Severity::High
        } else {
            Severity::Medium
        };

        atoms.push(DisagreementAtom {
            kind: AtomKind::Intervention,
            severity,
            left_value: format!("effect {effect_left:+.3}"),
            right_value: format!("effect {effect_right:+.3}"),
            edge: None,
            variable: Some(variable.clone()),
            reason: format!(
                "intervening on {variable} yields diverging effects on {outcome} (delta {delta:.3})"
            ),
            weight: weights.for_kind(AtomKind::Intervention),
        });

        // Large gaps also illustrate necessity: one model predicts the
        // outcome moves without the intervention, the other does not.
        if delta >= config.counterfactual_delta_min {
            atoms.push(DisagreementAtom {
                kind: AtomKind::Counterfactual,
                severity,
                left_value: format!("effect {effect_left:+.3}"),
                right_value: format!("effect {effect_right:+.3}"),
                edge: None,
                variable: Some(variable.clone()),
                reason: format!(
                    "had {variable} not been intervened on, the models disagree by {delta:.3} \
                     on whether {outcome} would still shift"
                ),
                weight: weights.for_kind(AtomKind::Counterfactual),
            });
        }
    }
    atoms
}
