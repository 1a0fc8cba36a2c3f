//! Edge presence, sign and direction disagreements over canonicalized edges.

use std::collections::{BTreeMap, BTreeSet};

use crux_core::models::{AtomKind, CausalEdge, DisagreementAtom, Severity};

use crate::weights::AtomWeights;

/// An edge present in exactly one model is a high-severity disagreement.
pub fn presence(
    left: &[CausalEdge],
    right: &[CausalEdge],
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    let left_map = by_key(left);
    let right_map = by_key(right);

    let union: BTreeSet<&String> = left_map.keys().chain(right_map.keys()).collect();
    let mut atoms = Vec::new();
    for key in union {
        let (l, r) = (left_map.get(key), right_map.get(key));
        let present = match (l, r) {
            (Some(e), None) | (None, Some(e)) => e,
            _ => continue,
        };
        atoms.push(DisagreementAtom {
            kind: AtomKind::EdgePresence,
            severity: Severity::High,
            left_value: l
                .map(|e| edge_value(e))
                .unwrap_or_else(|| "absent".to_string()),
            right_value: r
                .map(|e| edge_value(e))
                .unwrap_or_else(|| "absent".to_string()),
            edge: Some(present.key()),
            variable: None,
            reason: format!("edge {} is present in exactly one model", present.key()),
            weight: weights.for_kind(AtomKind::EdgePresence),
        });
    }
    atoms
}

/// Edges present in both models with identical direction but differing sign.
pub fn sign(
    left: &[CausalEdge],
    right: &[CausalEdge],
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    let right_map = by_key(right);

    let mut atoms = Vec::new();
    for edge in left {
        let Some(other) = right_map.get(&edge.key()) else {
            continue;
        };
        if edge.sign == other.sign {
            continue;
        }
        atoms.push(DisagreementAtom {
            kind: AtomKind::EdgeSign,
            severity: Severity::Medium,
            left_value: edge_value(edge),
            right_value: edge_value(other),
            edge: Some(edge.key()),
            variable: None,
            reason: format!("edge {} carries opposite signs", edge.key()),
            weight: weights.for_kind(AtomKind::EdgeSign),
        });
    }
    atoms
}

/// Direct reversal: the same unordered pair is an edge in both models but
/// pointed opposite ways. Longer directional-reversal cycles are out of
/// scope by design; broadening this check changes reported atom counts.
pub fn direction(
    left: &[CausalEdge],
    right: &[CausalEdge],
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    let left_map = by_key(left);
    let right_map = by_key(right);

    // Keyed by unordered pair so the emitted order is identical regardless
    // of which model is on the left.
    let mut atoms: BTreeMap<String, DisagreementAtom> = BTreeMap::new();
    for edge in left {
        if atoms.contains_key(&edge.pair_key()) {
            continue;
        }
        let reversed = format!("{}->{}", edge.to, edge.from);
        // A clean reversal only: neither model may hold both directions.
        if right_map.contains_key(&reversed)
            && !right_map.contains_key(&edge.key())
            && !left_map.contains_key(&reversed)
        {
            let (a, b) = if edge.from <= edge.to {
                (&edge.from, &edge.to)
            } else {
                (&edge.to, &edge.from)
            };
            atoms.insert(
                edge.pair_key(),
                DisagreementAtom {
                    kind: AtomKind::EdgeDirection,
                    severity: Severity::High,
                    left_value: edge.key(),
                    right_value: reversed,
                    edge: Some(edge.pair_key()),
                    variable: None,
                    reason: format!("models disagree on causal direction between {a} and {b}"),
                    weight: weights.for_kind(AtomKind::EdgeDirection),
                },
            );
        }
    }
    atoms.into_values().collect()
}

fn by_key(edges: &[CausalEdge]) -> BTreeMap<String, &CausalEdge> {
    edges.iter().map(|e| (e.key(), e)).collect()
}

fn edge_value(edge: &CausalEdge) -> String {
    format!("{} ({})", edge.key(), edge.sign.symbol())
}
