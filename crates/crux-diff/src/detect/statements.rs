//! Assumption and confounder set differences, symmetric and
//! case/punctuation-normalized.

use std::collections::{BTreeMap, BTreeSet};

use crux_core::models::{AtomKind, DisagreementAtom, Severity};
use crux_resolve::normalize::{canonical_key, normalized_statement};

use crate::weights::AtomWeights;

/// One-sided assumptions are medium severity.
pub fn assumptions(
    left: &[String],
    right: &[String],
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    diff(
        left,
        right,
        AtomKind::Assumption,
        Severity::Medium,
        "assumption stated in only one model",
        weights,
    )
}

/// One-sided confounders are high severity: a missing confounder undermines
/// every downstream claim of the model that lacks it.
pub fn confounders(
    left: &[String],
    right: &[String],
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    diff(
        left,
        right,
        AtomKind::Confounder,
        Severity::High,
        "confounder declared in only one model",
        weights,
    )
}

fn diff(
    left: &[String],
    right: &[String],
    kind: AtomKind,
    severity: Severity,
    reason: &str,
    weights: &AtomWeights<'_>,
) -> Vec<DisagreementAtom> {
    let left_map = by_norm(left);
    let right_map = by_norm(right);
    let union: BTreeSet<&String> = left_map.keys().chain(right_map.keys()).collect();

    let mut atoms = Vec::new();
    for norm in union {
        let (l, r) = (left_map.get(norm), right_map.get(norm));
        let verbatim = match (l, r) {
            (Some(v), None) | (None, Some(v)) => v,
            _ => continue,
        };
        atoms.push(DisagreementAtom {
            kind,
            severity,
            left_value: l
                .map(|v| v.to_string())
                .unwrap_or_else(|| "absent".to_string()),
            right_value: r
                .map(|v| v.to_string())
                .unwrap_or_else(|| "absent".to_string()),
            edge: None,
            variable: (kind == AtomKind::Confounder).then(|| canonical_key(verbatim)),
            reason: reason.to_string(),
            weight: weights.for_kind(kind),
        });
    }
    atoms
}

fn by_norm(statements: &[String]) -> BTreeMap<String, &str> {
    statements
        .iter()
        .map(|s| (normalized_statement(s), s.as_str()))
        .collect()
}
