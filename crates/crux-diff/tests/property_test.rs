//! Property tests: score bounds, determinism, and atom/score coupling over
//! arbitrary model pairs.

use std::sync::Arc;

use proptest::prelude::*;

use crux_core::models::{CausalEdge, EdgeSign, ResolvedModel, Variable};
use crux_diff::align::PassthroughAligner;
use crux_diff::DiffEngine;

const NAMES: [&str; 6] = ["a", "b", "c", "d", "outcome", "risk"];

fn arb_edge() -> impl Strategy<Value = CausalEdge> {
    (0..NAMES.len(), 0..NAMES.len(), any::<bool>()).prop_filter_map(
        "self-loops are not valid edges",
        |(f, t, positive)| {
            (f != t).then(|| CausalEdge {
                from: NAMES[f].to_string(),
                to: NAMES[t].to_string(),
                sign: if positive {
                    EdgeSign::Positive
                } else {
                    EdgeSign::Negative
                },
            })
        },
    )
}

fn arb_model(key: &'static str) -> impl Strategy<Value = ResolvedModel> {
    (
        proptest::collection::vec(arb_edge(), 0..8),
        proptest::sample::subsequence(
            vec!["income", "age", "region", "season"],
            0..4,
        ),
        0.05_f64..=1.0,
    )
        .prop_map(move |(mut edges, confounders, evidence_weight)| {
            edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
            edges.dedup_by(|a, b| a.from == b.from && a.to == b.to);
            let mut confounders: Vec<String> =
                confounders.into_iter().map(String::from).collect();
            confounders.sort();
            ResolvedModel {
                key: key.to_string(),
                domain: "general".to_string(),
                version: "0".to_string(),
                variables: NAMES
                    .iter()
                    .map(|n| Variable {
                        key: n.to_string(),
                        display: n.to_string(),
                    })
                    .collect(),
                edges,
                assumptions: Vec::new(),
                confounders,
                evidence_weight,
            }
        })
}

proptest! {
    #[test]
    fn score_is_bounded_and_zero_iff_no_atoms(
        left in arb_model("left"),
        right in arb_model("right"),
    ) {
        let engine = DiffEngine::new(Arc::new(PassthroughAligner));
        let report = engine.compare(&left, &right, &[]).unwrap();

        prop_assert!((0.0..=1.0).contains(&report.score));
        prop_assert_eq!(report.atoms.is_empty(), report.score == 0.0);
    }

    #[test]
    fn compare_is_deterministic(
        left in arb_model("left"),
        right in arb_model("right"),
    ) {
        let engine = DiffEngine::new(Arc::new(PassthroughAligner));
        let first = engine.compare(&left, &right, &[]).unwrap();
        let second = engine.compare(&left, &right, &[]).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn swapping_models_never_changes_atom_kinds(
        left in arb_model("left"),
        right in arb_model("right"),
    ) {
        let engine = DiffEngine::new(Arc::new(PassthroughAligner));
        let forward = engine.compare(&left, &right, &[]).unwrap();
        let backward = engine.compare(&right, &left, &[]).unwrap();

        let fk: Vec<_> = forward.atoms.iter().map(|a| (a.kind, a.severity)).collect();
        let bk: Vec<_> = backward.atoms.iter().map(|a| (a.kind, a.severity)).collect();
        prop_assert_eq!(fk, bk);
    }
}
