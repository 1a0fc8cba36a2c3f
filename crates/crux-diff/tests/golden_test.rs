//! Golden comparison scenarios: fixture model pairs with pinned atom
//! sequences.

use std::sync::Arc;

use crux_core::models::ResolvedModel;
use crux_diff::align::PassthroughAligner;
use crux_diff::DiffEngine;
use crux_resolve::resolver::resolve_spec;
use test_fixtures::comparison_scenarios;

fn resolve(spec: &crux_core::models::ModelSpec) -> ResolvedModel {
    resolve_spec(spec, None, None)
}

#[test]
fn golden_scenarios_match_expected_atom_sequences() {
    let engine = DiffEngine::new(Arc::new(PassthroughAligner));

    for scenario in comparison_scenarios() {
        let left = resolve(&scenario.left);
        let right = resolve(&scenario.right);
        let report = engine
            .compare(&left, &right, &scenario.interventions)
            .unwrap_or_else(|e| panic!("scenario {}: {e}", scenario.name));

        let kinds: Vec<&str> = report.atoms.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(
            kinds, scenario.expected.atom_kinds,
            "scenario {}: atom kinds",
            scenario.name
        );

        let severities: Vec<&str> = report.atoms.iter().map(|a| a.severity.as_str()).collect();
        assert_eq!(
            severities, scenario.expected.severities,
            "scenario {}: severities",
            scenario.name
        );

        assert_eq!(
            report.score > 0.0,
            scenario.expected.score_above_zero,
            "scenario {}: score sign",
            scenario.name
        );
        assert!(report.score <= 1.0, "scenario {}: score bound", scenario.name);
    }
}

#[test]
fn golden_scenarios_are_reproducible() {
    let engine = DiffEngine::new(Arc::new(PassthroughAligner));

    for scenario in comparison_scenarios() {
        let left = resolve(&scenario.left);
        let right = resolve(&scenario.right);

        let first = engine
            .compare(&left, &right, &scenario.interventions)
            .unwrap();
        let second = engine
            .compare(&left, &right, &scenario.interventions)
            .unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "scenario {}: byte-identical reports",
            scenario.name
        );
    }
}
