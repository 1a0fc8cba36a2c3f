//! remove_edge candidates: existing edges ranked by how load-bearing
//! they look for the inferred outcome.

use crux_core::constants::MAX_PRESET_CANDIDATES;
use crux_core::models::{CausalEdge, ModelEdit, PresetOp, ResolvedModel, StressTestPreset};

use crate::label::humanize;
use crate::outcome::is_declared_confounder;
use crate::templates;

pub fn generate(model: &ResolvedModel, outcome: &str) -> Vec<StressTestPreset> {
    if model.edges.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&CausalEdge> = model.edges.iter().collect();
    // Edges into the outcome first, then confounder-driven edges, then
    // lexical by edge key.
    ranked.sort_by(|a, b| {
        let a_outcome = a.to == outcome;
        let b_outcome = b.to == outcome;
        let a_conf = is_declared_confounder(model, &a.from);
        let b_conf = is_declared_confounder(model, &b.from);
        b_outcome
            .cmp(&a_outcome)
            .then_with(|| b_conf.cmp(&a_conf))
            .then_with(|| a.key().cmp(&b.key()))
    });

    ranked
        .into_iter()
        .take(MAX_PRESET_CANDIDATES)
        .map(|edge| preset(model, edge, outcome))
        .collect()
}

fn preset(model: &ResolvedModel, edge: &CausalEdge, outcome: &str) -> StressTestPreset {
    let rationale = if edge.to == outcome {
        format!(
            "{key} feeds the outcome directly; removing it tests whether {outcome} still responds through other paths",
            key = edge.key()
        )
    } else if is_declared_confounder(model, &edge.from) {
        format!(
            "{key} originates at a declared confounder; removing it drops a confounder-driven pathway",
            key = edge.key()
        )
    } else {
        format!(
            "removing {key} tests whether this pathway is necessary for the model's conclusions",
            key = edge.key()
        )
    };

    StressTestPreset {
        op: PresetOp::RemoveEdge,
        description: format!("remove_edge:{}", edge.key()),
        label: format!(
            "Remove edge {} → {}",
            humanize(model.display_of(&edge.from)),
            humanize(model.display_of(&edge.to))
        ),
        rationale,
        expected_effect: templates::expected_effect(PresetOp::RemoveEdge).to_string(),
        edit: ModelEdit::RemoveEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
        },
    }
}
