//! remove_variable candidates: confounders first, then mediators, then
//! everything else.

use crux_core::constants::MAX_PRESET_CANDIDATES;
use crux_core::models::{ModelEdit, PresetOp, ResolvedModel, StressTestPreset};

use crate::label::humanize;
use crate::outcome::is_declared_confounder;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum VariableRole {
    Confounder,
    Mediator,
    Other,
}

pub fn generate(model: &ResolvedModel, outcome: &str) -> Vec<StressTestPreset> {
    if model.variables.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(VariableRole, &str)> = model
        .variables
        .iter()
        .map(|v| (classify(model, &v.key, outcome), v.key.as_str()))
        .collect();
    // Role rank first; within a role, variables keep canonical order. The
    // key is included so the order is total regardless of input order.
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    ranked
        .into_iter()
        .take(MAX_PRESET_CANDIDATES)
        .map(|(role, key)| preset(model, role, key))
        .collect()
}

fn classify(model: &ResolvedModel, key: &str, outcome: &str) -> VariableRole {
    if is_declared_confounder(model, key) {
        return VariableRole::Confounder;
    }
    if key != outcome && model.in_degree(key) > 0 && model.out_degree(key) > 0 {
        return VariableRole::Mediator;
    }
    VariableRole::Other
}

fn preset(model: &ResolvedModel, role: VariableRole, key: &str) -> StressTestPreset {
    let display = humanize(model.display_of(key));
    let rationale = match role {
        VariableRole::Confounder => format!(
            "{display} is a declared confounder; removing it tests sensitivity to confounder control"
        ),
        VariableRole::Mediator => format!(
            "{display} mediates at least one pathway; removing it tests whether the effect is direct"
        ),
        VariableRole::Other => {
            format!("removing {display} tests the model's dependence on this variable")
        }
    };

    StressTestPreset {
        op: PresetOp::RemoveVariable,
        description: format!("remove_variable:{key}"),
        label: format!("Remove variable {display}"),
        rationale,
        expected_effect: templates::expected_effect(PresetOp::RemoveVariable).to_string(),
        edit: ModelEdit::RemoveVariable {
            variable: key.to_string(),
        },
    }
}
