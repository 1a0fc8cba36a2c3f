//! add_edge candidates: every non-existing ordered pair, scored and capped.

use crux_core::constants::MAX_PRESET_CANDIDATES;
use crux_core::models::{EdgeSign, ModelEdit, PresetOp, ResolvedModel, StressTestPreset};

use crate::label::humanize;
use crate::outcome::{is_declared_confounder, is_treatment_like};
use crate::templates::AddEdgeCategory;

/// Candidate scoring bonuses.
const OUTCOME_TARGET_BONUS: usize = 50;
const CONFOUNDER_SOURCE_BONUS: usize = 30;
const TREATMENT_SOURCE_BONUS: usize = 20;
const OUT_DEGREE_BONUS_CAP: usize = 10;

/// Out-degree at which a source counts as a hub for classification.
const HIGH_OUT_DEGREE_MIN: usize = 2;

pub fn generate(model: &ResolvedModel, outcome: &str) -> Vec<StressTestPreset> {
    if model.variables.len() < 2 {
        return Vec::new();
    }

    // Score every non-existing ordered pair. Variables are canonically
    // sorted, so candidate enumeration order is already deterministic.
    let mut candidates: Vec<(usize, String, String)> = Vec::new();
    for from in &model.variables {
        for to in &model.variables {
            if from.key == to.key || model.has_edge(&from.key, &to.key) {
                continue;
            }
            let mut score = 0;
            if to.key == outcome {
                score += OUTCOME_TARGET_BONUS;
            }
            if is_declared_confounder(model, &from.key) {
                score += CONFOUNDER_SOURCE_BONUS;
            }
            if is_treatment_like(model, &from.key) {
                score += TREATMENT_SOURCE_BONUS;
            }
            score += model.out_degree(&from.key).min(OUT_DEGREE_BONUS_CAP);
            candidates.push((score, from.key.clone(), to.key.clone()));
        }
    }

    if candidates.is_empty() {
        // Complete graph: fall back to the first two distinct nodes.
        let from = model.variables[0].key.clone();
        let to = model.variables[1].key.clone();
        return vec![preset(model, from, to, AddEdgeCategory::StructuralGap)];
    }

    // Highest score first; ties break lexically by edge key.
    candidates.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| format!("{}->{}", a.1, a.2).cmp(&format!("{}->{}", b.1, b.2)))
    });

    candidates
        .into_iter()
        .take(MAX_PRESET_CANDIDATES)
        .map(|(_, from, to)| {
            let category = classify(model, &from, &to, outcome);
            preset(model, from, to, category)
        })
        .collect()
}

fn classify(model: &ResolvedModel, from: &str, to: &str, outcome: &str) -> AddEdgeCategory {
    if to == outcome {
        if is_declared_confounder(model, from) {
            return AddEdgeCategory::ConfounderToOutcome;
        }
        if is_treatment_like(model, from) {
            return AddEdgeCategory::TreatmentToOutcome;
        }
        if model.out_degree(from) >= HIGH_OUT_DEGREE_MIN {
            return AddEdgeCategory::HighOutdegreeToOutcome;
        }
    }
    AddEdgeCategory::StructuralGap
}

fn preset(
    model: &ResolvedModel,
    from: String,
    to: String,
    category: AddEdgeCategory,
) -> StressTestPreset {
    StressTestPreset {
        op: PresetOp::AddEdge,
        description: format!("add_edge:{from}->{to}"),
        label: format!(
            "Add edge {} → {}",
            humanize(model.display_of(&from)),
            humanize(model.display_of(&to))
        ),
        rationale: category.rationale(&from, &to),
        expected_effect: category.expected_effect().to_string(),
        edit: ModelEdit::AddEdge {
            from,
            to,
            sign: EdgeSign::Positive,
        },
    }
}
