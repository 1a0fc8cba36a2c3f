//! challenge_assumption candidates: verbatim declared assumptions, two
//! phrasings per declared confounder, or three generic fallbacks.

use std::collections::BTreeSet;

use crux_core::constants::{MAX_CHALLENGED_ASSUMPTIONS, MAX_CHALLENGED_CONFOUNDERS};
use crux_core::models::{ModelEdit, PresetOp, ResolvedModel, StressTestPreset};

use crux_resolve::normalize::normalized_statement;

use crate::templates::{self, GENERIC_CHALLENGES};

pub fn generate(model: &ResolvedModel) -> Vec<StressTestPreset> {
    let mut presets = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for assumption in model.assumptions.iter().take(MAX_CHALLENGED_ASSUMPTIONS) {
        push_unique(
            &mut presets,
            &mut seen,
            assumption.clone(),
            "the model declares this assumption; challenging it tests how much rests on it"
                .to_string(),
        );
    }

    for confounder in model.confounders.iter().take(MAX_CHALLENGED_CONFOUNDERS) {
        let phrasings = [
            format!("{confounder} control is incomplete"),
            format!("measurement error in {confounder} is underestimated"),
        ];
        for phrasing in phrasings {
            push_unique(
                &mut presets,
                &mut seen,
                phrasing,
                format!("{confounder} is a declared confounder; its handling is a standing weak point"),
            );
        }
    }

    if presets.is_empty() {
        for generic in GENERIC_CHALLENGES {
            push_unique(
                &mut presets,
                &mut seen,
                generic.to_string(),
                "no assumptions or confounders are declared; generic threats to validity apply"
                    .to_string(),
            );
        }
    }

    presets
}

fn push_unique(
    presets: &mut Vec<StressTestPreset>,
    seen: &mut BTreeSet<String>,
    assumption: String,
    rationale: String,
) {
    if !seen.insert(normalized_statement(&assumption)) {
        return;
    }
    presets.push(StressTestPreset {
        op: PresetOp::ChallengeAssumption,
        description: format!("challenge_assumption:{}", normalized_statement(&assumption)),
        label: format!("Challenge: {assumption}"),
        rationale,
        expected_effect: templates::expected_effect(PresetOp::ChallengeAssumption).to_string(),
        edit: ModelEdit::ChallengeAssumption { assumption },
    });
}
