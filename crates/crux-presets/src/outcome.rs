//! Outcome inference and variable-role heuristics.

use crux_core::models::ResolvedModel;
use crux_resolve::normalize::canonical_key;

/// Words that mark a variable as the model's outcome.
pub const OUTCOME_VOCABULARY: [&str; 5] = ["performance", "outcome", "failure", "risk", "harm"];

/// Words that mark a variable as treatment-like.
pub const TREATMENT_VOCABULARY: [&str; 7] = [
    "treat",
    "intervention",
    "policy",
    "action",
    "dose",
    "control",
    "input",
];

/// Infer the model's outcome variable: the first node (canonical order)
/// whose key or display name contains an outcome word; else the lexically
/// last node; else the literal `Outcome`.
pub fn infer_outcome(model: &ResolvedModel) -> String {
    for variable in &model.variables {
        let display = variable.display.to_lowercase();
        if OUTCOME_VOCABULARY
            .iter()
            .any(|w| variable.key.contains(w) || display.contains(w))
        {
            return variable.key.clone();
        }
    }
    model
        .variables
        .last()
        .map(|v| v.key.clone())
        .unwrap_or_else(|| "Outcome".to_string())
}

/// Substring match against the treatment vocabulary.
pub fn is_treatment_like(model: &ResolvedModel, key: &str) -> bool {
    let display = model.display_of(key).to_lowercase();
    TREATMENT_VOCABULARY
        .iter()
        .any(|w| key.contains(w) || display.contains(w))
}

/// Whether a variable key matches one of the model's declared confounders.
pub fn is_declared_confounder(model: &ResolvedModel, key: &str) -> bool {
    model
        .confounders
        .iter()
        .any(|c| canonical_key(c) == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crux_core::models::Variable;

    fn model_with_nodes(keys: &[&str]) -> ResolvedModel {
        ResolvedModel {
            key: "m".to_string(),
            domain: "general".to_string(),
            version: "0".to_string(),
            variables: keys
                .iter()
                .map(|k| Variable {
                    key: k.to_string(),
                    display: k.to_string(),
                })
                .collect(),
            edges: Vec::new(),
            assumptions: Vec::new(),
            confounders: Vec::new(),
            evidence_weight: 0.55,
        }
    }

    #[test]
    fn outcome_word_wins_over_position() {
        let model = model_with_nodes(&["alpha", "crash_risk", "zeta"]);
        assert_eq!(infer_outcome(&model), "crash_risk");
    }

    #[test]
    fn lexically_last_node_is_the_fallback() {
        let model = model_with_nodes(&["alpha", "beta", "gamma"]);
        assert_eq!(infer_outcome(&model), "gamma");
    }

    #[test]
    fn empty_model_falls_back_to_literal() {
        let model = model_with_nodes(&[]);
        assert_eq!(infer_outcome(&model), "Outcome");
    }
}
