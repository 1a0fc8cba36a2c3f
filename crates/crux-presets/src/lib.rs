//! # crux-presets
//!
//! Proposes ranked structural edits for a single resolved model: add or
//! remove an edge, remove a variable, or challenge an assumption. Candidate
//! lists are capped and deterministically ordered; degenerate graphs
//! short-circuit to empty lists rather than erroring.

pub mod label;
pub mod ops;
pub mod outcome;
pub mod templates;

use std::collections::BTreeMap;

use tracing::debug;

use crux_core::models::{PresetCatalog, PresetMode, PresetOp, ResolvedModel, StressTestPreset};

/// The stress-test preset generator.
#[derive(Debug, Default)]
pub struct PresetEngine;

impl PresetEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate presets for one mode, keyed by operation name.
    pub fn generate(
        &self,
        model: &ResolvedModel,
        mode: PresetMode,
    ) -> BTreeMap<String, Vec<StressTestPreset>> {
        let inferred_outcome = outcome::infer_outcome(model);
        let mut by_op = BTreeMap::new();
        for op in mode.operations() {
            let presets = match op {
                PresetOp::ChallengeAssumption => ops::challenge::generate(model),
                PresetOp::AddEdge => ops::add_edge::generate(model, &inferred_outcome),
                PresetOp::RemoveEdge => ops::remove_edge::generate(model, &inferred_outcome),
                PresetOp::RemoveVariable => ops::remove_variable::generate(model, &inferred_outcome),
            };
            by_op.insert(op.as_str().to_string(), presets);
        }
        debug!(
            model = %model.key,
            mode = ?mode,
            operations = by_op.len(),
            "preset generation complete"
        );
        by_op
    }

    /// Build both modes at once, the shape persisted per model version.
    pub fn build_catalog(&self, model: &ResolvedModel) -> PresetCatalog {
        PresetCatalog {
            quick_estimate: self.generate(model, PresetMode::Quick),
            full_recompute: self.generate(model, PresetMode::Full),
        }
    }
}
