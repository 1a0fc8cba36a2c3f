//! Data model, one file per shape family.

pub mod alignment;
pub mod compare;
pub mod disagreement;
pub mod hypothesis;
pub mod model_spec;
pub mod oracle;
pub mod preset;
pub mod resolved_model;

pub use alignment::{AlignedName, AlignmentOutcome, AlignmentQuality};
pub use compare::{CompareRequest, InterventionProbe};
pub use disagreement::{AtomKind, DisagreementAtom, DisagreementReport, EpistemicWeight, Severity};
pub use hypothesis::{
    Hypothesis, HypothesisAuditEvent, HypothesisScores, HypothesisState, LifecycleTrigger,
    ValidationOutcome,
};
pub use model_spec::{EdgeSpec, ModelInput, ModelSpec, NodeSpec, RegisteredModel};
pub use oracle::{OracleState, OracleTransition, ScoredObservation};
pub use preset::{ModelEdit, PresetCatalog, PresetMode, PresetOp, StressTestPreset};
pub use resolved_model::{CausalEdge, EdgeSign, ResolvedModel, Variable};
