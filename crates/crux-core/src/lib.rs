//! # crux-core
//!
//! Foundation crate for the Crux causal reasoning engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DiffConfig, OracleConfig};
pub use errors::{CruxError, CruxResult};
pub use models::{
    AtomKind, CausalEdge, DisagreementAtom, DisagreementReport, EdgeSign, HypothesisState,
    ResolvedModel, Severity, StressTestPreset,
};
