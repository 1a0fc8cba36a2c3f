//! Engine configuration. Every heuristic constant is named here rather than
//! inlined at a call site; exact values are contractual only where the
//! comparison scenarios pin them.

pub mod defaults;

mod diff_config;
mod oracle_config;

pub use diff_config::{DiffConfig, EpistemicMixing, MixingTable, SeverityWeights};
pub use oracle_config::OracleConfig;
