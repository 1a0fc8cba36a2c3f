//! System-wide fixed limits. Tunable heuristics live in [`crate::config`].

/// Crux system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum traversal depth for intervention-effect propagation.
pub const MAX_PROPAGATION_DEPTH: usize = 4;

/// Maximum entries per ranked preset list (add_edge, remove_edge, remove_variable).
pub const MAX_PRESET_CANDIDATES: usize = 8;

/// Maximum verbatim assumptions turned into challenge presets.
pub const MAX_CHALLENGED_ASSUMPTIONS: usize = 3;

/// Maximum confounders expanded into challenge presets.
pub const MAX_CHALLENGED_CONFOUNDERS: usize = 3;

/// Raw observations retained in the oracle history window.
pub const ORACLE_HISTORY_WINDOW: usize = 10;

/// Minimum falsifier length (chars) for a hypothesis to stay testable.
pub const MIN_FALSIFIER_LEN: usize = 20;
