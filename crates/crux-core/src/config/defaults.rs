//! Default values backing the config structs.

/// Evidence weight applied when validation metadata is absent.
pub const DEFAULT_EVIDENCE_WEIGHT: f64 = 0.55;

/// Floor on parsed evidence weights; keeps every atom's score term positive.
pub const EVIDENCE_WEIGHT_FLOOR: f64 = 0.05;

/// Alignment coverage threshold for same-domain comparisons.
pub const DEFAULT_SAME_DOMAIN_COVERAGE: f64 = 0.90;

/// Alignment coverage threshold for cross-domain comparisons.
pub const DEFAULT_CROSS_DOMAIN_COVERAGE: f64 = 0.95;

/// Minimum |effectA - effectB| to report an intervention disagreement.
pub const DEFAULT_INTERVENTION_DELTA_MIN: f64 = 0.2;

/// Delta above which an intervention atom is high severity.
pub const DEFAULT_INTERVENTION_DELTA_HIGH: f64 = 0.75;

/// Delta at or above which a counterfactual atom is also emitted.
pub const DEFAULT_COUNTERFACTUAL_DELTA_MIN: f64 = 0.5;

/// Severity weights folded into the aggregate score.
pub const DEFAULT_SEVERITY_WEIGHT_HIGH: f64 = 1.0;
pub const DEFAULT_SEVERITY_WEIGHT_MEDIUM: f64 = 0.6;
pub const DEFAULT_SEVERITY_WEIGHT_LOW: f64 = 0.3;

/// Oracle prior: Beta(1, 9), skeptical of sustained high-confidence streaks.
pub const DEFAULT_ORACLE_PRIOR_ALPHA: u32 = 1;
pub const DEFAULT_ORACLE_PRIOR_BETA: u32 = 9;

/// Minimum confidence for an observation to qualify.
pub const DEFAULT_ORACLE_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Causal-depth score an observation must hit to qualify.
pub const DEFAULT_ORACLE_QUALIFYING_SCORE: u8 = 3;

/// Posterior at or above which the phase activates.
pub const DEFAULT_ORACLE_ACTIVATION_THRESHOLD: f64 = 0.95;

/// Posterior below which an active phase deactivates (hysteresis).
pub const DEFAULT_ORACLE_DEACTIVATION_THRESHOLD: f64 = 0.90;

/// Time gap (seconds) beyond which the display streak resets.
pub const DEFAULT_STREAK_GAP_LIMIT_SECS: i64 = 600;

/// Maximum p-value for a validation result to count as a pass.
pub const DEFAULT_P_VALUE_MAX: f64 = 0.05;
