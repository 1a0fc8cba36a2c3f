use serde::{Deserialize, Serialize};

/// One raw name mapped to a canonical ontology term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedName {
    pub input: String,
    pub canonical: String,
    /// How the match was made (exact, synonym, fuzzy, ...), aligner-defined.
    pub matched_by: String,
}

/// Result of aligning a batch of raw variable names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentOutcome {
    pub aligned: Vec<AlignedName>,
    pub unknown: Vec<String>,
}

/// Alignment quality attached to every disagreement report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentQuality {
    /// Matched / total aligned inputs.
    pub coverage: f64,
    /// Threshold the coverage was gated against.
    pub threshold: f64,
    /// Raw names the ontology could not map, sorted.
    pub unknown_variables: Vec<String>,
    /// Whether the two models declare different domains.
    pub cross_domain: bool,
}
