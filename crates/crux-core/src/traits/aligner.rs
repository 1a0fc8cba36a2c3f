use crate::errors::CruxResult;
use crate::models::AlignmentOutcome;

/// Ontology collaborator: maps raw variable names to canonical terms.
///
/// Canonicalization strategy (synonyms, fuzzy matching) is entirely the
/// implementation's concern; the detector only consumes the mapping and the
/// resulting coverage.
pub trait IVariableAligner: Send + Sync {
    fn align(&self, names: &[String]) -> CruxResult<AlignmentOutcome>;
}
