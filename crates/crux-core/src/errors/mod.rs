//! Error types, one file per domain, unified under [`CruxError`].

pub mod ontology_error;
pub mod resolve_error;

pub use ontology_error::OntologyError;
pub use resolve_error::ResolveError;

/// Top-level error for all Crux operations.
///
/// Note that insufficient variable alignment is deliberately NOT an error:
/// it is reported in-band as a high-severity atom so callers always receive
/// a complete disagreement report.
#[derive(Debug, thiserror::Error)]
pub enum CruxError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Ontology(#[from] OntologyError),
}

/// Convenience result alias used across the workspace.
pub type CruxResult<T> = Result<T, CruxError>;
