/// Variable-ontology collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("variable aligner unavailable: {reason}")]
    AlignerUnavailable { reason: String },
}
