/// Model resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("model not found: {key}@{version}")]
    NotFound { key: String, version: String },

    #[error("model registry unavailable: {reason}")]
    RegistryUnavailable { reason: String },
}
