use crate::errors::CruxResult;
use crate::models::RegisteredModel;

/// Model storage collaborator: resolves a (key, version) reference to a
/// stored model spec. Exactly one read per reference-based resolution.
pub trait IModelRegistry: Send + Sync {
    /// `None` means the registry has no such model/version; the resolver
    /// turns that into `ResolveError::NotFound`.
    fn get_model_version(
        &self,
        key: &str,
        version: Option<&str>,
    ) -> CruxResult<Option<RegisteredModel>>;
}
