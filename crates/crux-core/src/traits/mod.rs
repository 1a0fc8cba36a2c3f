//! Collaborator seams. Storage, ontology and registry implementations live
//! outside this workspace; the engine only sees these traits.

mod aligner;
mod registry;

pub use aligner::IVariableAligner;
pub use registry::IModelRegistry;
