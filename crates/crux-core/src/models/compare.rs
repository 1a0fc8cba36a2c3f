use serde::{Deserialize, Serialize};

use super::model_spec::ModelInput;

/// One requested intervention probe: what happens to `outcome` when
/// `variable` is intervened on, compared across the two models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionProbe {
    pub variable: String,
    pub outcome: String,
}

/// Full comparison input: two models plus optional intervention probes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub left: ModelInput,
    pub right: ModelInput,
    #[serde(default)]
    pub interventions: Vec<InterventionProbe>,
}
