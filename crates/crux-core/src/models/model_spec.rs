//! Input shapes accepted by the model resolver.
//!
//! Callers send nodes and edges in heterogeneous shapes; everything funnels
//! through one closed set of variants so no call site branches ad hoc.

use serde::{Deserialize, Serialize};

/// An inline node: a bare name, or an object carrying any of
/// id / name / label / displayName / title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Name(String),
    Detailed {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default, rename = "displayName", alias = "display_name")]
        display_name: Option<String>,
        #[serde(default)]
        title: Option<String>,
    },
}

impl NodeSpec {
    /// The machine identifier, shortest available: id, then name, label,
    /// displayName, title. `None` means the entry is malformed.
    pub fn raw_id(&self) -> Option<&str> {
        match self {
            Self::Name(s) => non_empty(s),
            Self::Detailed {
                id,
                name,
                label,
                display_name,
                title,
            } => [id, name, label, display_name, title]
                .into_iter()
                .find_map(|f| f.as_deref().and_then(non_empty)),
        }
    }

    /// The human-facing name, most descriptive available: title, displayName,
    /// label, name, id. Falls back to [`Self::raw_id`].
    pub fn raw_display(&self) -> Option<&str> {
        match self {
            Self::Name(s) => non_empty(s),
            Self::Detailed {
                id,
                name,
                label,
                display_name,
                title,
            } => [title, display_name, label, name, id]
                .into_iter()
                .find_map(|f| f.as_deref().and_then(non_empty)),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// An inline edge. Endpoints accept the same shapes as nodes; the sign
/// accepts several spellings and defaults to positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(default, alias = "source", alias = "cause")]
    pub from: Option<NodeSpec>,
    #[serde(default, alias = "target", alias = "effect")]
    pub to: Option<NodeSpec>,
    #[serde(default)]
    pub sign: Option<String>,
}

/// An inline model specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSpec {
    pub key: Option<String>,
    pub domain: Option<String>,
    pub version: Option<String>,
    #[serde(alias = "variables")]
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub assumptions: Vec<String>,
    pub confounders: Vec<String>,
    /// Read-only validation-metadata blob; numeric fields may be in
    /// [0, 100] or [0, 1].
    pub validation: Option<serde_json::Value>,
}

/// What the registry collaborator returns for a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredModel {
    pub spec: ModelSpec,
    pub version: String,
}

/// Resolver input: a registry reference or an inline spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelInput {
    Reference {
        key: String,
        #[serde(default)]
        version: Option<String>,
    },
    Inline(Box<ModelSpec>),
}

impl<'de> Deserialize<'de> for ModelInput {
    /// A map carrying any structural field (nodes, edges, assumptions,
    /// confounders, validation, domain) is an inline spec; a map with only
    /// `key` and optionally `version` is a registry reference. Untagged
    /// derive cannot express this because an inline spec may also carry a
    /// `key`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_reference = value
            .as_object()
            .is_some_and(|map| map.contains_key("key") && map.keys().all(|k| k == "key" || k == "version"));

        if is_reference {
            let key = value["key"]
                .as_str()
                .ok_or_else(|| serde::de::Error::custom("model reference key must be a string"))?
                .to_string();
            let version = value["version"].as_str().map(String::from);
            return Ok(Self::Reference { key, version });
        }

        let spec: ModelSpec = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(Self::Inline(Box::new(spec)))
    }
}
