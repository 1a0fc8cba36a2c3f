//! Resolution of references and inline specs into [`ResolvedModel`]s.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crux_core::errors::{CruxResult, ResolveError};
use crux_core::models::{CausalEdge, ModelInput, ModelSpec, ResolvedModel, Variable};
use crux_core::traits::IModelRegistry;

use crate::evidence::evidence_weight;
use crate::normalize::{canonical_key, node_record, normalized_statement, parse_sign};

/// Key assigned to inline models that declare none.
const INLINE_MODEL_KEY: &str = "inline";

/// Version placeholder for unversioned models.
const UNVERSIONED: &str = "0";

/// Resolves model input through the registry collaborator.
pub struct ModelResolver {
    registry: Arc<dyn IModelRegistry>,
}

impl ModelResolver {
    pub fn new(registry: Arc<dyn IModelRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a reference or inline spec. Inline resolution is pure;
    /// reference resolution performs exactly one registry read and fails
    /// with `NotFound` when the registry has no match.
    pub fn resolve(&self, input: &ModelInput) -> CruxResult<ResolvedModel> {
        match input {
            ModelInput::Inline(spec) => Ok(resolve_spec(spec, None, None)),
            ModelInput::Reference { key, version } => {
                let registered = self
                    .registry
                    .get_model_version(key, version.as_deref())?
                    .ok_or_else(|| ResolveError::NotFound {
                        key: key.clone(),
                        version: version.clone().unwrap_or_else(|| "latest".to_string()),
                    })?;
                Ok(resolve_spec(
                    &registered.spec,
                    Some(key),
                    Some(&registered.version),
                ))
            }
        }
    }
}

/// Normalize a spec into the canonical in-memory representation.
///
/// Malformed nodes and edges (missing required shape) are skipped silently;
/// partial structure is still useful signal. All lists come out deduplicated
/// and sorted.
pub fn resolve_spec(
    spec: &ModelSpec,
    key_hint: Option<&str>,
    version_hint: Option<&str>,
) -> ResolvedModel {
    // Nodes: dedupe by canonical key, preferring the more descriptive
    // display name when shapes disagree.
    let mut variables: BTreeMap<String, String> = BTreeMap::new();
    for node in &spec.nodes {
        let Some((node_key, display)) = node_record(node) else {
            debug!("skipping malformed node spec");
            continue;
        };
        variables
            .entry(node_key)
            .and_modify(|existing| {
                if display.len() > existing.len() {
                    *existing = display.clone();
                }
            })
            .or_insert(display);
    }

    // Edges: endpoints accept the same shapes as nodes; either endpoint
    // missing, or a self-loop, drops the entry.
    let mut edges: Vec<CausalEdge> = Vec::new();
    for edge in &spec.edges {
        let from = edge.from.as_ref().and_then(node_record);
        let to = edge.to.as_ref().and_then(node_record);
        let (Some((from, _)), Some((to, _))) = (from, to) else {
            debug!("skipping malformed edge spec");
            continue;
        };
        if from == to {
            debug!(variable = %from, "skipping self-loop edge");
            continue;
        }
        edges.push(CausalEdge {
            from,
            to,
            sign: parse_sign(edge.sign.as_deref()),
        });
    }
    edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
    edges.dedup_by(|a, b| a.from == b.from && a.to == b.to);

    let key = spec
        .key
        .as_deref()
        .or(key_hint)
        .map(canonical_key)
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| INLINE_MODEL_KEY.to_string());

    ResolvedModel {
        key,
        domain: spec
            .domain
            .clone()
            .unwrap_or_else(|| "general".to_string()),
        version: spec
            .version
            .as_deref()
            .or(version_hint)
            .unwrap_or(UNVERSIONED)
            .to_string(),
        variables: variables
            .into_iter()
            .map(|(key, display)| Variable { key, display })
            .collect(),
        edges,
        assumptions: canonical_statements(&spec.assumptions),
        confounders: canonical_statements(&spec.confounders),
        evidence_weight: evidence_weight(spec.validation.as_ref()),
    }
}

/// Trim, drop empties, dedupe by normalized form (first verbatim wins), sort.
fn canonical_statements(raw: &[String]) -> Vec<String> {
    let mut by_norm: BTreeMap<String, String> = BTreeMap::new();
    for statement in raw {
        let trimmed = statement.trim();
        if trimmed.is_empty() {
            continue;
        }
        by_norm
            .entry(normalized_statement(trimmed))
            .or_insert_with(|| trimmed.to_string());
    }
    let mut statements: Vec<String> = by_norm.into_values().collect();
    statements.sort();
    statements
}
