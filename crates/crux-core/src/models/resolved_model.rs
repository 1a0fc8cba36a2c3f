use serde::{Deserialize, Serialize};

/// Sign of a directed causal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSign {
    Positive,
    Negative,
}

impl EdgeSign {
    /// Multiplicative factor used by the intervention propagator.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

/// A directed, signed edge between canonical variable keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub from: String,
    pub to: String,
    pub sign: EdgeSign,
}

impl CausalEdge {
    /// Canonical directed key, e.g. `smoking->cancer`.
    pub fn key(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }

    /// Canonical unordered pair key, e.g. `cancer|smoking`.
    pub fn pair_key(&self) -> String {
        if self.from <= self.to {
            format!("{}|{}", self.from, self.to)
        } else {
            format!("{}|{}", self.to, self.from)
        }
    }
}

/// A model variable: canonical key plus a human display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub display: String,
}

/// One canonical in-memory structural causal model.
///
/// All lists are deduplicated and sorted at construction time; detectors rely
/// on that ordering for byte-identical output on identical input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedModel {
    pub key: String,
    pub domain: String,
    pub version: String,
    pub variables: Vec<Variable>,
    pub edges: Vec<CausalEdge>,
    /// Free-text assumptions, verbatim as declared.
    pub assumptions: Vec<String>,
    /// Free-text confounder names, verbatim as declared.
    pub confounders: Vec<String>,
    /// Evidence-weight scalar derived from validation metadata.
    pub evidence_weight: f64,
}

impl ResolvedModel {
    /// All raw variable names that need ontology alignment: node keys plus
    /// edge endpoints (edges may reference variables absent from the node list).
    pub fn alignment_inputs(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variables.iter().map(|v| v.key.clone()).collect();
        for edge in &self.edges {
            names.push(edge.from.clone());
            names.push(edge.to.clone());
        }
        names.sort();
        names.dedup();
        names
    }

    /// Look up a variable's display name, falling back to the key.
    pub fn display_of<'a>(&'a self, key: &'a str) -> &'a str {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.display.as_str())
            .unwrap_or(key)
    }

    /// Out-degree of a variable in the edge list.
    pub fn out_degree(&self, key: &str) -> usize {
        self.edges.iter().filter(|e| e.from == key).count()
    }

    /// In-degree of a variable in the edge list.
    pub fn in_degree(&self, key: &str) -> usize {
        self.edges.iter().filter(|e| e.to == key).count()
    }

    /// Whether a directed edge exists between two keys.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }
}
