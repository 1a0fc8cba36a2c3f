//! Signed, depth-bounded intervention-effect propagation.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crux_core::models::CausalEdge;

/// Signed adjacency over canonical variable keys.
///
/// Construction order is fixed by the caller (resolved models keep their
/// edge lists canonically sorted), which pins the traversal order and makes
/// effects reproducible.
pub struct SignedGraph {
    graph: StableDiGraph<String, f64>,
    index: HashMap<String, NodeIndex>,
}

impl SignedGraph {
    pub fn from_edges(edges: &[CausalEdge]) -> Self {
        let mut signed = Self {
            graph: StableDiGraph::new(),
            index: HashMap::new(),
        };
        for edge in edges {
            let from = signed.ensure_node(&edge.from);
            let to = signed.ensure_node(&edge.to);
            signed.graph.add_edge(from, to, edge.sign.factor());
        }
        signed
    }

    fn ensure_node(&mut self, key: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(key) {
            return idx;
        }
        let idx = self.graph.add_node(key.to_string());
        self.index.insert(key.to_string(), idx);
        idx
    }

    /// Comparative effect of intervening on `intervention` as felt at
    /// `outcome`.
    ///
    /// Breadth-first from the intervention variable with initial sign +1 and
    /// depth capped at `max_depth`; each hop multiplies the accumulated sign
    /// by the traversed edge's sign. Every arrival at the outcome at depth
    /// d > 0 adds sign/d, so closer paths contribute more. A (node, depth)
    /// pair is visited at most once: convergent paths at different depths are
    /// admitted, infinite loops are not.
    ///
    /// The returned scalar is unnormalized and only meaningful comparatively
    /// between two models, never as an absolute causal-effect estimate.
    pub fn intervention_effect(&self, intervention: &str, outcome: &str, max_depth: usize) -> f64 {
        let Some(&start) = self.index.get(intervention) else {
            return 0.0;
        };
        let Some(&outcome_idx) = self.index.get(outcome) else {
            return 0.0;
        };

        let mut visited: HashSet<(NodeIndex, usize)> = HashSet::new();
        visited.insert((start, 0));

        let mut queue = VecDeque::new();
        queue.push_back((start, 0usize, 1.0_f64));

        let mut total = 0.0;
        while let Some((current, depth, sign)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            for edge in self.graph.edges(current) {
                let next = edge.target();
                let next_depth = depth + 1;
                let next_sign = sign * edge.weight();
                if !visited.insert((next, next_depth)) {
                    continue;
                }
                if next == outcome_idx {
                    total += next_sign / next_depth as f64;
                }
                queue.push_back((next, next_depth, next_sign));
            }
        }
        total
    }
}
