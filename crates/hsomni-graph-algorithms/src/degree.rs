//! Degree and density analysis
//!
//! Edge direction is ignored: a node's degree is the number of edges it
//! appears on, as source or target. A self-loop counts once.

use super::common::{GraphView, NodeId};
use std::collections::HashSet;

/// Degree figures for every node of a view
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeSummary {
    /// Degree per dense index
    pub degrees: Vec<usize>,
    /// Sum of all degrees
    pub total_degree: usize,
    /// Highest degree (0 for an empty view)
    pub max_degree: usize,
    /// Nodes with degree 0
    pub isolated: usize,
    /// total_degree / node_count (0.0 for an empty view)
    pub average_degree: f64,
}

impl DegreeSummary {
    /// Degree of a node by id
    pub fn degree_of(&self, view: &GraphView, node: NodeId) -> Option<usize> {
        view.node_to_index.get(&node).map(|&idx| self.degrees[idx])
    }

    /// Summary over per-index degrees
    pub fn from_degrees(degrees: Vec<usize>) -> Self {
        let total_degree: usize = degrees.iter().sum();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let isolated = degrees.iter().filter(|&&d| d == 0).count();
        let average_degree = if degrees.is_empty() {
            0.0
        } else {
            total_degree as f64 / degrees.len() as f64
        };

        DegreeSummary {
            degrees,
            total_degree,
            max_degree,
            isolated,
            average_degree,
        }
    }
}

/// Compute undirected degrees for every node in the view
pub fn degree_summary(view: &GraphView) -> DegreeSummary {
    let degrees: Vec<usize> = (0..view.node_count)
        .map(|idx| {
            let self_loops = view.successors(idx).iter().filter(|&&t| t == idx).count();
            view.out_degree(idx) + view.in_degree(idx) - self_loops
        })
        .collect();

    DegreeSummary::from_degrees(degrees)
}

/// Degrees counted straight from an edge list.
///
/// Unlike [`degree_summary`], an edge with one endpoint outside the view
/// still adds a degree to the endpoint that is inside it.
pub fn incident_degree_summary(view: &GraphView, edges: &[(NodeId, NodeId)]) -> DegreeSummary {
    let mut degrees = vec![0usize; view.node_count];
    for &(source, target) in edges {
        if let Some(&idx) = view.node_to_index.get(&source) {
            degrees[idx] += 1;
        }
        if target != source {
            if let Some(&idx) = view.node_to_index.get(&target) {
                degrees[idx] += 1;
            }
        }
    }

    DegreeSummary::from_degrees(degrees)
}

/// Number of distinct unordered node pairs joined by at least one edge.
/// Self-loops are not pairs.
pub fn connected_pair_count(view: &GraphView) -> usize {
    let mut pairs = HashSet::new();
    for u in 0..view.node_count {
        for &v in view.successors(u) {
            if u != v {
                pairs.insert((u.min(v), u.max(v)));
            }
        }
    }
    pairs.len()
}

/// Network density as a percentage of the n·(n−1)/2 possible pairs.
///
/// Returns 0.0 when fewer than two nodes exist. Always within [0, 100].
pub fn density_percent(view: &GraphView) -> f64 {
    let n = view.node_count;
    if n < 2 {
        return 0.0;
    }
    let max_pairs = (n * (n - 1)) as f64 / 2.0;
    connected_pair_count(view) as f64 / max_pairs * 100.0
}
