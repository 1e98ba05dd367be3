//! Network statistics calculator
//!
//! Produces a [`NetworkStats`] snapshot from the current node and edge sets.
//! Recomputed in full by the store on every mutation.

use super::edge::SectorRelationship;
use super::types::SectorId;
use crate::algo;
use hsomni_graph_algorithms::{density_percent, incident_degree_summary, DegreeSummary, GraphView};
use serde::{Deserialize, Serialize};

/// Aggregate figures for the whole network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Stored edges (a bidirectional edge counts once)
    pub total_relationships: usize,
    /// Mean degree over all nodes
    pub avg_connections: f64,
    /// Connected node pairs as a percentage of all possible pairs
    pub density: f64,
    /// Highest degree
    pub max_connections: usize,
    /// Nodes touching no edge
    pub isolated_nodes: usize,
}

/// Stats plus the per-node degrees they were derived from
#[derive(Debug, Clone)]
pub(crate) struct StatsSnapshot {
    pub(crate) stats: NetworkStats,
    view: GraphView,
    degrees: DegreeSummary,
}

impl StatsSnapshot {
    pub(crate) fn degree_of(&self, id: SectorId) -> usize {
        self.degrees.degree_of(&self.view, id.as_u64()).unwrap_or(0)
    }
}

impl NetworkStats {
    /// Compute stats for the given nodes and edges.
    ///
    /// An edge referencing an unknown node still counts towards
    /// `total_relationships` and adds a degree to its known endpoint.
    /// Density only considers pairs of known nodes.
    pub fn calculate<'a>(
        node_ids: impl IntoIterator<Item = SectorId>,
        relationships: impl IntoIterator<Item = &'a SectorRelationship>,
    ) -> NetworkStats {
        Self::snapshot(node_ids, relationships).stats
    }

    /// [`NetworkStats::calculate`], keeping the per-node degrees
    pub(crate) fn snapshot<'a>(
        node_ids: impl IntoIterator<Item = SectorId>,
        relationships: impl IntoIterator<Item = &'a SectorRelationship>,
    ) -> StatsSnapshot {
        let edges = algo::edge_pairs(relationships);
        let view = algo::network_view(node_ids, &edges);
        let degrees = incident_degree_summary(&view, &edges);

        let stats = NetworkStats {
            total_relationships: edges.len(),
            avg_connections: degrees.average_degree,
            density: density_percent(&view),
            max_connections: degrees.max_degree,
            isolated_nodes: degrees.isolated,
        };

        StatsSnapshot {
            stats,
            view,
            degrees,
        }
    }
}
