//! Graph algorithms module
//!
//! Algorithms are implemented in the `hsomni-graph-algorithms` crate.
//! This module provides the integration/adapter layer that turns store
//! contents into dense [`GraphView`]s.

use crate::graph::{RelationshipStore, SectorId, SectorRelationship};
use hsomni_graph_algorithms::{GraphView, NodeId as AlgoNodeId};

// Re-export algorithms
pub use hsomni_graph_algorithms::{
    connected_pair_count, degree_summary, density_percent, hierarchy_levels,
    incident_degree_summary, DegreeSummary, HierarchyLevels,
};

/// Every stored edge once, in its stored direction
pub fn edge_pairs<'a>(
    relationships: impl IntoIterator<Item = &'a SectorRelationship>,
) -> Vec<(AlgoNodeId, AlgoNodeId)> {
    relationships
        .into_iter()
        .map(|edge| (edge.source_id.as_u64(), edge.target_id.as_u64()))
        .collect()
}

/// Build a view over the given nodes from [`edge_pairs`] output.
///
/// Used for degree and density figures, where direction does not matter.
/// Edges with an endpoint outside `node_ids` are left out of the view.
pub fn network_view(
    node_ids: impl IntoIterator<Item = SectorId>,
    edges: &[(AlgoNodeId, AlgoNodeId)],
) -> GraphView {
    let nodes: Vec<AlgoNodeId> = node_ids.into_iter().map(|id| id.as_u64()).collect();
    GraphView::from_edges(&nodes, edges)
}

/// Build a view of dependency-typed edges only.
///
/// A bidirectional dependency edge is added in both directions.
pub fn dependency_view(store: &RelationshipStore) -> GraphView {
    let nodes: Vec<AlgoNodeId> = store.nodes().map(|node| node.id.as_u64()).collect();

    let mut edges = Vec::new();
    for edge in store.relationships().filter(|edge| edge.is_dependency()) {
        let (source, target) = (edge.source_id.as_u64(), edge.target_id.as_u64());
        edges.push((source, target));
        if edge.bidirectional {
            edges.push((target, source));
        }
    }

    GraphView::from_edges(&nodes, &edges)
}
