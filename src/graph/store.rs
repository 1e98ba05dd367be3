//! In-memory relationship store
//!
//! Holds the authoritative node and edge sets of the sector network and
//! keeps the derived structures (adjacency matrix, per-node connection
//! counts, network statistics) consistent with them. Every mutation
//! recomputes the derived structures in full.

use super::edge::SectorRelationship;
use super::matrix::RelationshipMatrix;
use super::node::{NodeUpdate, SectorNode};
use super::stats::NetworkStats;
use super::types::{RelationshipKey, SectorId};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Result of a dependency lookup for one sector
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyLookup {
    /// Sectors this sector depends on (targets of its dependency edges)
    pub dependencies: Vec<SectorNode>,
    /// Sectors depending on this sector (sources of dependency edges into it)
    pub dependents: Vec<SectorNode>,
}

/// In-memory sector network storage
///
/// Uses insertion-ordered maps so every listing and export is deterministic:
/// - nodes: SectorId -> SectorNode
/// - relationships: "{source}-{target}" -> SectorRelationship
///
/// Lookups on unknown ids return nothing rather than failing.
#[derive(Debug, Clone, Default)]
pub struct RelationshipStore {
    /// Node storage
    nodes: IndexMap<SectorId, SectorNode>,

    /// Edge storage, one entry per ordered pair
    relationships: IndexMap<RelationshipKey, SectorRelationship>,

    /// Derived adjacency matrix
    matrix: RelationshipMatrix,

    /// Derived statistics
    stats: NetworkStats,
}

impl RelationshipStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node by id.
    ///
    /// The stored node's `connections` is recomputed from the current edges,
    /// whatever value the caller passed in.
    pub fn store_node(&mut self, node: SectorNode) {
        self.nodes.insert(node.id, node);
        self.refresh_stats();
    }

    /// Apply a partial update to an existing node.
    ///
    /// Returns `false` when the id is unknown or nothing changed.
    pub fn update_node(&mut self, id: SectorId, update: &NodeUpdate) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => node.apply(update),
            None => false,
        }
    }

    /// Insert or replace a relationship keyed by its ordered pair.
    ///
    /// No validation is performed: strengths outside [0, 1] and endpoints
    /// that are not stored nodes are accepted as-is. A second edge with the
    /// same key silently overwrites the first.
    pub fn store_relationship(&mut self, relationship: SectorRelationship) {
        self.relationships.insert(relationship.key(), relationship);
        self.rebuild();
    }

    /// Exact-key lookup.
    ///
    /// Only the `"{source}-{target}"` key is consulted, even when the edge
    /// stored under the reverse key is bidirectional. Use
    /// [`relationship_between`](Self::relationship_between) for a symmetric check.
    pub fn get_relationship(&self, source: SectorId, target: SectorId) -> Option<&SectorRelationship> {
        self.relationships.get(&RelationshipKey::new(source, target))
    }

    /// Symmetric lookup: the exact key first, then the reverse key if the
    /// edge stored there is bidirectional.
    pub fn relationship_between(&self, a: SectorId, b: SectorId) -> Option<&SectorRelationship> {
        self.get_relationship(a, b).or_else(|| {
            self.get_relationship(b, a)
                .filter(|edge| edge.bidirectional)
        })
    }

    /// Dependencies and dependents of a sector.
    ///
    /// Linear scan over dependency-typed edges. A bidirectional dependency
    /// edge contributes in both directions.
    pub fn get_dependencies(&self, id: SectorId) -> DependencyLookup {
        let mut lookup = DependencyLookup::default();

        for edge in self.relationships.values().filter(|edge| edge.is_dependency()) {
            let Some(other) = edge.other_end(id) else {
                continue;
            };
            let Some(node) = self.nodes.get(&other) else {
                continue;
            };
            if edge.points_from(id) {
                lookup.dependencies.push(node.clone());
            }
            if edge.points_to(id) {
                lookup.dependents.push(node.clone());
            }
        }

        lookup
    }

    /// Edges sorted by strength descending, truncated to `limit`.
    ///
    /// Ties keep insertion order.
    pub fn get_strongest_connections(&self, limit: usize) -> Vec<&SectorRelationship> {
        let mut edges: Vec<&SectorRelationship> = self.relationships.values().collect();
        edges.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        edges.truncate(limit);
        edges
    }

    /// Every edge touching a sector, in insertion order
    pub fn relationships_for(&self, id: SectorId) -> Vec<&SectorRelationship> {
        self.relationships
            .values()
            .filter(|edge| edge.touches(id))
            .collect()
    }

    /// Get a node by ID
    pub fn node(&self, id: SectorId) -> Option<&SectorNode> {
        self.nodes.get(&id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: SectorId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &SectorNode> + '_ {
        self.nodes.values()
    }

    /// Relationships in insertion order
    pub fn relationships(&self) -> impl Iterator<Item = &SectorRelationship> + '_ {
        self.relationships.values()
    }

    /// Position of a node in insertion order
    pub fn node_index(&self, id: SectorId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    pub fn matrix(&self) -> &RelationshipMatrix {
        &self.matrix
    }

    pub fn stats(&self) -> &NetworkStats {
        &self.stats
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Clear all nodes and relationships
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.relationships.clear();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.matrix = RelationshipMatrix::rebuild(self.relationships.values());
        self.refresh_stats();
        debug!(
            nodes = self.nodes.len(),
            relationships = self.relationships.len(),
            cells = self.matrix.len(),
            "rebuilt relationship matrix"
        );
    }

    fn refresh_stats(&mut self) {
        let snapshot = NetworkStats::snapshot(self.nodes.keys().copied(), self.relationships.values());
        for node in self.nodes.values_mut() {
            node.connections = snapshot.degree_of(node.id);
        }
        self.stats = snapshot.stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{RelationshipType, SectorTier};

    fn seeded(count: u64) -> RelationshipStore {
        let mut store = RelationshipStore::new();
        for id in 1..=count {
            store.store_node(SectorNode::new(id, format!("Sector {}", id), SectorTier::Standard));
        }
        store
    }

    #[test]
    fn test_store_node_replaces() {
        let mut store = seeded(2);
        store.store_node(SectorNode::new(1, "Renamed", SectorTier::Premium));

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.node(SectorId(1)).unwrap().name, "Renamed");
        assert_eq!(store.node_index(SectorId(1)), Some(0));
    }

    #[test]
    fn test_store_relationship_overwrites_same_key() {
        let mut store = seeded(2);
        store.store_relationship(SectorRelationship::new(1, 2, 0.3, RelationshipType::Collaboration));
        store.store_relationship(SectorRelationship::new(1, 2, 0.9, RelationshipType::Integration));

        assert_eq!(store.relationship_count(), 1);
        let edge = store.get_relationship(SectorId(1), SectorId(2)).unwrap();
        assert_eq!(edge.strength, 0.9);
        assert_eq!(store.matrix().get(SectorId(1), SectorId(2)).unwrap().strength, 0.9);
    }

    #[test]
    fn test_get_relationship_is_exact_key() {
        let mut store = seeded(2);
        store.store_relationship(
            SectorRelationship::new(1, 2, 0.9, RelationshipType::Integration).bidirectional(),
        );

        assert!(store.get_relationship(SectorId(1), SectorId(2)).is_some());
        assert!(store.get_relationship(SectorId(2), SectorId(1)).is_none());
        assert!(store.relationship_between(SectorId(2), SectorId(1)).is_some());
    }

    #[test]
    fn test_relationship_between_respects_direction() {
        let mut store = seeded(2);
        store.store_relationship(SectorRelationship::new(1, 2, 0.5, RelationshipType::Dependency));

        assert!(store.relationship_between(SectorId(1), SectorId(2)).is_some());
        assert!(store.relationship_between(SectorId(2), SectorId(1)).is_none());
    }

    #[test]
    fn test_connections_recomputed() {
        let mut store = seeded(3);
        store.store_relationship(SectorRelationship::new(1, 2, 0.5, RelationshipType::Synergy));
        store.store_relationship(SectorRelationship::new(3, 1, 0.5, RelationshipType::Synergy));

        assert_eq!(store.node(SectorId(1)).unwrap().connections, 2);
        assert_eq!(store.node(SectorId(2)).unwrap().connections, 1);

        // A node stored later picks up edges already referencing it
        store.store_relationship(SectorRelationship::new(4, 1, 0.5, RelationshipType::Synergy));
        store.store_node(SectorNode::new(4, "Late", SectorTier::Basic));
        assert_eq!(store.node(SectorId(4)).unwrap().connections, 1);
        assert_eq!(store.node(SectorId(1)).unwrap().connections, 3);
    }

    #[test]
    fn test_dependencies_follow_direction() {
        let mut store = seeded(3);
        store.store_relationship(SectorRelationship::new(1, 2, 0.8, RelationshipType::Dependency));

        let of_two = store.get_dependencies(SectorId(2));
        assert!(of_two.dependencies.is_empty());
        assert_eq!(of_two.dependents.len(), 1);
        assert_eq!(of_two.dependents[0].id, SectorId(1));

        let of_one = store.get_dependencies(SectorId(1));
        assert_eq!(of_one.dependencies.len(), 1);
        assert_eq!(of_one.dependencies[0].id, SectorId(2));
        assert!(of_one.dependents.is_empty());

        assert_eq!(store.get_dependencies(SectorId(3)), DependencyLookup::default());
        assert_eq!(store.get_dependencies(SectorId(42)), DependencyLookup::default());
    }

    #[test]
    fn test_bidirectional_dependency_counts_both_ways() {
        let mut store = seeded(2);
        store.store_relationship(
            SectorRelationship::new(1, 2, 0.5, RelationshipType::Dependency).bidirectional(),
        );

        let lookup = store.get_dependencies(SectorId(2));
        assert_eq!(lookup.dependencies.len(), 1);
        assert_eq!(lookup.dependents.len(), 1);
    }

    #[test]
    fn test_non_dependency_edges_ignored_by_dependency_lookup() {
        let mut store = seeded(2);
        store.store_relationship(SectorRelationship::new(1, 2, 0.95, RelationshipType::Integration));

        let lookup = store.get_dependencies(SectorId(1));
        assert!(lookup.dependencies.is_empty());
        assert!(lookup.dependents.is_empty());
    }

    #[test]
    fn test_strongest_connections() {
        let mut store = seeded(4);
        store.store_relationship(SectorRelationship::new(1, 2, 0.4, RelationshipType::Dependency));
        store.store_relationship(SectorRelationship::new(2, 3, 0.9, RelationshipType::Integration));
        store.store_relationship(SectorRelationship::new(3, 4, 0.7, RelationshipType::Synergy));
        store.store_relationship(SectorRelationship::new(4, 1, 0.7, RelationshipType::Synergy));

        let top = store.get_strongest_connections(3);
        let keys: Vec<String> = top.iter().map(|e| e.key().to_string()).collect();
        assert_eq!(keys, vec!["2-3", "3-4", "4-1"]);

        assert_eq!(store.get_strongest_connections(10).len(), 4);
        assert!(store.get_strongest_connections(0).is_empty());
        assert_eq!(store.get_strongest_connections(3), top);
    }

    #[test]
    fn test_update_node() {
        let mut store = seeded(1);
        assert!(store.update_node(SectorId(1), &NodeUpdate::tier(SectorTier::Enterprise)));
        assert_eq!(store.node(SectorId(1)).unwrap().tier, SectorTier::Enterprise);
        assert!(!store.update_node(SectorId(9), &NodeUpdate::name("Ghost")));
    }

    #[test]
    fn test_clear() {
        let mut store = seeded(2);
        store.store_relationship(SectorRelationship::new(1, 2, 0.5, RelationshipType::Synergy));
        store.clear();

        assert_eq!(store.node_count(), 0);
        assert_eq!(store.relationship_count(), 0);
        assert!(store.matrix().is_empty());
        assert_eq!(store.stats(), &NetworkStats::default());
    }
}
