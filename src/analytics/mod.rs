//! Graph analytics layer
//!
//! Presentation-oriented rankings derived from the relationship store:
//! dependency maps, hierarchy levels, influence leaderboard, critical paths
//! and exports. Every call is a pure transform over the current store.

pub mod critical;
pub mod export;
pub mod hierarchy;
pub mod influence;
pub mod synergy;

pub use critical::{find_critical_paths, CriticalPath};
pub use hierarchy::{Hierarchy, HierarchyStats};
pub use influence::{InfluenceInputs, InfluenceScorer, WeightedInfluence};
pub use synergy::{RelationshipStrategy, SynergyStrategy};

use crate::config::CriticalPathConfig;
use crate::graph::{RelationshipStore, SectorId, SectorNode};
use serde::Serialize;
use std::collections::HashMap;

/// Everything known about one sector's dependency neighbourhood
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMap {
    pub node: SectorNode,
    pub dependencies: Vec<SectorNode>,
    pub dependents: Vec<SectorNode>,
    pub parents: Vec<SectorNode>,
    pub children: Vec<SectorNode>,
    pub level: usize,
    pub influence: f64,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceEntry {
    pub node: SectorNode,
    pub score: f64,
    pub level: usize,
    pub dependents: usize,
    pub children: usize,
}

/// Read-only analytics over a store snapshot
pub struct NetworkAnalytics<'a> {
    store: &'a RelationshipStore,
    scorer: &'a dyn InfluenceScorer,
    critical_path: &'a CriticalPathConfig,
}

impl<'a> NetworkAnalytics<'a> {
    pub fn new(
        store: &'a RelationshipStore,
        scorer: &'a dyn InfluenceScorer,
        critical_path: &'a CriticalPathConfig,
    ) -> Self {
        Self {
            store,
            scorer,
            critical_path,
        }
    }

    pub fn store(&self) -> &'a RelationshipStore {
        self.store
    }

    pub fn hierarchy(&self) -> Hierarchy {
        Hierarchy::build(self.store)
    }

    /// Level of every sector
    pub fn hierarchy_levels(&self) -> HashMap<SectorId, usize> {
        self.hierarchy().levels().clone()
    }

    pub fn hierarchy_stats(&self) -> HierarchyStats {
        self.hierarchy().stats()
    }

    /// Influence of one sector given a prebuilt hierarchy.
    ///
    /// Hierarchy parents are exactly the store's dependents, so they stand
    /// in for the dependent count.
    pub fn influence_of(&self, hierarchy: &Hierarchy, node: &SectorNode) -> f64 {
        self.scorer.score(&InfluenceInputs {
            dependents: hierarchy.parents(node.id).len(),
            connections: node.connections,
            children: hierarchy.children(node.id).len(),
        })
    }

    /// Dependency neighbourhood of a sector; `None` for unknown ids
    pub fn dependency_map(&self, id: SectorId) -> Option<DependencyMap> {
        let node = self.store.node(id)?;
        let hierarchy = self.hierarchy();
        let lookup = self.store.get_dependencies(id);

        Some(DependencyMap {
            node: node.clone(),
            dependencies: lookup.dependencies,
            dependents: lookup.dependents,
            parents: self.resolve(hierarchy.parents(id)),
            children: self.resolve(hierarchy.children(id)),
            level: hierarchy.level(id),
            influence: self.influence_of(&hierarchy, node),
        })
    }

    /// Sectors ranked by influence, highest first, truncated to `limit`.
    ///
    /// Equal scores keep node insertion order.
    pub fn influence_ranking(&self, limit: usize) -> Vec<InfluenceEntry> {
        let hierarchy = self.hierarchy();
        let mut entries: Vec<InfluenceEntry> = self
            .store
            .nodes()
            .map(|node| InfluenceEntry {
                node: node.clone(),
                score: self.influence_of(&hierarchy, node),
                level: hierarchy.level(node.id),
                dependents: hierarchy.parents(node.id).len(),
                children: hierarchy.children(node.id).len(),
            })
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(limit);
        entries
    }

    /// Strongest edges flagged by the critical path heuristic
    pub fn critical_paths(&self) -> Vec<CriticalPath> {
        find_critical_paths(self.store, &self.hierarchy(), self.critical_path)
    }

    fn resolve(&self, ids: &[SectorId]) -> Vec<SectorNode> {
        ids.iter()
            .filter_map(|id| self.store.node(*id))
            .cloned()
            .collect()
    }
}
