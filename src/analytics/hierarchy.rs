//! Dependency hierarchy over the sector network
//!
//! Parents of a sector are the sources of dependency edges into it; its
//! children are the targets of its outbound dependency edges. Levels come
//! from a BFS out of every parentless sector.

use crate::algo::{dependency_view, hierarchy_levels};
use crate::graph::{RelationshipStore, SectorId};
use serde::Serialize;
use std::collections::HashMap;

/// Layered view of the dependency edges
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    levels: HashMap<SectorId, usize>,
    parents: HashMap<SectorId, Vec<SectorId>>,
    children: HashMap<SectorId, Vec<SectorId>>,
    roots: Vec<SectorId>,
}

impl Hierarchy {
    pub fn build(store: &RelationshipStore) -> Self {
        let view = dependency_view(store);
        let layering = hierarchy_levels(&view);
        let id_at = |idx: usize| SectorId(view.index_to_node[idx]);

        let mut hierarchy = Hierarchy::default();
        for idx in 0..view.node_count {
            let id = id_at(idx);
            hierarchy.levels.insert(id, layering.levels[idx]);
            hierarchy
                .parents
                .insert(id, view.predecessors(idx).iter().map(|&p| id_at(p)).collect());
            hierarchy
                .children
                .insert(id, view.successors(idx).iter().map(|&c| id_at(c)).collect());
        }
        hierarchy.roots = layering.roots.iter().map(|&idx| id_at(idx)).collect();
        hierarchy
    }

    /// Level of a sector; unknown sectors report level 0
    pub fn level(&self, id: SectorId) -> usize {
        self.levels.get(&id).copied().unwrap_or(0)
    }

    pub fn levels(&self) -> &HashMap<SectorId, usize> {
        &self.levels
    }

    pub fn parents(&self, id: SectorId) -> &[SectorId] {
        self.parents.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn children(&self, id: SectorId) -> &[SectorId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sectors with no inbound dependency edge, in insertion order
    pub fn roots(&self) -> &[SectorId] {
        &self.roots
    }

    pub fn stats(&self) -> HierarchyStats {
        if self.levels.is_empty() {
            return HierarchyStats::default();
        }

        let max_level = self.levels.values().copied().max().unwrap_or(0);
        let mut nodes_per_level = vec![0usize; max_level + 1];
        for &level in self.levels.values() {
            nodes_per_level[level] += 1;
        }

        HierarchyStats {
            max_level,
            nodes_per_level,
            root_count: self.roots.len(),
            leaf_count: self.children.values().filter(|c| c.is_empty()).count(),
        }
    }
}

/// Summary of the hierarchy shape. All zeros for an empty network.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyStats {
    pub max_level: usize,
    /// Index is the level
    pub nodes_per_level: Vec<usize>,
    pub root_count: usize,
    pub leaf_count: usize,
}
