//! Critical path heuristic
//!
//! Among the strongest edges, an edge is critical when it spans more than
//! `min_level_gap` hierarchy levels and is stronger than `min_strength`.

use super::hierarchy::Hierarchy;
use crate::config::CriticalPathConfig;
use crate::graph::{RelationshipStore, SectorRelationship};
use serde::Serialize;

/// One examined edge and its verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPath {
    pub relationship: SectorRelationship,
    pub source_level: usize,
    pub target_level: usize,
    pub level_gap: usize,
    pub critical: bool,
}

/// Flag the top `config.candidates` strongest edges
pub fn find_critical_paths(
    store: &RelationshipStore,
    hierarchy: &Hierarchy,
    config: &CriticalPathConfig,
) -> Vec<CriticalPath> {
    store
        .get_strongest_connections(config.candidates)
        .into_iter()
        .map(|edge| {
            let source_level = hierarchy.level(edge.source_id);
            let target_level = hierarchy.level(edge.target_id);
            let level_gap = source_level.abs_diff(target_level);
            CriticalPath {
                relationship: edge.clone(),
                source_level,
                target_level,
                level_gap,
                critical: level_gap > config.min_level_gap && edge.strength > config.min_strength,
            }
        })
        .collect()
}
