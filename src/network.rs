//! Sector network context
//!
//! Owns the relationship store together with the configuration and the
//! scoring/generation strategies. Create one per consumer; nothing is
//! global, so tests can run isolated networks side by side.

use crate::analytics::export;
use crate::analytics::{
    CriticalPath, DependencyMap, HierarchyStats, InfluenceEntry, InfluenceScorer,
    NetworkAnalytics, RelationshipStrategy, SynergyStrategy, WeightedInfluence,
};
use crate::config::{LayoutConfig, NetworkConfig};
use crate::error::NetworkResult;
use crate::graph::{
    NetworkStats, RelationshipMatrix, RelationshipStore, SectorId, SectorNode, SectorRelationship,
};
use crate::sector::{SectorRecord, SectorSource};
use std::f64::consts::TAU;
use tracing::{error, info};

/// The sector relationship network of one session
pub struct SectorNetwork {
    config: NetworkConfig,
    store: RelationshipStore,
    strategy: Box<dyn RelationshipStrategy>,
    scorer: Box<dyn InfluenceScorer>,
    initialized: bool,
}

impl SectorNetwork {
    /// Network with the default strategies built from `config`
    pub fn new(config: NetworkConfig) -> Self {
        let strategy = Box::new(SynergyStrategy::new(config.synergy.clone()));
        let scorer = Box::new(WeightedInfluence::from(&config.influence));
        Self::with_strategies(config, strategy, scorer)
    }

    pub fn with_strategies(
        config: NetworkConfig,
        strategy: Box<dyn RelationshipStrategy>,
        scorer: Box<dyn InfluenceScorer>,
    ) -> Self {
        Self {
            config,
            store: RelationshipStore::new(),
            strategy,
            scorer,
            initialized: false,
        }
    }

    /// Load sectors from `source` and seed the network.
    ///
    /// Any earlier network is discarded first. On failure the error is
    /// logged and returned, and the network is left empty and uninitialized.
    pub async fn initialize(&mut self, source: &SectorSource) -> NetworkResult<()> {
        self.reset();
        match source.load().await {
            Ok(records) => {
                self.seed(records);
                Ok(())
            }
            Err(e) => {
                error!(source = %source.describe(), error = %e, "failed to load sectors");
                Err(e)
            }
        }
    }

    /// Seed nodes from sector records, then generate relationships for every
    /// unordered pair with the relationship strategy.
    ///
    /// Replaces whatever the network held before.
    pub fn seed(&mut self, records: Vec<SectorRecord>) {
        self.reset();
        let total = records.len();
        for (index, record) in records.into_iter().enumerate() {
            let (x, y) = circular_position(&self.config.layout, index, total);
            let tier = record.tier();
            self.store
                .store_node(SectorNode::new(record.id, record.name, tier).with_position(x, y));
        }

        let nodes: Vec<SectorNode> = self.store.nodes().cloned().collect();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if let Some(relationship) = self.strategy.relate(a, b) {
                    self.store.store_relationship(relationship);
                }
            }
        }

        self.initialized = true;
        info!(
            nodes = self.store.node_count(),
            relationships = self.store.relationship_count(),
            density = self.store.stats().density,
            "sector network seeded"
        );
    }

    fn reset(&mut self) {
        self.store.clear();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn store(&self) -> &RelationshipStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RelationshipStore {
        &mut self.store
    }

    pub fn analytics(&self) -> NetworkAnalytics<'_> {
        NetworkAnalytics::new(&self.store, self.scorer.as_ref(), &self.config.critical_path)
    }

    pub fn nodes(&self) -> Vec<&SectorNode> {
        self.store.nodes().collect()
    }

    pub fn relationships(&self) -> Vec<&SectorRelationship> {
        self.store.relationships().collect()
    }

    pub fn relationship_matrix(&self) -> &RelationshipMatrix {
        self.store.matrix()
    }

    pub fn network_stats(&self) -> &NetworkStats {
        self.store.stats()
    }

    pub fn dependency_map(&self, id: SectorId) -> Option<DependencyMap> {
        self.analytics().dependency_map(id)
    }

    pub fn strongest_connections(&self, limit: usize) -> Vec<&SectorRelationship> {
        self.store.get_strongest_connections(limit)
    }

    /// Leaderboard sized by `influence.limit`
    pub fn influence_ranking(&self) -> Vec<InfluenceEntry> {
        self.analytics().influence_ranking(self.config.influence.limit)
    }

    pub fn hierarchy_stats(&self) -> HierarchyStats {
        self.analytics().hierarchy_stats()
    }

    pub fn critical_paths(&self) -> Vec<CriticalPath> {
        self.analytics().critical_paths()
    }

    pub fn export_hierarchy_data(&self) -> NetworkResult<String> {
        export::export_hierarchy_data(&self.analytics())
    }

    pub fn export_matrix_data(&self) -> String {
        export::export_matrix_data(&self.analytics())
    }
}

/// Evenly spaced position on the layout circle, starting at angle 0
fn circular_position(layout: &LayoutConfig, index: usize, total: usize) -> (f64, f64) {
    if total == 0 {
        return (layout.center_x, layout.center_y);
    }
    let angle = TAU * index as f64 / total as f64;
    (
        layout.center_x + layout.radius * angle.cos(),
        layout.center_y + layout.radius * angle.sin(),
    )
}
