//! HSOMNI9000 Sector Network
//!
//! In-memory relationship analytics over the catalog's business sectors:
//! a weighted graph of sectors, derived adjacency matrix and statistics,
//! and the dashboard analytics built on top (dependency maps, hierarchy
//! levels, influence leaderboard, critical paths, exports).
//!
//! # Layout
//!
//! - [`graph`]: nodes, relationships, matrix, statistics and the store
//! - [`algo`]: adapter from the store to `hsomni-graph-algorithms` views
//! - [`analytics`]: rankings, hierarchy, critical paths, synthetic generation, exports
//! - [`sector`]: typed sector records and where they are loaded from
//! - [`network`]: the [`SectorNetwork`] context tying it all together
//!
//! Nothing is persisted. A network lives as long as its [`SectorNetwork`].
//!
//! ## Example Usage
//!
//! ```rust
//! use hsomni::graph::{RelationshipStore, RelationshipType, SectorId, SectorNode, SectorRelationship, SectorTier};
//!
//! let mut store = RelationshipStore::new();
//! for id in 1..=3 {
//!     store.store_node(SectorNode::new(id, format!("Sector {}", id), SectorTier::Standard));
//! }
//! store.store_relationship(SectorRelationship::new(1, 2, 0.8, RelationshipType::Dependency));
//!
//! let lookup = store.get_dependencies(SectorId(2));
//! assert_eq!(lookup.dependents[0].id, SectorId(1));
//! assert_eq!(store.stats().isolated_nodes, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod analytics;
pub mod config;
pub mod error;
pub mod graph;
pub mod network;
pub mod sector;

// Re-export main types for convenience
pub use graph::{
    DependencyLookup, MatrixCell, NetworkStats, NodeUpdate, RelationshipKey, RelationshipMatrix,
    RelationshipStore, RelationshipType, SectorId, SectorNode, SectorRelationship, SectorTier,
};

pub use analytics::{
    CriticalPath, DependencyMap, HierarchyStats, InfluenceEntry, InfluenceScorer,
    NetworkAnalytics, RelationshipStrategy, SynergyStrategy, WeightedInfluence,
};

pub use config::NetworkConfig;
pub use error::{NetworkError, NetworkResult};
pub use network::SectorNetwork;
pub use sector::{SectorClient, SectorMetadata, SectorRecord, SectorSource};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
