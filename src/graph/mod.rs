//! Sector relationship network
//!
//! This module implements the in-memory network data model:
//! - Sector nodes with tiers and layout positions
//! - Weighted, typed relationships, optionally bidirectional
//! - A derived adjacency matrix and network statistics, rebuilt on every mutation

pub mod edge;
pub mod matrix;
pub mod node;
pub mod stats;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::SectorRelationship;
pub use matrix::{MatrixCell, RelationshipMatrix};
pub use node::{NodeUpdate, SectorNode};
pub use stats::NetworkStats;
pub use store::{DependencyLookup, RelationshipStore};
pub use types::{RelationshipKey, RelationshipType, SectorId, SectorTier};
