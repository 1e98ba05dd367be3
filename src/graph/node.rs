//! Sector node implementation

use super::types::{SectorId, SectorTier};
use serde::{Deserialize, Serialize};

/// A sector in the relationship network
///
/// Nodes have:
/// - A unique ID
/// - A display name and category tier
/// - A 2D layout position, used only for rendering
/// - A denormalized connection count, recomputed by the store from its edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorNode {
    /// Unique identifier for this sector
    pub id: SectorId,

    /// Display name
    pub name: String,

    /// Category tier
    pub tier: SectorTier,

    /// Layout x coordinate
    pub x: f64,

    /// Layout y coordinate
    pub y: f64,

    /// Number of edges touching this node
    #[serde(default)]
    pub connections: usize,
}

impl SectorNode {
    /// Create a node at the origin with no connections
    pub fn new(id: impl Into<SectorId>, name: impl Into<String>, tier: SectorTier) -> Self {
        SectorNode {
            id: id.into(),
            name: name.into(),
            tier,
            x: 0.0,
            y: 0.0,
            connections: 0,
        }
    }

    /// Builder-style layout position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Apply a partial update, returning whether anything changed
    pub fn apply(&mut self, update: &NodeUpdate) -> bool {
        let mut changed = false;
        if let Some(name) = &update.name {
            if *name != self.name {
                self.name = name.clone();
                changed = true;
            }
        }
        if let Some(tier) = update.tier {
            if tier != self.tier {
                self.tier = tier;
                changed = true;
            }
        }
        if let Some((x, y)) = update.position {
            if (x, y) != (self.x, self.y) {
                self.x = x;
                self.y = y;
                changed = true;
            }
        }
        changed
    }
}

/// Partial update for an existing node. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeUpdate {
    pub name: Option<String>,
    pub tier: Option<SectorTier>,
    pub position: Option<(f64, f64)>,
}

impl NodeUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn tier(tier: SectorTier) -> Self {
        Self {
            tier: Some(tier),
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some((x, y)),
            ..Self::default()
        }
    }
}
