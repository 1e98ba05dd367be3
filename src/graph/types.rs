//! Core type definitions for the sector network

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a sector node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SectorId(pub u64);

impl SectorId {
    pub fn new(id: u64) -> Self {
        SectorId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SectorId {
    fn from(id: u64) -> Self {
        SectorId(id)
    }
}

/// Storage key of a relationship: the ordered (source, target) pair.
///
/// Renders as `"{source}-{target}"`. A bidirectional edge is still stored
/// under a single key, the one it was inserted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipKey {
    pub source: SectorId,
    pub target: SectorId,
}

impl RelationshipKey {
    pub fn new(source: SectorId, target: SectorId) -> Self {
        Self { source, target }
    }

    /// The same pair in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl fmt::Display for RelationshipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Sector category tier, ordered from cheapest to most comprehensive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorTier {
    Basic,
    #[default]
    Standard,
    Professional,
    Premium,
    Enterprise,
}

impl SectorTier {
    pub const ALL: [SectorTier; 5] = [
        SectorTier::Basic,
        SectorTier::Standard,
        SectorTier::Professional,
        SectorTier::Premium,
        SectorTier::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectorTier::Basic => "basic",
            SectorTier::Standard => "standard",
            SectorTier::Professional => "professional",
            SectorTier::Premium => "premium",
            SectorTier::Enterprise => "enterprise",
        }
    }

    /// Tier implied by how many brands a sector carries
    pub fn from_brand_count(count: u32) -> Self {
        match count {
            0..=9 => SectorTier::Basic,
            10..=24 => SectorTier::Standard,
            25..=49 => SectorTier::Professional,
            50..=99 => SectorTier::Premium,
            _ => SectorTier::Enterprise,
        }
    }
}

impl fmt::Display for SectorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectorTier {
    type Err = crate::error::NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectorTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::error::NetworkError::InvalidTier(s.to_string()))
    }
}

/// Kind of relationship between two sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Integration,
    Synergy,
    Dependency,
    Collaboration,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Integration => "integration",
            RelationshipType::Synergy => "synergy",
            RelationshipType::Dependency => "dependency",
            RelationshipType::Collaboration => "collaboration",
        }
    }

    /// Creation-time heuristic. Stored edges are never re-checked against it.
    pub fn from_strength(strength: f64) -> Self {
        if strength >= 0.8 {
            RelationshipType::Integration
        } else if strength >= 0.6 {
            RelationshipType::Synergy
        } else if strength >= 0.4 {
            RelationshipType::Dependency
        } else {
            RelationshipType::Collaboration
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
