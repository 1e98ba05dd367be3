//! Relationship (edge) implementation for the sector network

use super::types::{RelationshipKey, RelationshipType, SectorId};
use serde::{Deserialize, Serialize};

/// A weighted relationship between two sectors
///
/// Relationships have:
/// - A source and target sector (stored once, keyed by that ordered pair)
/// - A strength, nominally in [0, 1] but not validated
/// - A relationship type and a human-readable description
/// - A bidirectional flag; when set, traversal and matrix population treat
///   the edge as present in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorRelationship {
    /// Sector the edge goes FROM
    pub source_id: SectorId,

    /// Sector the edge goes TO
    pub target_id: SectorId,

    /// Heuristic closeness
    pub strength: f64,

    /// Relationship type
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Present in both directions for traversal
    #[serde(default)]
    pub bidirectional: bool,
}

impl SectorRelationship {
    /// Create a one-way relationship with an empty description
    pub fn new(
        source_id: impl Into<SectorId>,
        target_id: impl Into<SectorId>,
        strength: f64,
        relationship_type: RelationshipType,
    ) -> Self {
        SectorRelationship {
            source_id: source_id.into(),
            target_id: target_id.into(),
            strength,
            relationship_type,
            description: String::new(),
            bidirectional: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Storage key of this edge
    pub fn key(&self) -> RelationshipKey {
        RelationshipKey::new(self.source_id, self.target_id)
    }

    /// Whether the sector is either endpoint
    pub fn touches(&self, id: SectorId) -> bool {
        self.source_id == id || self.target_id == id
    }

    /// Whether the edge can be followed out of `id`
    pub fn points_from(&self, id: SectorId) -> bool {
        self.source_id == id || (self.bidirectional && self.target_id == id)
    }

    /// Whether the edge can be followed into `id`
    pub fn points_to(&self, id: SectorId) -> bool {
        self.target_id == id || (self.bidirectional && self.source_id == id)
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    pub fn other_end(&self, id: SectorId) -> Option<SectorId> {
        if self.source_id == id {
            Some(self.target_id)
        } else if self.target_id == id {
            Some(self.source_id)
        } else {
            None
        }
    }

    pub fn is_dependency(&self) -> bool {
        self.relationship_type == RelationshipType::Dependency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_traversal() {
        let edge = SectorRelationship::new(1, 2, 0.8, RelationshipType::Dependency);

        assert_eq!(edge.key().to_string(), "1-2");
        assert!(edge.points_from(SectorId(1)));
        assert!(!edge.points_from(SectorId(2)));
        assert!(edge.points_to(SectorId(2)));
        assert!(!edge.points_to(SectorId(1)));
        assert!(edge.is_dependency());
    }

    #[test]
    fn test_bidirectional_traversal() {
        let edge = SectorRelationship::new(1, 2, 0.9, RelationshipType::Synergy).bidirectional();

        assert!(edge.points_from(SectorId(2)));
        assert!(edge.points_to(SectorId(1)));
        assert!(!edge.touches(SectorId(3)));
        assert_eq!(edge.other_end(SectorId(2)), Some(SectorId(1)));
        assert_eq!(edge.other_end(SectorId(3)), None);
    }

    #[test]
    fn test_json_shape() {
        let edge = SectorRelationship::new(4, 5, 0.5, RelationshipType::Collaboration)
            .with_description("shared suppliers");
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["sourceId"], 4);
        assert_eq!(json["targetId"], 5);
        assert_eq!(json["type"], "collaboration");
        assert_eq!(json["bidirectional"], false);
    }
}
