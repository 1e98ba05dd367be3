//! Derived adjacency matrix
//!
//! Rebuilt wholesale from the relationship set after every mutation.

use super::edge::SectorRelationship;
use super::types::{RelationshipType, SectorId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// One populated matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub strength: f64,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub bidirectional: bool,
}

impl From<&SectorRelationship> for MatrixCell {
    fn from(edge: &SectorRelationship) -> Self {
        MatrixCell {
            strength: edge.strength,
            relationship_type: edge.relationship_type,
            bidirectional: edge.bidirectional,
        }
    }
}

/// `source -> target -> cell`
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationshipMatrix {
    rows: FxHashMap<SectorId, FxHashMap<SectorId, MatrixCell>>,
}

impl RelationshipMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the matrix from scratch.
    ///
    /// Edges are applied in iteration order; a bidirectional edge fills both
    /// `[a][b]` and `[b][a]`, so a later edge stored under the reverse key
    /// overwrites the mirrored cell.
    pub fn rebuild<'a>(relationships: impl IntoIterator<Item = &'a SectorRelationship>) -> Self {
        let mut matrix = Self::new();
        for edge in relationships {
            let cell = MatrixCell::from(edge);
            matrix.insert(edge.source_id, edge.target_id, cell);
            if edge.bidirectional {
                matrix.insert(edge.target_id, edge.source_id, cell);
            }
        }
        matrix
    }

    fn insert(&mut self, source: SectorId, target: SectorId, cell: MatrixCell) {
        self.rows.entry(source).or_default().insert(target, cell);
    }

    pub fn get(&self, source: SectorId, target: SectorId) -> Option<&MatrixCell> {
        self.rows.get(&source)?.get(&target)
    }

    /// All populated cells of a row
    pub fn row(&self, source: SectorId) -> Option<&FxHashMap<SectorId, MatrixCell>> {
        self.rows.get(&source)
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
