//! Sector records as served by the catalog API

use crate::graph::{SectorId, SectorTier};
use serde::{Deserialize, Serialize};

/// One sector from `GET /api/sectors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRecord {
    pub id: SectorId,
    pub name: String,
    #[serde(default)]
    pub metadata: SectorMetadata,
}

impl SectorRecord {
    pub fn new(id: impl Into<SectorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: SectorMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: SectorMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Explicit metadata tier, else one derived from the brand count, else Standard
    pub fn tier(&self) -> SectorTier {
        self.metadata
            .tier
            .or_else(|| self.metadata.brand_count.map(SectorTier::from_brand_count))
            .unwrap_or_default()
    }
}

/// Sector metadata. Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectorMetadata {
    pub tier: Option<SectorTier>,
    pub brand_count: Option<u32>,
    pub subnode_count: Option<u32>,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub pricing_tier: Option<String>,
}

/// Payload shapes accepted from the sector endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SectorPayload {
    Bare(Vec<SectorRecord>),
    Sectors { sectors: Vec<SectorRecord> },
    Data { data: Vec<SectorRecord> },
}

impl SectorPayload {
    pub(crate) fn into_records(self) -> Vec<SectorRecord> {
        match self {
            SectorPayload::Bare(records) => records,
            SectorPayload::Sectors { sectors } => sectors,
            SectorPayload::Data { data } => data,
        }
    }
}
