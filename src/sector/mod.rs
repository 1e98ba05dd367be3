//! Sector data boundary
//!
//! Typed sector records and the sources they are loaded from.

pub mod client;
pub mod record;

pub use client::{load_sectors_from_path, SectorClient, SectorSource};
pub use record::{SectorMetadata, SectorRecord};
