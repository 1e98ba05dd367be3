//! Sector source: fetches the sector list the network is seeded from
//!
//! Remote mode reads `GET {base_url}/api/sectors`; file mode reads the same
//! JSON from disk.

use super::record::{SectorPayload, SectorRecord};
use crate::config::SourceConfig;
use crate::error::{NetworkError, NetworkResult};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the catalog's sector endpoint
#[derive(Debug, Clone)]
pub struct SectorClient {
    base_url: String,
    http_client: Client,
}

impl SectorClient {
    /// Create a client for the given base URL with reqwest's default settings
    ///
    /// # Example
    /// ```no_run
    /// # use hsomni::sector::SectorClient;
    /// let client = SectorClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout
    pub fn from_config(config: &SourceConfig) -> NetworkResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every sector record
    pub async fn fetch_sectors(&self) -> NetworkResult<Vec<SectorRecord>> {
        let url = format!("{}/api/sectors", self.base_url);
        debug!(%url, "fetching sectors");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "sector endpoint returned an error");
            return Err(NetworkError::UnexpectedStatus(status.as_u16()));
        }

        let payload: SectorPayload = response.json().await?;
        Ok(payload.into_records())
    }
}

/// Read sector records from a JSON file
pub fn load_sectors_from_path(path: impl AsRef<Path>) -> NetworkResult<Vec<SectorRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let payload: SectorPayload = serde_json::from_str(&contents)?;
    Ok(payload.into_records())
}

/// Where the network loads its sectors from
#[derive(Debug, Clone)]
pub enum SectorSource {
    Remote(SectorClient),
    File(PathBuf),
}

impl SectorSource {
    pub async fn load(&self) -> NetworkResult<Vec<SectorRecord>> {
        match self {
            SectorSource::Remote(client) => client.fetch_sectors().await,
            SectorSource::File(path) => load_sectors_from_path(path),
        }
    }

    /// Human-readable origin, for logs
    pub fn describe(&self) -> String {
        match self {
            SectorSource::Remote(client) => format!("{}/api/sectors", client.base_url()),
            SectorSource::File(path) => path.display().to_string(),
        }
    }
}
