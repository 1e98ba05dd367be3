//! Network configuration
//!
//! Every tunable of the sector network lives here with its default. A YAML
//! file may override any subset of fields; missing fields keep defaults.

use crate::error::NetworkResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub source: SourceConfig,
    pub layout: LayoutConfig,
    pub synergy: SynergyConfig,
    pub influence: InfluenceConfig,
    pub critical_path: CriticalPathConfig,
}

impl NetworkConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> NetworkResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file
    pub fn load(path: impl AsRef<Path>) -> NetworkResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

/// Where sector records come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the catalog API; sectors are read from `{base_url}/api/sectors`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Circular layout used to position seeded nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            center_y: 300.0,
            radius: 250.0,
        }
    }
}

/// Synthetic relationship generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyConfig {
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Half-width of the uniform jitter added to every base strength
    pub jitter: f64,
    /// Pairs scoring below this get no edge
    pub min_strength: f64,
    /// Base strength for pairs without a known synergy
    pub baseline: f64,
}

impl Default for SynergyConfig {
    fn default() -> Self {
        Self {
            seed: None,
            jitter: 0.2,
            min_strength: 0.3,
            baseline: 0.35,
        }
    }
}

/// Weights of the influence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    pub dependent_weight: f64,
    pub connection_weight: f64,
    pub child_weight: f64,
    /// Leaderboard size
    pub limit: usize,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            dependent_weight: 2.0,
            connection_weight: 1.0,
            child_weight: 3.0,
            limit: 10,
        }
    }
}

/// Critical path heuristic thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalPathConfig {
    /// How many of the strongest edges are examined
    pub candidates: usize,
    /// Level difference must exceed this
    pub min_level_gap: usize,
    /// Strength must exceed this
    pub min_strength: f64,
}

impl Default for CriticalPathConfig {
    fn default() -> Self {
        Self {
            candidates: 20,
            min_level_gap: 1,
            min_strength: 0.7,
        }
    }
}
