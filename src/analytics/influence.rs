//! Influence scoring strategies
//!
//! The influence score is a presentation heuristic for the dashboard
//! leaderboard, so it sits behind a trait and its weights come from config.

use crate::config::InfluenceConfig;

/// Graph figures an influence score is computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfluenceInputs {
    /// Sectors depending on this one
    pub dependents: usize,
    /// Edges touching this sector
    pub connections: usize,
    /// Hierarchy children (targets of outbound dependency edges)
    pub children: usize,
}

/// Pluggable influence scoring
pub trait InfluenceScorer: Send + Sync {
    fn score(&self, inputs: &InfluenceInputs) -> f64;
}

/// Weighted linear combination; defaults to `dependents*2 + connections + children*3`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedInfluence {
    pub dependent_weight: f64,
    pub connection_weight: f64,
    pub child_weight: f64,
}

impl Default for WeightedInfluence {
    fn default() -> Self {
        Self::from(&InfluenceConfig::default())
    }
}

impl From<&InfluenceConfig> for WeightedInfluence {
    fn from(config: &InfluenceConfig) -> Self {
        Self {
            dependent_weight: config.dependent_weight,
            connection_weight: config.connection_weight,
            child_weight: config.child_weight,
        }
    }
}

impl InfluenceScorer for WeightedInfluence {
    fn score(&self, inputs: &InfluenceInputs) -> f64 {
        inputs.dependents as f64 * self.dependent_weight
            + inputs.connections as f64 * self.connection_weight
            + inputs.children as f64 * self.child_weight
    }
}
