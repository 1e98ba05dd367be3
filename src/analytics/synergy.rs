//! Synthetic relationship generation
//!
//! The catalog stores no real sector-to-sector relationships, so demo and
//! dashboard networks are generated: a small table of known synergies sets a
//! base strength for matching sector names, a random jitter is added, and
//! the relationship type follows from the resulting strength.

use crate::config::SynergyConfig;
use crate::graph::{RelationshipType, SectorNode, SectorRelationship};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pluggable relationship generation between two sectors
pub trait RelationshipStrategy: Send {
    /// Relationship from `a` to `b`, or `None` when the pair stays unconnected
    fn relate(&mut self, a: &SectorNode, b: &SectorNode) -> Option<SectorRelationship>;
}

/// Keyword pairs with their base strength. Matching is case-insensitive on
/// sector names and symmetric.
const KNOWN_SYNERGIES: &[(&str, &str, f64)] = &[
    ("tech", "fintech", 0.85),
    ("tech", "education", 0.7),
    ("fashion", "beauty", 0.8),
    ("food", "health", 0.7),
    ("food", "agriculture", 0.85),
    ("travel", "hospitality", 0.85),
    ("automotive", "energy", 0.75),
    ("media", "entertainment", 0.85),
    ("gaming", "entertainment", 0.8),
    ("real estate", "finance", 0.7),
    ("retail", "logistics", 0.8),
    ("sports", "health", 0.75),
];

/// Base strength for a pair of sector names
pub fn base_strength(a: &str, b: &str, baseline: f64) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    KNOWN_SYNERGIES
        .iter()
        .filter(|(x, y, _)| {
            (a.contains(x) && b.contains(y)) || (a.contains(y) && b.contains(x))
        })
        .map(|&(_, _, strength)| strength)
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
        .unwrap_or(baseline)
}

/// Known-synergy table plus seeded uniform jitter
pub struct SynergyStrategy {
    config: SynergyConfig,
    rng: StdRng,
}

impl SynergyStrategy {
    pub fn new(config: SynergyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    fn jitter(&mut self) -> f64 {
        let width = self.config.jitter;
        if width > 0.0 {
            self.rng.gen_range(-width..width)
        } else {
            0.0
        }
    }
}

impl RelationshipStrategy for SynergyStrategy {
    fn relate(&mut self, a: &SectorNode, b: &SectorNode) -> Option<SectorRelationship> {
        if a.id == b.id {
            return None;
        }

        let base = base_strength(&a.name, &b.name, self.config.baseline);
        let strength = (base + self.jitter()).clamp(0.0, 1.0);
        if strength < self.config.min_strength {
            return None;
        }

        let relationship_type = RelationshipType::from_strength(strength);
        let description = format!(
            "{} {} between {} and {}",
            capitalize(relationship_type.as_str()),
            match relationship_type {
                RelationshipType::Dependency => "link",
                _ => "opportunity",
            },
            a.name,
            b.name
        );

        let mut relationship = SectorRelationship::new(a.id, b.id, strength, relationship_type)
            .with_description(description);
        relationship.bidirectional = relationship_type != RelationshipType::Dependency;
        Some(relationship)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SectorTier;

    fn node(id: u64, name: &str) -> SectorNode {
        SectorNode::new(id, name, SectorTier::Standard)
    }

    fn seeded(seed: u64) -> SynergyStrategy {
        SynergyStrategy::new(SynergyConfig {
            seed: Some(seed),
            ..SynergyConfig::default()
        })
    }

    #[test]
    fn test_base_strength_table() {
        assert_eq!(base_strength("Fashion & Apparel", "Beauty", 0.35), 0.8);
        assert_eq!(base_strength("Beauty", "FASHION", 0.35), 0.8);
        assert_eq!(base_strength("Plumbing", "Astronomy", 0.35), 0.35);
        // Best match wins when several rows apply
        assert_eq!(base_strength("Fintech", "Education Tech", 0.35), 0.85);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let (a, b) = (node(1, "Media"), node(2, "Entertainment"));
        let first = seeded(42).relate(&a, &b);
        let second = seeded(42).relate(&a, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_jitter_is_deterministic() {
        let mut strategy = SynergyStrategy::new(SynergyConfig {
            seed: Some(1),
            jitter: 0.0,
            ..SynergyConfig::default()
        });

        let edge = strategy.relate(&node(1, "Travel"), &node(2, "Hospitality")).unwrap();
        assert_eq!(edge.strength, 0.85);
        assert_eq!(edge.relationship_type, RelationshipType::Integration);
        assert!(edge.bidirectional);
        assert_eq!(edge.description, "Integration opportunity between Travel and Hospitality");

        // Baseline 0.35 is above the default floor of 0.3
        let weak = strategy.relate(&node(3, "Plumbing"), &node(4, "Astronomy")).unwrap();
        assert_eq!(weak.relationship_type, RelationshipType::Collaboration);
    }

    #[test]
    fn test_below_floor_and_self_pairs_skipped() {
        let mut strategy = SynergyStrategy::new(SynergyConfig {
            seed: Some(1),
            jitter: 0.0,
            min_strength: 0.5,
            ..SynergyConfig::default()
        });
        assert!(strategy.relate(&node(1, "Plumbing"), &node(2, "Astronomy")).is_none());
        assert!(strategy.relate(&node(1, "Tech"), &node(1, "Tech")).is_none());
    }

    #[test]
    fn test_dependency_is_one_way() {
        let mut strategy = SynergyStrategy::new(SynergyConfig {
            seed: Some(1),
            jitter: 0.0,
            baseline: 0.45,
            ..SynergyConfig::default()
        });
        let edge = strategy.relate(&node(1, "Plumbing"), &node(2, "Astronomy")).unwrap();
        assert_eq!(edge.relationship_type, RelationshipType::Dependency);
        assert!(!edge.bidirectional);
        assert_eq!(edge.description, "Dependency link between Plumbing and Astronomy");
    }

    #[test]
    fn test_strength_clamped() {
        let mut strategy = SynergyStrategy::new(SynergyConfig {
            seed: Some(9),
            jitter: 0.5,
            baseline: 0.95,
            min_strength: 0.0,
            ..SynergyConfig::default()
        });
        for id in 2..50 {
            let edge = strategy.relate(&node(1, "A"), &node(id, "B")).unwrap();
            assert!((0.0..=1.0).contains(&edge.strength));
        }
    }
}
