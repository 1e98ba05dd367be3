use hsomni::graph::{
    RelationshipStore, RelationshipType, SectorId, SectorNode, SectorRelationship, SectorTier,
};
use hsomni::{NetworkConfig, SectorNetwork, SectorRecord};

fn store_with_nodes(count: u64) -> RelationshipStore {
    let mut store = RelationshipStore::new();
    for id in 1..=count {
        store.store_node(SectorNode::new(id, format!("Sector {}", id), SectorTier::Standard));
    }
    store
}

#[test]
fn test_dependency_scenario() {
    let mut store = store_with_nodes(3);
    store.store_relationship(SectorRelationship::new(1, 2, 0.8, RelationshipType::Dependency));

    let of_two = store.get_dependencies(SectorId(2));
    let dependents: Vec<SectorId> = of_two.dependents.iter().map(|n| n.id).collect();
    assert_eq!(dependents, vec![SectorId(1)]);

    let of_one = store.get_dependencies(SectorId(1));
    let dependencies: Vec<SectorId> = of_one.dependencies.iter().map(|n| n.id).collect();
    assert_eq!(dependencies, vec![SectorId(2)]);

    let of_three = store.get_dependencies(SectorId(3));
    assert!(of_three.dependencies.is_empty());
    assert!(of_three.dependents.is_empty());
}

#[test]
fn test_star_topology_stats() {
    let mut store = store_with_nodes(5);
    for target in 2..=5 {
        store.store_relationship(SectorRelationship::new(1, target, 0.6, RelationshipType::Synergy));
    }

    let stats = store.stats();
    assert_eq!(stats.isolated_nodes, 0);
    assert_eq!(stats.max_connections, 4);
    assert_eq!(stats.total_relationships, 4);
}

#[test]
fn test_connections_match_edges() {
    let mut store = store_with_nodes(6);
    let edges = [(1, 2), (1, 3), (2, 3), (4, 1), (5, 5), (3, 4)];
    for (s, t) in edges {
        store.store_relationship(SectorRelationship::new(s, t, 0.5, RelationshipType::Collaboration));
    }

    for node in store.nodes() {
        let touching = store.relationships().filter(|e| e.touches(node.id)).count();
        assert_eq!(node.connections, touching, "sector {}", node.id);
    }
    assert_eq!(store.node(SectorId(6)).unwrap().connections, 0);
    assert_eq!(store.stats().isolated_nodes, 1);
}

#[test]
fn test_edge_to_unknown_sector_still_counts() {
    let mut store = store_with_nodes(2);
    store.store_relationship(SectorRelationship::new(1, 99, 0.5, RelationshipType::Synergy));

    let touching = store.relationships().filter(|e| e.touches(SectorId(1))).count();
    assert_eq!(store.node(SectorId(1)).unwrap().connections, touching);
    assert_eq!(touching, 1);

    let stats = store.stats();
    assert_eq!(stats.isolated_nodes, 1);
    assert_eq!(stats.max_connections, 1);
    assert!((stats.avg_connections - 0.5).abs() < 1e-9);
    assert_eq!(stats.density, 0.0);
}

#[test]
fn test_density_stays_in_range() {
    let mut store = store_with_nodes(4);
    for s in 1..=4u64 {
        for t in 1..=4u64 {
            store.store_relationship(SectorRelationship::new(s, t, 0.5, RelationshipType::Synergy));
            let density = store.stats().density;
            assert!((0.0..=100.0).contains(&density), "density {}", density);
        }
    }
    assert!((store.stats().density - 100.0).abs() < 1e-9);
}

#[test]
fn test_strongest_connections_sorted_and_idempotent() {
    let mut store = store_with_nodes(5);
    let strengths = [0.3, 0.9, 0.1, 0.75, 0.5, 0.9];
    let pairs = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 3)];
    for ((s, t), strength) in pairs.into_iter().zip(strengths) {
        store.store_relationship(SectorRelationship::new(
            s,
            t,
            strength,
            RelationshipType::from_strength(strength),
        ));
    }

    let top = store.get_strongest_connections(4);
    assert_eq!(top.len(), 4);
    assert!(top.windows(2).all(|w| w[0].strength >= w[1].strength));
    assert_eq!(store.get_strongest_connections(4), top);
    assert_eq!(store.get_strongest_connections(100).len(), 6);
}

#[test]
fn test_bidirectional_matrix() {
    let mut store = store_with_nodes(2);
    store.store_relationship(
        SectorRelationship::new(1, 2, 0.9, RelationshipType::Integration).bidirectional(),
    );

    let forward = store.matrix().get(SectorId(1), SectorId(2)).unwrap();
    let backward = store.matrix().get(SectorId(2), SectorId(1)).unwrap();
    assert_eq!(forward.strength, 0.9);
    assert_eq!(backward.strength, 0.9);
    assert!(backward.bidirectional);

    // Stored once, under the insertion key
    assert_eq!(store.relationship_count(), 1);
    assert!(store.get_relationship(SectorId(2), SectorId(1)).is_none());
}

#[test]
fn test_seeded_network_end_to_end() {
    let mut config = NetworkConfig::default();
    config.synergy.seed = Some(2024);
    let mut network = SectorNetwork::new(config);

    let records = vec![
        SectorRecord::new(1, "Tech"),
        SectorRecord::new(2, "Fintech"),
        SectorRecord::new(3, "Fashion"),
        SectorRecord::new(4, "Beauty"),
        SectorRecord::new(5, "Travel"),
        SectorRecord::new(6, "Hospitality"),
    ];
    network.seed(records);

    assert!(network.is_initialized());
    assert_eq!(network.nodes().len(), 6);
    let stats = network.network_stats();
    assert!((0.0..=100.0).contains(&stats.density));
    assert!(stats.total_relationships > 0);

    let ranking = network.influence_ranking();
    assert_eq!(ranking.len(), 6);
    assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));

    for path in network.critical_paths() {
        if path.critical {
            assert!(path.relationship.strength > 0.7);
            assert!(path.level_gap > 1);
        }
    }

    let csv = network.export_matrix_data();
    assert_eq!(csv.lines().count(), 7);
    assert!(csv.starts_with("Sector,Tech,Fintech,Fashion,Beauty,Travel,Hospitality\n"));

    let json: serde_json::Value =
        serde_json::from_str(&network.export_hierarchy_data().unwrap()).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);
}
