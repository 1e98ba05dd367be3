use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hsomni::graph::{RelationshipStore, RelationshipType, SectorNode, SectorRelationship, SectorTier};
use hsomni::{NetworkConfig, SectorNetwork, SectorRecord};

const NAMES: [&str; 8] = [
    "Tech", "Fintech", "Fashion", "Beauty", "Travel", "Hospitality", "Food", "Health",
];

fn records(size: u64) -> Vec<SectorRecord> {
    (1..=size)
        .map(|i| SectorRecord::new(i, format!("{} {}", NAMES[(i % 8) as usize], i)))
        .collect()
}

fn seeded_network(size: u64) -> SectorNetwork {
    let mut config = NetworkConfig::default();
    config.synergy.seed = Some(7);
    let mut network = SectorNetwork::new(config);
    network.seed(records(size));
    network
}

/// Every insert rebuilds the matrix and statistics
fn bench_store_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_relationship");

    for size in [50u64, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = RelationshipStore::new();
                for id in 1..=size {
                    store.store_node(SectorNode::new(id, format!("Sector {}", id), SectorTier::Standard));
                }
                for id in 1..size {
                    store.store_relationship(SectorRelationship::new(
                        id,
                        id + 1,
                        0.5,
                        RelationshipType::Synergy,
                    ));
                }
                criterion::black_box(store.stats().density);
            });
        });
    }
    group.finish();
}

/// Circular layout plus pairwise generation
fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");
    group.sample_size(10);

    for size in [50u64, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let network = seeded_network(size);
                criterion::black_box(network.store().relationship_count());
            });
        });
    }
    group.finish();
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [50u64, 200].iter() {
        let network = seeded_network(*size);

        group.bench_with_input(BenchmarkId::new("influence_ranking", size), size, |b, _| {
            b.iter(|| criterion::black_box(network.influence_ranking().len()));
        });
        group.bench_with_input(BenchmarkId::new("critical_paths", size), size, |b, _| {
            b.iter(|| criterion::black_box(network.critical_paths().len()));
        });
        group.bench_with_input(BenchmarkId::new("matrix_export", size), size, |b, _| {
            b.iter(|| criterion::black_box(network.export_matrix_data().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_store_relationship, bench_seed, bench_analytics);
criterion_main!(benches);
