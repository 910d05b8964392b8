//! Ordered stack vs binary heap frontier on generated station networks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use travel_time::algorithm::{FrontierKind, ShortestPathEngine, TravelTimeModel};
use travel_time::graph::generators::generate_connected_network;
use travel_time::graph::StationGraph;

fn connected_network(stations: usize) -> StationGraph<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    let edges = generate_connected_network(&mut rng, stations, stations * 2, 100);
    match StationGraph::from_edges(edges) {
        Ok(graph) => graph,
        Err(e) => panic!("generated network is invalid: {}", e),
    }
}

fn bench_frontiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for &size in &[100usize, 1_000, 5_000] {
        let graph = connected_network(size);
        for kind in [FrontierKind::OrderedStack, FrontierKind::BinaryHeap] {
            let engine = ShortestPathEngine::new().with_frontier(kind);
            group.bench_with_input(BenchmarkId::new(format!("{:?}", kind), size), &graph, |b, graph| {
                b.iter(|| engine.run(black_box(graph), black_box("S0")))
            });
        }
    }

    group.finish();
}

fn bench_travel_times(c: &mut Criterion) {
    let graph = connected_network(2_000);
    let table = match ShortestPathEngine::new().run(&graph, "S0") {
        Ok(table) => table,
        Err(e) => panic!("run failed: {}", e),
    };
    let model = TravelTimeModel::default();

    c.bench_function("travel_times_2000", |b| {
        b.iter(|| model.travel_times(black_box(&table)))
    });
}

criterion_group!(benches, bench_frontiers, bench_travel_times);
criterion_main!(benches);
