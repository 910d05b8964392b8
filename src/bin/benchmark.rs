use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use travel_time::algorithm::{FrontierKind, ShortestPathEngine};
use travel_time::graph::generators::{generate_connected_network, station_name};
use travel_time::graph::{Graph, StationGraph};

// Function to benchmark one frontier on a graph
fn benchmark_frontier(kind: FrontierKind, graph: &StationGraph<u64>, origin: &str) -> Duration {
    println!("Running {:?} on graph with {} stations...", kind, graph.station_count());

    let engine = ShortestPathEngine::new().with_frontier(kind);
    let start = Instant::now();
    let result = engine.run_with_stats(graph, origin);
    let duration = start.elapsed();

    match result {
        Ok((table, stats)) => println!(
            "  - Reached {} stations in {:?} ({} pushes, {} stale pops)",
            table.reachable_count(),
            duration,
            stats.pushes,
            stats.stale_pops
        ),
        Err(e) => println!("  - Failed: {}", e),
    }

    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = vec![100, 500, 1_000, 2_000, 5_000];
    // Extra edges per station on top of the spanning tree
    let edge_factor = 2;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: ordered stack vs binary heap frontier");
    println!("Edge factor: {} extra edges per station", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating connected network with {} stations...", size);
        let edges = generate_connected_network(&mut rng, size, size * edge_factor, 100);
        let graph: StationGraph<u64> = StationGraph::from_edges(edges)?;
        let origin = station_name(0);

        let stack_time = benchmark_frontier(FrontierKind::OrderedStack, &graph, &origin);
        let heap_time = benchmark_frontier(FrontierKind::BinaryHeap, &graph, &origin);
        results.push((size, stack_time, heap_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10}", "Stations", "Stack (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, stack_time, heap_time) in &results {
        let speedup = stack_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<10.2}",
            size,
            stack_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }

    Ok(())
}
