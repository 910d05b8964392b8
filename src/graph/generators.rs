use rand::prelude::*;

use crate::graph::Edge;

/// Name given to the i-th generated station
pub fn station_name(i: usize) -> String {
    format!("S{}", i)
}

/// Generates a random station network as an edge list
///
/// Stations are named `S0..S{n-1}`. Each of the `edge_count` edges joins two
/// random distinct stations with a weight in `0..=max_weight`. Some stations
/// may end up isolated from `S0`.
pub fn generate_random_network<R: Rng>(
    rng: &mut R,
    station_count: usize,
    edge_count: usize,
    max_weight: i64,
) -> Vec<Edge> {
    assert!(station_count > 1, "need at least two stations");

    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let a = rng.gen_range(0..station_count);
        let b = rng.gen_range(0..station_count);
        if a != b {
            let weight = rng.gen_range(0..=max_weight);
            edges.push(Edge::new(station_name(a), station_name(b), weight));
        }
    }
    edges
}

/// Generates a connected network: a random spanning tree plus extra edges
pub fn generate_connected_network<R: Rng>(
    rng: &mut R,
    station_count: usize,
    extra_edges: usize,
    max_weight: i64,
) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(station_count + extra_edges);

    // Attach every new station to one already in the tree
    for i in 1..station_count {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(1..=max_weight.max(1));
        edges.push(Edge::new(station_name(parent), station_name(i), weight));
    }

    if station_count > 1 {
        edges.extend(generate_random_network(rng, station_count, extra_edges, max_weight));
    }
    edges
}

/// Generates a straight line `S0 - S1 - ... - S{n-1}` with uniform weights
pub fn generate_line(station_count: usize, weight: i64) -> Vec<Edge> {
    (1..station_count)
        .map(|i| Edge::new(station_name(i - 1), station_name(i), weight))
        .collect()
}
