use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::table::DistanceTable;
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{Frontier, FrontierEntry, HeapFrontier, OrderedFrontier, VisitedSet};
use crate::graph::{Distance, Graph};
use crate::{Error, Result};

/// Which frontier structure drives the relaxation loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierKind {
    /// Sorted stack with linear-scan insertion
    #[default]
    OrderedStack,
    /// Binary heap with lazy deletion
    BinaryHeap,
}

impl FromStr for FrontierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stack" | "ordered-stack" => Ok(FrontierKind::OrderedStack),
            "heap" | "binary-heap" => Ok(FrontierKind::BinaryHeap),
            other => Err(Error::AlgorithmError(format!(
                "unknown frontier kind: {}",
                other
            ))),
        }
    }
}

/// Counters collected during one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Entries taken off the frontier
    pub pops: usize,
    /// Pops of stations that were already finalized
    pub stale_pops: usize,
    /// Strict improvements written to the distance table
    pub relaxations: usize,
    /// Entries placed on the frontier
    pub pushes: usize,
    /// Stations finalized by the run
    pub finalized: usize,
}

/// Dijkstra's algorithm over a station graph
#[derive(Debug, Default, Clone)]
pub struct ShortestPathEngine {
    frontier: FrontierKind,
}

impl ShortestPathEngine {
    /// Creates an engine using the ordered-stack frontier
    pub fn new() -> Self {
        ShortestPathEngine::default()
    }

    /// Selects the frontier structure
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Computes the distance table for `origin`
    pub fn run<W, G>(&self, graph: &G, origin: &str) -> Result<DistanceTable<W>>
    where
        W: Distance,
        G: Graph<W>,
    {
        self.run_with_stats(graph, origin).map(|(table, _)| table)
    }

    /// Computes the distance table for `origin` along with run counters
    pub fn run_with_stats<W, G>(&self, graph: &G, origin: &str) -> Result<(DistanceTable<W>, RunStats)>
    where
        W: Distance,
        G: Graph<W>,
    {
        match self.frontier {
            FrontierKind::OrderedStack => relax_all(graph, origin, OrderedFrontier::new()),
            FrontierKind::BinaryHeap => relax_all(graph, origin, HeapFrontier::new()),
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ShortestPathEngine
where
    W: Distance,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, origin: &str) -> Result<DistanceTable<W>> {
        self.run(graph, origin)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}

fn relax_all<W, G, F>(graph: &G, origin: &str, mut frontier: F) -> Result<(DistanceTable<W>, RunStats)>
where
    W: Distance,
    G: Graph<W>,
    F: Frontier<W>,
{
    let mut table = DistanceTable::initialize(graph, origin)?;
    let mut visited = VisitedSet::new();
    let mut stats = RunStats::default();

    frontier.push(FrontierEntry::new(origin, W::zero()));
    stats.pushes += 1;

    while let Some(current) = frontier.pop_smallest() {
        stats.pops += 1;
        if !visited.add(&current.station) {
            stats.stale_pops += 1;
            continue;
        }

        let current_dist = table.raw_distance(&current.station);
        for (neighbor, weight) in graph.neighbors(&current.station) {
            // Overflow means the candidate is no better than unreachable
            if let Some(candidate) = current_dist.checked_add(&weight) {
                if candidate < table.raw_distance(neighbor) {
                    table.relax(neighbor, &current.station, candidate);
                    stats.relaxations += 1;
                }
            }

            if !visited.contains(neighbor) {
                let distance = table.raw_distance(neighbor);
                if distance != W::max_value() {
                    frontier.push(FrontierEntry::new(neighbor, distance));
                    stats.pushes += 1;
                }
            }
        }
    }

    stats.finalized = visited.len();
    log::debug!(
        "shortest paths from {}: {} of {} stations reached ({} pops, {} stale, {} relaxations)",
        origin,
        stats.finalized,
        table.len(),
        stats.pops,
        stats.stale_pops,
        stats.relaxations
    );

    Ok((table, stats))
}
