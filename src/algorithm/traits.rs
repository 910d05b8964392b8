use crate::algorithm::table::DistanceTable;
use crate::graph::{Distance, Graph};
use crate::Result;

/// Trait for single-origin shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Distance,
    G: Graph<W>,
{
    /// Compute shortest distances from the origin to every station
    fn compute_shortest_paths(&self, graph: &G, origin: &str) -> Result<DistanceTable<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
