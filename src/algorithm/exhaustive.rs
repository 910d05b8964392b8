use crate::algorithm::table::DistanceTable;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Distance, Graph};
use crate::{Error, Result};

/// Reference solver that enumerates every simple path from the origin
///
/// Exponential in the size of the graph, so it refuses graphs larger than
/// `max_stations`. Used to cross-check [`ShortestPathEngine`] on small inputs.
///
/// [`ShortestPathEngine`]: crate::algorithm::engine::ShortestPathEngine
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    max_stations: usize,
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        ExhaustiveSearch { max_stations: 12 }
    }

    /// Set the largest graph the search will accept
    pub fn with_max_stations(mut self, max_stations: usize) -> Self {
        self.max_stations = max_stations;
        self
    }
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ExhaustiveSearch
where
    W: Distance,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, origin: &str) -> Result<DistanceTable<W>> {
        if graph.station_count() > self.max_stations {
            return Err(Error::AlgorithmError(format!(
                "exhaustive search limited to {} stations, graph has {}",
                self.max_stations,
                graph.station_count()
            )));
        }

        let mut table = DistanceTable::initialize(graph, origin)?;
        let mut path = vec![origin.to_string()];
        explore(graph, &mut table, &mut path, W::zero());
        Ok(table)
    }

    fn name(&self) -> &'static str {
        "Exhaustive"
    }
}

fn explore<W, G>(graph: &G, table: &mut DistanceTable<W>, path: &mut Vec<String>, distance: W)
where
    W: Distance,
    G: Graph<W>,
{
    let current = match path.last() {
        Some(station) => station.clone(),
        None => return,
    };

    for (neighbor, weight) in graph.neighbors(&current) {
        if path.iter().any(|station| station == neighbor) {
            continue;
        }
        let total = match distance.checked_add(&weight) {
            Some(total) => total,
            None => continue,
        };

        if total < table.raw_distance(neighbor) {
            table.relax(neighbor, &current, total);
        }

        path.push(neighbor.to_string());
        explore(graph, table, path, total);
        path.pop();
    }
}
