use crate::data_structures::AssociativeMap;
use crate::graph::traits::{Distance, Graph, MutableGraph};
use crate::graph::Edge;
use crate::{Error, Result};

/// An undirected station graph using adjacency lists keyed by station name
#[derive(Debug, Clone)]
pub struct StationGraph<W = u64>
where
    W: Distance,
{
    /// station -> [(neighbor, weight)]
    adjacency: AssociativeMap<String, Vec<(String, W)>>,

    /// Number of undirected edges added
    edge_count: usize,
}

impl<W> StationGraph<W>
where
    W: Distance,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        StationGraph {
            adjacency: AssociativeMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from a sequence of edges
    ///
    /// Fails on the first edge with an invalid weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = StationGraph::new();
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance)?;
        }
        log::debug!(
            "built station graph with {} stations and {} edges",
            graph.station_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Returns the neighbor list of a station as a slice
    pub fn adjacent(&self, station: &str) -> &[(String, W)] {
        self.adjacency
            .get(station)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of neighbor entries recorded for a station
    pub fn degree(&self, station: &str) -> usize {
        self.adjacent(station).len()
    }
}

impl<W> Default for StationGraph<W>
where
    W: Distance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for StationGraph<W>
where
    W: Distance,
{
    fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, station: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        Box::new(
            self.adjacent(station)
                .iter()
                .map(|(name, weight)| (name.as_str(), *weight)),
        )
    }

    fn has_station(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    fn stations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.keys().map(|name| name.as_str()))
    }
}

impl<W> MutableGraph<W> for StationGraph<W>
where
    W: Distance,
{
    fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<()> {
        if a.trim().is_empty() || b.trim().is_empty() {
            return Err(Error::InvalidStationName {
                from: a.to_string(),
                to: b.to_string(),
            });
        }
        let weight: W = num_traits::cast(weight).ok_or_else(|| Error::InvalidEdgeWeight {
            from: a.to_string(),
            to: b.to_string(),
            weight,
        })?;

        self.adjacency
            .get_or_insert_with(a.to_string(), Vec::new)
            .push((b.to_string(), weight));

        // A self-loop is recorded once
        if a != b {
            self.adjacency
                .get_or_insert_with(b.to_string(), Vec::new)
                .push((a.to_string(), weight));
        }

        self.edge_count += 1;
        Ok(())
    }
}
