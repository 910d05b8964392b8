use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Unsigned integer type used for edge weights and cumulative distances
///
/// `max_value()` doubles as the "unreachable" distance.
pub trait Distance: PrimInt + Unsigned + Debug + Display + Hash + Send + Sync + 'static {}

impl<T> Distance for T where T: PrimInt + Unsigned + Debug + Display + Hash + Send + Sync + 'static {}

/// Trait representing a weighted undirected graph of named stations
pub trait Graph<W>: Debug
where
    W: Distance,
{
    /// Returns the number of stations in the graph
    fn station_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the stations reachable in one hop, with the edge weight
    ///
    /// Unknown stations have no neighbors.
    fn neighbors(&self, station: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Returns true if the station appears on either side of any edge
    fn has_station(&self, station: &str) -> bool;

    /// Returns an iterator over every station name
    fn stations(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Gets the lightest edge weight between two stations, if they are adjacent
    fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.neighbors(from)
            .filter(|(name, _)| *name == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for graph construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Distance,
{
    /// Adds an undirected edge, rejecting blank station names and negative or
    /// oversized weights
    fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<()>;
}
