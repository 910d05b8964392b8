//! Travel Time - shortest-path travel estimates over a station network
//!
//! Builds an undirected graph of named stations from distance-labelled edges,
//! runs Dijkstra's relaxation loop from an explicit origin, and answers two
//! derived queries against the resulting distance table: the travel time to a
//! station and the route taken to reach it.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    engine::{FrontierKind, RunStats, ShortestPathEngine},
    queries::{render_route, TravelTimeModel},
    table::{DistanceEntry, DistanceTable, Predecessor},
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::station_graph::StationGraph;
pub use graph::Edge;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Station not found: {0}")]
    KeyNotFound(String),

    #[error("Station {0} is unreachable from the origin")]
    UnreachableNode(String),

    #[error("Invalid edge weight {weight} between {from} and {to}")]
    InvalidEdgeWeight { from: String, to: String, weight: i64 },

    #[error("Edge between {from:?} and {to:?} has an empty station name")]
    InvalidStationName { from: String, to: String },

    #[error("Malformed edge record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Predecessor chain for {0} does not reach the origin")]
    BrokenPredecessorChain(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
