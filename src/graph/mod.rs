pub mod generators;
pub mod loader;
pub mod station_graph;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use station_graph::StationGraph;
pub use traits::{Distance, Graph, MutableGraph};

/// An undirected, distance-labelled connection between two stations
///
/// The distance is signed so that invalid input survives parsing and is
/// rejected at graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub distance: i64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: i64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}
