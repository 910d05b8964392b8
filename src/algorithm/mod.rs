pub mod engine;
pub mod exhaustive;
pub mod queries;
pub mod table;
pub mod traits;

pub use engine::{FrontierKind, RunStats, ShortestPathEngine};
pub use exhaustive::ExhaustiveSearch;
pub use queries::{render_route, TravelTimeModel};
pub use table::{DistanceEntry, DistanceTable, Predecessor};
pub use traits::ShortestPathAlgorithm;
