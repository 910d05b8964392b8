pub mod assoc_map;
pub mod frontier;
pub mod priority_queue;
pub mod visited_set;

pub use assoc_map::AssociativeMap;
pub use frontier::{Frontier, FrontierEntry, OrderedFrontier};
pub use priority_queue::HeapFrontier;
pub use visited_set::VisitedSet;
