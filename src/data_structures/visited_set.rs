use crate::data_structures::AssociativeMap;

/// Stations whose shortest distance has been finalized
///
/// Membership is by name only. There is no removal.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    members: AssociativeMap<String, ()>,
}

impl VisitedSet {
    pub fn new() -> Self {
        VisitedSet {
            members: AssociativeMap::new(),
        }
    }

    /// Marks a station as finalized; returns false if it already was
    pub fn add(&mut self, station: &str) -> bool {
        if self.members.contains_key(station) {
            return false;
        }
        self.members.put(station.to_string(), ());
        true
    }

    pub fn contains(&self, station: &str) -> bool {
        self.members.contains_key(station)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
