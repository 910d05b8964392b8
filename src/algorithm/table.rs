use std::collections::BTreeMap;

use crate::data_structures::AssociativeMap;
use crate::graph::{Distance, Graph};
use crate::{Error, Result};

/// How a station was reached in the shortest-path tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predecessor {
    /// No path from the origin has been found
    Unreached,
    /// The station is the origin of the run
    Origin,
    /// The station is reached through the named neighbor
    Via(String),
}

/// Best known distance and predecessor for one station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceEntry<W>
where
    W: Distance,
{
    predecessor: Predecessor,
    /// `W::max_value()` while unreached
    distance: W,
}

impl<W> DistanceEntry<W>
where
    W: Distance,
{
    pub(crate) fn origin() -> Self {
        DistanceEntry {
            predecessor: Predecessor::Origin,
            distance: W::zero(),
        }
    }

    pub(crate) fn unreached() -> Self {
        DistanceEntry {
            predecessor: Predecessor::Unreached,
            distance: W::max_value(),
        }
    }

    pub fn predecessor(&self) -> &Predecessor {
        &self.predecessor
    }

    /// Cumulative distance from the origin, or `None` if unreachable
    pub fn distance(&self) -> Option<W> {
        if self.is_reachable() {
            Some(self.distance)
        } else {
            None
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.predecessor != Predecessor::Unreached
    }
}

/// Distance/predecessor table produced by one shortest-path run
///
/// The table can only be built by the algorithms in this crate and is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<W>
where
    W: Distance,
{
    origin: String,
    entries: AssociativeMap<String, DistanceEntry<W>>,
}

impl<W> DistanceTable<W>
where
    W: Distance,
{
    /// Origin at zero, every other station of the graph unreached
    pub(crate) fn initialize<G>(graph: &G, origin: &str) -> Result<Self>
    where
        G: Graph<W>,
    {
        if !graph.has_station(origin) {
            return Err(Error::KeyNotFound(origin.to_string()));
        }

        let mut entries = AssociativeMap::with_capacity(graph.station_count() * 2);
        for station in graph.stations() {
            entries.put(station.to_string(), DistanceEntry::unreached());
        }
        entries.put(origin.to_string(), DistanceEntry::origin());

        Ok(DistanceTable {
            origin: origin.to_string(),
            entries,
        })
    }

    /// Raw distance with `W::max_value()` standing for unreachable
    pub(crate) fn raw_distance(&self, station: &str) -> W {
        self.entries
            .get(station)
            .map_or(W::max_value(), |entry| entry.distance)
    }

    /// Records a strictly better path to `station` through `via`
    pub(crate) fn relax(&mut self, station: &str, via: &str, distance: W) {
        let entry = DistanceEntry {
            predecessor: Predecessor::Via(via.to_string()),
            distance,
        };
        match self.entries.get_mut(station) {
            Some(slot) => *slot = entry,
            None => {
                self.entries.put(station.to_string(), entry);
            }
        }
    }

    /// The station every distance is measured from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn entry(&self, station: &str) -> Result<&DistanceEntry<W>> {
        self.entries.try_get(station)
    }

    pub fn distance(&self, station: &str) -> Result<Option<W>> {
        self.entry(station).map(DistanceEntry::distance)
    }

    pub fn predecessor(&self, station: &str) -> Result<&Predecessor> {
        self.entry(station).map(DistanceEntry::predecessor)
    }

    pub fn contains(&self, station: &str) -> bool {
        self.entries.contains_key(station)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stations with a finite distance, the origin included
    pub fn reachable_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_reachable()).count()
    }

    /// Station names in unspecified order
    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|name| name.as_str())
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DistanceEntry<W>)> + '_ {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Copies the table into a map ordered by station name
    pub fn snapshot(&self) -> BTreeMap<String, DistanceEntry<W>> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect()
    }
}
