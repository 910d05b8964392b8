//! Travel times and route traces read from a completed distance table

use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::table::{DistanceTable, Predecessor};
use crate::data_structures::AssociativeMap;
use crate::graph::Distance;
use crate::{Error, Result};

impl<W> DistanceTable<W>
where
    W: Distance,
{
    /// Walks the predecessor chain from `station` back to the origin
    ///
    /// The returned chain starts at `station` and ends at the origin.
    fn chain<'a>(&'a self, station: &'a str) -> Result<Vec<&'a str>> {
        let entry = self.entry(station)?;
        if !entry.is_reachable() {
            return Err(Error::UnreachableNode(station.to_string()));
        }

        let mut chain = Vec::new();
        let mut current = station;
        loop {
            chain.push(current);
            if chain.len() > self.len() {
                return Err(Error::BrokenPredecessorChain(station.to_string()));
            }
            match self.predecessor(current)? {
                Predecessor::Origin => return Ok(chain),
                Predecessor::Via(previous) => current = previous.as_str(),
                Predecessor::Unreached => {
                    return Err(Error::BrokenPredecessorChain(station.to_string()))
                }
            }
        }
    }

    /// Number of edges on the shortest path from the origin to `station`
    pub fn hop_count(&self, station: &str) -> Result<usize> {
        Ok(self.chain(station)?.len() - 1)
    }

    /// Stations on the shortest path, origin first and `station` last
    pub fn trace_route(&self, station: &str) -> Result<Vec<String>> {
        Ok(self
            .chain(station)?
            .into_iter()
            .rev()
            .map(str::to_string)
            .collect())
    }
}

/// Renders a route as `Origin->A->B`
pub fn render_route(route: &[String]) -> String {
    route.join("->")
}

/// Converts distances and stop counts into minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeModel {
    /// Minutes spent per unit of distance
    pub minutes_per_distance_unit: f64,
    /// Minutes spent per hop along the route
    pub minutes_per_stop: f64,
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        TravelTimeModel {
            minutes_per_distance_unit: 2.5,
            minutes_per_stop: 15.0,
        }
    }
}

impl TravelTimeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minutes_per_distance_unit(mut self, minutes: f64) -> Self {
        self.minutes_per_distance_unit = minutes;
        self
    }

    pub fn with_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.minutes_per_stop = minutes;
        self
    }

    /// Minutes from the origin to `station`
    pub fn time_for<W>(&self, table: &DistanceTable<W>, station: &str) -> Result<f64>
    where
        W: Distance,
    {
        let distance = table
            .distance(station)?
            .ok_or_else(|| Error::UnreachableNode(station.to_string()))?;
        let hops = table.hop_count(station)?;
        let distance = distance.to_f64().ok_or_else(|| {
            Error::AlgorithmError(format!("distance {} does not fit in f64", distance))
        })?;

        Ok(distance * self.minutes_per_distance_unit + hops as f64 * self.minutes_per_stop)
    }

    /// Minutes for every reachable station
    pub fn travel_times<W>(&self, table: &DistanceTable<W>) -> Result<AssociativeMap<String, f64>>
    where
        W: Distance,
    {
        let stations: Vec<&str> = table.stations().collect();
        let timed: Vec<Option<(String, f64)>> = stations
            .into_par_iter()
            .map(|station| match self.time_for(table, station) {
                Ok(minutes) => Ok(Some((station.to_string(), minutes))),
                Err(Error::UnreachableNode(_)) => Ok(None),
                Err(e) => Err(e),
            })
            .collect::<Result<_>>()?;

        Ok(timed.into_iter().flatten().collect())
    }

    /// Every reachable station with its minutes, quickest first
    pub fn sorted_travel_times<W>(&self, table: &DistanceTable<W>) -> Result<Vec<(String, f64)>>
    where
        W: Distance,
    {
        let mut times: Vec<(String, f64)> = self
            .travel_times(table)?
            .iter()
            .map(|(station, minutes)| (station.clone(), *minutes))
            .collect();
        times.sort_by_key(|(station, minutes)| (OrderedFloat(*minutes), station.clone()));
        Ok(times)
    }
}
