// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::geo::{self, Coordinates};
use crate::model::{Bus, BusIdx, Stop, StopIdx};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    UnknownStop { name: String },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::UnknownStop { name } => {
                write!(f, "unknown stop '{}'", name)
            }
        }
    }
}

impl std::error::Error for CatalogueError {}

/// The domain store: stops, bus lines, the directed inter-stop distance
/// table, and the stop to bus-names inverted index.
///
/// The store grows monotonically during the ingest phase
/// (stops, then distances, then buses) and is read-only afterwards.
/// Records are never moved or removed, so the index handles handed out
/// stay valid for the lifetime of the catalogue.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_name_to_idx: HashMap<String, StopIdx>,
    buses: Vec<Bus>,
    bus_name_to_idx: HashMap<String, BusIdx>,
    distances: HashMap<(StopIdx, StopIdx), u32>,
    buses_of_stop: HashMap<StopIdx, BTreeSet<String>>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: &str, coords: Coordinates) -> StopIdx {
        let stop_idx = StopIdx {
            idx: self.stops.len(),
        };
        self.stops.push(Stop {
            name: name.to_string(),
            coords,
        });
        self.stop_name_to_idx.insert(name.to_string(), stop_idx);
        stop_idx
    }

    /// Records the directed road distance in meters between two known
    /// stops. Self-loops are permitted.
    pub fn add_distance(
        &mut self,
        from_name: &str,
        to_name: &str,
        meters: u32,
    ) -> Result<(), CatalogueError> {
        let from = self.resolve_stop(from_name)?;
        let to = self.resolve_stop(to_name)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Resolves every stop name, appends the bus and updates the
    /// stop to bus-names index. Every name must be a known stop.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[&str],
        is_roundtrip: bool,
    ) -> Result<BusIdx, CatalogueError> {
        let stops = stop_names
            .iter()
            .map(|stop_name| self.resolve_stop(stop_name))
            .collect::<Result<Vec<_>, _>>()?;
        let bus_idx = BusIdx {
            idx: self.buses.len(),
        };
        for stop in &stops {
            self.buses_of_stop
                .entry(*stop)
                .or_insert_with(BTreeSet::new)
                .insert(name.to_string());
        }
        self.buses.push(Bus {
            name: name.to_string(),
            stops,
            is_roundtrip,
        });
        self.bus_name_to_idx.insert(name.to_string(), bus_idx);
        Ok(bus_idx)
    }

    pub fn find_stop(&self, name: &str) -> Option<StopIdx> {
        self.stop_name_to_idx.get(name).copied()
    }

    pub fn find_bus(&self, name: &str) -> Option<BusIdx> {
        self.bus_name_to_idx.get(name).copied()
    }

    pub fn stop(&self, stop: StopIdx) -> &Stop {
        &self.stops[stop.idx]
    }

    pub fn bus(&self, bus: BusIdx) -> &Bus {
        &self.buses[bus.idx]
    }

    pub fn nb_of_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn nb_of_buses(&self) -> usize {
        self.buses.len()
    }

    /// Stops in insertion order.
    pub fn all_stops(&self) -> impl Iterator<Item = StopIdx> {
        (0..self.stops.len()).map(|idx| StopIdx { idx })
    }

    /// Buses in insertion order.
    pub fn all_buses(&self) -> impl Iterator<Item = BusIdx> {
        (0..self.buses.len()).map(|idx| BusIdx { idx })
    }

    /// The road distance from `from` to `to`: the stored directed entry
    /// when present, the reverse entry otherwise, 0 when neither is known.
    pub fn get_distance(&self, from: StopIdx, to: StopIdx) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// The lexicographically ordered names of the buses traversing `stop`,
    /// or `None` when no bus does.
    pub fn bus_names_at(&self, stop: StopIdx) -> Option<&BTreeSet<String>> {
        self.buses_of_stop.get(&stop)
    }

    /// Summed road distance over the full expanded traversal of `bus`.
    pub fn road_route_length(&self, bus: BusIdx) -> u32 {
        self.bus(bus)
            .expanded_stops()
            .windows(2)
            .map(|leg| self.get_distance(leg[0], leg[1]))
            .sum()
    }

    /// Summed great-circle distance over the full expanded traversal.
    pub fn geo_route_length(&self, bus: BusIdx) -> f64 {
        self.bus(bus)
            .expanded_stops()
            .windows(2)
            .map(|leg| {
                geo::distance_between(&self.stop(leg[0]).coords, &self.stop(leg[1]).coords)
            })
            .sum()
    }

    fn resolve_stop(&self, name: &str) -> Result<StopIdx, CatalogueError> {
        self.find_stop(name).ok_or_else(|| CatalogueError::UnknownStop {
            name: name.to_string(),
        })
    }
}
