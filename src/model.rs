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

use crate::geo::Coordinates;

/// Handle of a stop in the catalogue. Handles are dense indices and stay
/// valid for the lifetime of the catalogue.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct StopIdx {
    pub(crate) idx: usize,
}

/// Handle of a bus line in the catalogue.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct BusIdx {
    pub(crate) idx: usize,
}

#[derive(Debug, Clone)]
pub struct Stop {
    pub name: String,
    pub coords: Coordinates,
}

/// A bus line. For a roundtrip line `stops` is the full loop; otherwise it
/// is the one-way list, and the return leg is synthesised on demand by
/// [`Bus::expanded_stops`].
#[derive(Debug, Clone)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopIdx>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Number of stops a rider passes over the whole traversal.
    pub fn stop_count(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else if self.stops.is_empty() {
            0
        } else {
            self.stops.len() * 2 - 1
        }
    }

    pub fn unique_stop_count(&self) -> usize {
        let mut seen = self.stops.clone();
        seen.sort();
        seen.dedup();
        seen.len()
    }

    /// The full in-order sequence of stops a rider passes: the stored
    /// sequence for a roundtrip line, the stored sequence followed by its
    /// reverse minus the shared terminus otherwise.
    pub fn expanded_stops(&self) -> Vec<StopIdx> {
        let mut sequence = self.stops.clone();
        if !self.is_roundtrip {
            sequence.extend(self.stops.iter().rev().skip(1));
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::{Bus, StopIdx};

    fn bus_with(stop_indices: &[usize], is_roundtrip: bool) -> Bus {
        Bus {
            name: "test".to_string(),
            stops: stop_indices.iter().map(|&idx| StopIdx { idx }).collect(),
            is_roundtrip,
        }
    }

    #[test]
    fn roundtrip_counts_the_stored_sequence() {
        let bus = bus_with(&[0, 1, 2, 3, 4, 0], true);
        assert_eq!(bus.stop_count(), 6);
        assert_eq!(bus.unique_stop_count(), 5);
        assert_eq!(bus.expanded_stops().len(), 6);
    }

    #[test]
    fn one_way_line_is_expanded_both_ways() {
        let bus = bus_with(&[0, 1, 1, 2], false);
        assert_eq!(bus.stop_count(), 7);
        assert_eq!(bus.unique_stop_count(), 3);
        let expanded: Vec<usize> = bus.expanded_stops().iter().map(|stop| stop.idx).collect();
        assert_eq!(expanded, vec![0, 1, 1, 2, 1, 1, 0]);
    }

    #[test]
    fn empty_line_has_no_stops() {
        let bus = bus_with(&[], false);
        assert_eq!(bus.stop_count(), 0);
        assert!(bus.expanded_stops().is_empty());
    }
}
