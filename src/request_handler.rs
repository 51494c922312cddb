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

use std::collections::BTreeSet;

use crate::catalogue::TransportCatalogue;
use crate::map_renderer::{MapRenderer, RenderError};
use crate::model::BusIdx;
use crate::svg;
use crate::transport_router::{RouteInfo, RoutingError, TransportRouter};

/// Summary statistics of one bus line.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStat {
    pub curvature: f64,
    pub route_length: u32,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

/// Facade presenting the four query kinds over the three subsystems to
/// the outer request layer.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    renderer: &'a MapRenderer,
    router: &'a mut TransportRouter,
    no_buses: BTreeSet<String>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        catalogue: &'a TransportCatalogue,
        renderer: &'a MapRenderer,
        router: &'a mut TransportRouter,
    ) -> Self {
        Self {
            catalogue,
            renderer,
            router,
            no_buses: BTreeSet::new(),
        }
    }

    pub fn bus_stat(&self, name: &str) -> Option<BusStat> {
        let bus_idx = self.catalogue.find_bus(name)?;
        let bus = self.catalogue.bus(bus_idx);
        let route_length = self.catalogue.road_route_length(bus_idx);
        let geo_route_length = self.catalogue.geo_route_length(bus_idx);
        Some(BusStat {
            curvature: f64::from(route_length) / geo_route_length,
            route_length,
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
        })
    }

    /// The ordered bus-name set of a stop. `None` for an unknown stop; a
    /// present empty set for a stop no bus serves.
    pub fn buses_at_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        let stop = self.catalogue.find_stop(name)?;
        Some(
            self.catalogue
                .bus_names_at(stop)
                .unwrap_or(&self.no_buses),
        )
    }

    pub fn render_map(&self) -> Result<svg::Document, RenderError> {
        let mut buses: Vec<BusIdx> = self.catalogue.all_buses().collect();
        buses.sort_by(|a, b| self.catalogue.bus(*a).name.cmp(&self.catalogue.bus(*b).name));
        self.renderer.render(self.catalogue, &buses)
    }

    /// The fastest journey between two named stops. An unknown stop and
    /// an unreachable one both surface as `None`.
    pub fn build_route(&mut self, from: &str, to: &str) -> Result<Option<RouteInfo>, RoutingError> {
        let from_stop = match self.catalogue.find_stop(from) {
            Some(stop) => stop,
            None => return Ok(None),
        };
        let to_stop = match self.catalogue.find_stop(to) {
            Some(stop) => stop,
            None => return Ok(None),
        };
        self.router.build_route(self.catalogue, from_stop, to_stop)
    }
}
