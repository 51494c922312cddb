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

use std::collections::BTreeMap;

use serde::Deserialize;
use transit_catalogue::catalogue::CatalogueError;
use transit_catalogue::geo::Coordinates;
use transit_catalogue::{RenderSettings, RoutingSettings, TransportCatalogue};

/// The top-level input document.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopData),
    Bus(BusData),
}

#[derive(Debug, Deserialize)]
pub struct StopData {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize)]
pub struct BusData {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

/// Ingests `base_requests` in three passes (stops, then distances, then
/// buses) so that declaration order never matters.
pub fn populate_catalogue(
    catalogue: &mut TransportCatalogue,
    base_requests: &[BaseRequest],
) -> Result<(), CatalogueError> {
    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            let coords = Coordinates {
                lat: stop.latitude,
                lng: stop.longitude,
            };
            catalogue.add_stop(&stop.name, coords);
        }
    }
    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            for (neighbour, meters) in &stop.road_distances {
                catalogue.add_distance(&stop.name, neighbour, *meters)?;
            }
        }
    }
    for request in base_requests {
        if let BaseRequest::Bus(bus) = request {
            let stop_names: Vec<&str> = bus.stops.iter().map(String::as_str).collect();
            catalogue.add_bus(&bus.name, &stop_names, bus.is_roundtrip)?;
        }
    }
    Ok(())
}
