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

use anyhow::{Context, Error};
use serde::Serialize;
use transit_catalogue::transport_router::RouteItem;
use transit_catalogue::RequestHandler;

use crate::requests::StatRequest;

const NOT_FOUND: &str = "not found";

/// One response object per stat request, echoing its id. The closed set
/// of shapes keeps the serialiser exhaustive over the variants.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Error {
        request_id: i64,
        error_message: String,
    },
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u32,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItemResponse>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemResponse {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

impl From<RouteItem> for RouteItemResponse {
    fn from(item: RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => RouteItemResponse::Wait { stop_name, time },
            RouteItem::Bus {
                bus_name,
                span_count,
                time,
            } => RouteItemResponse::Bus {
                bus: bus_name,
                span_count,
                time,
            },
        }
    }
}

fn not_found(request_id: i64) -> StatResponse {
    StatResponse::Error {
        request_id,
        error_message: NOT_FOUND.to_string(),
    }
}

/// Answers the stat requests in input order. Lookup misses and
/// unreachable routes become per-request error objects; a missing
/// configuration is fatal for the whole batch.
pub fn process_stat_requests(
    handler: &mut RequestHandler<'_>,
    stat_requests: &[StatRequest],
) -> Result<Vec<StatResponse>, Error> {
    let mut answers = Vec::with_capacity(stat_requests.len());
    for request in stat_requests {
        let answer = match request {
            StatRequest::Bus { id, name } => match handler.bus_stat(name) {
                Some(stat) => StatResponse::Bus {
                    request_id: *id,
                    curvature: stat.curvature,
                    route_length: stat.route_length,
                    stop_count: stat.stop_count,
                    unique_stop_count: stat.unique_stop_count,
                },
                None => not_found(*id),
            },
            StatRequest::Stop { id, name } => match handler.buses_at_stop(name) {
                Some(buses) => StatResponse::Stop {
                    request_id: *id,
                    buses: buses.iter().cloned().collect(),
                },
                None => not_found(*id),
            },
            StatRequest::Map { id } => {
                let document = handler
                    .render_map()
                    .context("cannot answer a Map request")?;
                StatResponse::Map {
                    request_id: *id,
                    map: document.render(),
                }
            }
            StatRequest::Route { id, from, to } => {
                let route = handler
                    .build_route(from, to)
                    .context("cannot answer a Route request")?;
                match route {
                    Some(info) => StatResponse::Route {
                        request_id: *id,
                        total_time: info.total_time,
                        items: info.items.into_iter().map(RouteItemResponse::from).collect(),
                    },
                    None => not_found(*id),
                }
            }
        };
        answers.push(answer);
    }
    Ok(answers)
}
