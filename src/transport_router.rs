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

use std::fmt;
use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalogue::TransportCatalogue;
use crate::graph::{DirectedWeightedGraph, VertexId};
use crate::model::{BusIdx, StopIdx};
use crate::router::Router;

/// Routing parameters, as given in the input document.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutingSettings {
    /// Minutes a rider waits for a bus at any stop.
    pub bus_wait_time: f64,
    /// Bus velocity in km/h.
    pub bus_velocity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    BadWaitTime(f64),
    BadVelocity(f64),
    NotConfigured,
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::BadWaitTime(value) => {
                write!(f, "bus wait time must be non-negative, got {}", value)
            }
            RoutingError::BadVelocity(value) => {
                write!(f, "bus velocity must be positive, got {}", value)
            }
            RoutingError::NotConfigured => {
                write!(f, "routing settings were not provided")
            }
        }
    }
}

impl std::error::Error for RoutingError {}

/// One leg of a recovered itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus_name: String,
        span_count: u32,
        time: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Total journey time in minutes.
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

// Annotation stored per transit edge, consumed when an itinerary is
// reconstructed from the shortest-path edge list.
#[derive(Debug, Clone, Copy)]
enum EdgeNote {
    Wait { stop: StopIdx, time: f64 },
    Ride { bus: BusIdx, span_count: u32, time: f64 },
}

struct BuiltRouter {
    router: Router<f64>,
    edge_notes: Vec<EdgeNote>,
}

/// Itinerary engine over the catalogue.
///
/// The transit graph has two vertices per stop: `2i` models a rider idle
/// at stop `i`, `2i + 1` a rider boarded at stop `i`. A wait edge joins
/// the two; ride edges join a boarded vertex to the idle vertex of every
/// stop reachable downstream on one bus. The graph is built lazily on the
/// first route query and never rebuilt: settings changes after the build
/// are ignored.
#[derive(Default)]
pub struct TransportRouter {
    settings: Option<RoutingSettings>,
    built: Option<BuiltRouter>,
}

impl TransportRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_routing_settings(&mut self, settings: RoutingSettings) -> Result<(), RoutingError> {
        if settings.bus_wait_time < 0.0 {
            return Err(RoutingError::BadWaitTime(settings.bus_wait_time));
        }
        if settings.bus_velocity <= 0.0 {
            return Err(RoutingError::BadVelocity(settings.bus_velocity));
        }
        if self.built.is_some() {
            warn!("routing settings changed after the transit graph was built, ignoring");
            return Ok(());
        }
        self.settings = Some(settings);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// The fastest journey from `from` to `to`, or `None` when `to` is
    /// unreachable. A journey from a stop to itself takes no time.
    pub fn build_route(
        &mut self,
        catalogue: &TransportCatalogue,
        from: StopIdx,
        to: StopIdx,
    ) -> Result<Option<RouteInfo>, RoutingError> {
        if self.built.is_none() {
            let settings = self.settings.ok_or(RoutingError::NotConfigured)?;
            self.built = Some(build_transit_router(catalogue, &settings));
        }
        let built = match &self.built {
            Some(built) => built,
            None => return Err(RoutingError::NotConfigured),
        };

        let path = match built.router.build_route(idle_vertex(from), idle_vertex(to)) {
            Some(path) => path,
            None => return Ok(None),
        };

        let items = path
            .edges
            .iter()
            .map(|&edge_id| match built.edge_notes[edge_id] {
                EdgeNote::Wait { stop, time } => RouteItem::Wait {
                    stop_name: catalogue.stop(stop).name.clone(),
                    time,
                },
                EdgeNote::Ride {
                    bus,
                    span_count,
                    time,
                } => RouteItem::Bus {
                    bus_name: catalogue.bus(bus).name.clone(),
                    span_count,
                    time,
                },
            })
            .collect();

        Ok(Some(RouteInfo {
            total_time: path.weight,
            items,
        }))
    }
}

fn idle_vertex(stop: StopIdx) -> VertexId {
    stop.idx * 2
}

fn boarded_vertex(stop: StopIdx) -> VertexId {
    stop.idx * 2 + 1
}

fn build_transit_router(
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
) -> BuiltRouter {
    let build_timer = Instant::now();
    let vertex_count = catalogue.nb_of_stops() * 2;
    let mut graph = DirectedWeightedGraph::new(vertex_count);
    let mut edge_notes = Vec::new();

    for stop in catalogue.all_stops() {
        graph.add_edge(idle_vertex(stop), boarded_vertex(stop), settings.bus_wait_time);
        edge_notes.push(EdgeNote::Wait {
            stop,
            time: settings.bus_wait_time,
        });
    }

    for bus in catalogue.all_buses() {
        let sequence = catalogue.bus(bus).expanded_stops();
        for from_pos in 0..sequence.len().saturating_sub(1) {
            let mut meters = 0u64;
            for to_pos in (from_pos + 1)..sequence.len() {
                meters += u64::from(catalogue.get_distance(sequence[to_pos - 1], sequence[to_pos]));
                if sequence[from_pos] == sequence[to_pos] {
                    continue;
                }
                let time = meters as f64 / 1000.0 / settings.bus_velocity * 60.0;
                graph.add_edge(
                    boarded_vertex(sequence[from_pos]),
                    idle_vertex(sequence[to_pos]),
                    time,
                );
                edge_notes.push(EdgeNote::Ride {
                    bus,
                    span_count: (to_pos - from_pos) as u32,
                    time,
                });
            }
        }
    }

    debug_assert_eq!(graph.edge_count(), edge_notes.len());
    info!(
        "Transit graph built in {} ms: {} vertices, {} edges",
        build_timer.elapsed().as_millis(),
        graph.vertex_count(),
        graph.edge_count()
    );
    let router = Router::new(graph);
    debug!(
        "Shortest path tables ready in {} ms",
        build_timer.elapsed().as_millis()
    );

    BuiltRouter { router, edge_notes }
}
