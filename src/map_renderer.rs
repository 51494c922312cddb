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

use serde::Deserialize;

use crate::catalogue::TransportCatalogue;
use crate::geo::Coordinates;
use crate::model::{BusIdx, StopIdx};
use crate::svg::{self, Color, PathStyle, Point, StrokeLineCap, StrokeLineJoin};

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Render parameters, as given in the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// The palette colour for the route at `index`, cycling through the
    /// palette.
    pub fn pick_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    SettingsNotSet,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SettingsNotSet => write!(f, "render settings were not provided"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Affine fit of a point cloud on the sphere into the canvas.
///
/// The zoom is the minimum of the per-axis zooms; an axis whose span is
/// below `EPSILON` defines no zoom, and with no defined zoom at all
/// every point lands on `(padding, padding)`.
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[Coordinates], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            min_lng: 0.0,
            max_lat: 0.0,
            zoom: 0.0,
        };
        if points.is_empty() {
            return projector;
        }

        let mut min_lng = points[0].lng;
        let mut max_lng = points[0].lng;
        let mut min_lat = points[0].lat;
        let mut max_lat = points[0].lat;
        for point in &points[1..] {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }
        projector.min_lng = min_lng;
        projector.max_lat = max_lat;

        let width_zoom = if is_zero(max_lng - min_lng) {
            None
        } else {
            Some((width - 2.0 * padding) / (max_lng - min_lng))
        };
        let height_zoom = if is_zero(max_lat - min_lat) {
            None
        } else {
            Some((height - 2.0 * padding) / (max_lat - min_lat))
        };
        projector.zoom = match (width_zoom, height_zoom) {
            (Some(by_width), Some(by_height)) => by_width.min(by_height),
            (Some(by_width), None) => by_width,
            (None, Some(by_height)) => by_height,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, coords: &Coordinates) -> Point {
        Point {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}

/// Composes the SVG map of all bus lines, in four layers: route
/// polylines, route labels, stop circles, stop labels.
#[derive(Debug, Default)]
pub struct MapRenderer {
    settings: Option<RenderSettings>,
}

impl MapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_render_settings(&mut self, settings: RenderSettings) {
        self.settings = Some(settings);
    }

    /// Renders `buses`, which the caller provides in name-sorted order.
    /// The stop set of layers 3 and 4, also used to fit the projector,
    /// is the name-sorted de-duplicated union of the stops of `buses`.
    pub fn render(
        &self,
        catalogue: &TransportCatalogue,
        buses: &[BusIdx],
    ) -> Result<svg::Document, RenderError> {
        let settings = self.settings.as_ref().ok_or(RenderError::SettingsNotSet)?;

        let stops = referenced_stops(catalogue, buses);
        let coordinates: Vec<Coordinates> = stops
            .iter()
            .map(|&stop| catalogue.stop(stop).coords)
            .collect();
        let projector = SphereProjector::new(
            &coordinates,
            settings.width,
            settings.height,
            settings.padding,
        );

        let mut document = svg::Document::new();
        self.route_lines(catalogue, buses, settings, &projector, &mut document);
        self.route_labels(catalogue, buses, settings, &projector, &mut document);
        self.stop_symbols(catalogue, &stops, settings, &projector, &mut document);
        self.stop_labels(catalogue, &stops, settings, &projector, &mut document);
        Ok(document)
    }

    fn route_lines(
        &self,
        catalogue: &TransportCatalogue,
        buses: &[BusIdx],
        settings: &RenderSettings,
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        let mut color_index = 0;
        for &bus in buses {
            let bus_data = catalogue.bus(bus);
            if bus_data.stops.is_empty() {
                continue;
            }
            let mut polyline = svg::Polyline::new();
            for stop in bus_data.expanded_stops() {
                polyline = polyline.add_point(projector.project(&catalogue.stop(stop).coords));
            }
            document.add(
                polyline
                    .fill_color(Color::None)
                    .stroke_color(settings.pick_color(color_index))
                    .stroke_width(settings.line_width)
                    .stroke_line_cap(StrokeLineCap::Round)
                    .stroke_line_join(StrokeLineJoin::Round),
            );
            color_index += 1;
        }
    }

    fn route_labels(
        &self,
        catalogue: &TransportCatalogue,
        buses: &[BusIdx],
        settings: &RenderSettings,
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        let mut color_index = 0;
        for &bus in buses {
            let bus_data = catalogue.bus(bus);
            let first = match bus_data.stops.first() {
                Some(&stop) => stop,
                None => continue,
            };
            let position = projector.project(&catalogue.stop(first).coords);
            self.add_route_label(settings, position, &bus_data.name, color_index, document);

            let last = bus_data.stops[bus_data.stops.len() - 1];
            if !bus_data.is_roundtrip && first != last {
                let position = projector.project(&catalogue.stop(last).coords);
                self.add_route_label(settings, position, &bus_data.name, color_index, document);
            }
            color_index += 1;
        }
    }

    fn add_route_label(
        &self,
        settings: &RenderSettings,
        position: Point,
        name: &str,
        color_index: usize,
        document: &mut svg::Document,
    ) {
        let base = svg::Text::new()
            .position(position)
            .offset(settings.bus_label_offset)
            .font_size(settings.bus_label_font_size)
            .font_family("Verdana")
            .font_weight("bold")
            .data(name);
        document.add(
            base.clone()
                .fill_color(settings.underlayer_color.clone())
                .stroke_color(settings.underlayer_color.clone())
                .stroke_width(settings.underlayer_width)
                .stroke_line_cap(StrokeLineCap::Round)
                .stroke_line_join(StrokeLineJoin::Round),
        );
        document.add(base.fill_color(settings.pick_color(color_index)));
    }

    fn stop_symbols(
        &self,
        catalogue: &TransportCatalogue,
        stops: &[StopIdx],
        settings: &RenderSettings,
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for &stop in stops {
            document.add(
                svg::Circle::new()
                    .center(projector.project(&catalogue.stop(stop).coords))
                    .radius(settings.stop_radius)
                    .fill_color(Color::Named("white".to_string())),
            );
        }
    }

    fn stop_labels(
        &self,
        catalogue: &TransportCatalogue,
        stops: &[StopIdx],
        settings: &RenderSettings,
        projector: &SphereProjector,
        document: &mut svg::Document,
    ) {
        for &stop in stops {
            let stop_data = catalogue.stop(stop);
            let base = svg::Text::new()
                .position(projector.project(&stop_data.coords))
                .offset(settings.stop_label_offset)
                .font_size(settings.stop_label_font_size)
                .font_family("Verdana")
                .data(&stop_data.name);
            document.add(
                base.clone()
                    .fill_color(settings.underlayer_color.clone())
                    .stroke_color(settings.underlayer_color.clone())
                    .stroke_width(settings.underlayer_width)
                    .stroke_line_cap(StrokeLineCap::Round)
                    .stroke_line_join(StrokeLineJoin::Round),
            );
            document.add(base.fill_color(Color::Named("black".to_string())));
        }
    }
}

// The de-duplicated union of the stops referenced by any rendered bus,
// sorted by stop name.
fn referenced_stops(catalogue: &TransportCatalogue, buses: &[BusIdx]) -> Vec<StopIdx> {
    let mut stops: Vec<StopIdx> = buses
        .iter()
        .flat_map(|&bus| catalogue.bus(bus).stops.iter().copied())
        .collect();
    stops.sort_by(|a, b| catalogue.stop(*a).name.cmp(&catalogue.stop(*b).name));
    stops.dedup();
    stops
}

#[cfg(test)]
mod tests {
    use super::SphereProjector;
    use crate::geo::Coordinates;

    #[test]
    fn empty_input_projects_onto_the_padding_corner() {
        let projector = SphereProjector::new(&[], 200.0, 100.0, 10.0);
        let point = projector.project(&Coordinates {
            lat: 43.5,
            lng: -12.25,
        });
        assert_eq!((point.x, point.y), (10.0, 10.0));
    }

    #[test]
    fn square_cloud_uses_the_smaller_axis_zoom() {
        let points = [
            Coordinates { lat: 0.0, lng: 0.0 },
            Coordinates {
                lat: 10.0,
                lng: 10.0,
            },
        ];
        let projector = SphereProjector::new(&points, 110.0, 60.0, 5.0);
        // width zoom 10, height zoom 5: the smaller one wins
        let top_right = projector.project(&points[1]);
        assert!((top_right.x - 55.0).abs() < 1e-9);
        assert!((top_right.y - 5.0).abs() < 1e-9);
        let bottom_left = projector.project(&points[0]);
        assert!((bottom_left.x - 5.0).abs() < 1e-9);
        assert!((bottom_left.y - 55.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_longitude_span_falls_back_to_the_height_zoom() {
        let points = [
            Coordinates { lat: 0.0, lng: 3.0 },
            Coordinates { lat: 20.0, lng: 3.0 },
        ];
        let projector = SphereProjector::new(&points, 100.0, 60.0, 10.0);
        let top = projector.project(&points[1]);
        assert!((top.x - 10.0).abs() < 1e-9);
        assert!((top.y - 10.0).abs() < 1e-9);
        let bottom = projector.project(&points[0]);
        assert!((bottom.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_projects_onto_the_padding_corner() {
        let points = [Coordinates {
            lat: 55.6,
            lng: 37.2,
        }];
        let projector = SphereProjector::new(&points, 400.0, 400.0, 50.0);
        let point = projector.project(&points[0]);
        assert_eq!((point.x, point.y), (50.0, 50.0));
    }
}
