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

use std::convert::TryFrom;
use std::fmt::{self, Write};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A colour in the input grammar: a name, an `rgb(r,g,b)` triple or an
/// `rgba(r,g,b,a)` quadruple. `None` renders as `none`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub enum Color {
    None,
    Named(String),
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        opacity: f64,
    },
}

impl Default for Color {
    fn default() -> Self {
        Color::None
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb { red, green, blue } => write!(f, "rgb({},{},{})", red, green, blue),
            Color::Rgba {
                red,
                green,
                blue,
                opacity,
            } => write!(f, "rgba({},{},{},{})", red, green, blue, opacity),
        }
    }
}

// Wire form of a colour: either a name or a 3/4 element channel array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Named(String),
    Channels(Vec<f64>),
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Named(name) => Ok(Color::Named(name)),
            ColorRepr::Channels(channels) => match channels.as_slice() {
                [red, green, blue] => Ok(Color::Rgb {
                    red: *red as u8,
                    green: *green as u8,
                    blue: *blue as u8,
                }),
                [red, green, blue, opacity] => Ok(Color::Rgba {
                    red: *red as u8,
                    green: *green as u8,
                    blue: *blue as u8,
                    opacity: *opacity,
                }),
                _ => Err(format!(
                    "a colour array must have 3 or 4 elements, got {}",
                    channels.len()
                )),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        };
        write!(f, "{}", text)
    }
}

/// Stroke and fill attributes shared by every element. Attributes render
/// only when set, in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    stroke_line_cap: Option<StrokeLineCap>,
    stroke_line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    fn render(&self, out: &mut String) {
        if let Some(fill) = &self.fill {
            let _ = write!(out, " fill=\"{}\"", fill);
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(out, " stroke=\"{}\"", stroke);
        }
        if let Some(width) = self.stroke_width {
            let _ = write!(out, " stroke-width=\"{}\"", width);
        }
        if let Some(cap) = self.stroke_line_cap {
            let _ = write!(out, " stroke-linecap=\"{}\"", cap);
        }
        if let Some(join) = self.stroke_line_join {
            let _ = write!(out, " stroke-linejoin=\"{}\"", join);
        }
    }
}

/// Builder-style stroke and fill setters, shared by every element kind.
pub trait PathStyle: Sized {
    fn path_props_mut(&mut self) -> &mut PathProps;

    fn fill_color(mut self, color: Color) -> Self {
        self.path_props_mut().fill = Some(color);
        self
    }

    fn stroke_color(mut self, color: Color) -> Self {
        self.path_props_mut().stroke = Some(color);
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.path_props_mut().stroke_width = Some(width);
        self
    }

    fn stroke_line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.path_props_mut().stroke_line_cap = Some(cap);
        self
    }

    fn stroke_line_join(mut self, join: StrokeLineJoin) -> Self {
        self.path_props_mut().stroke_line_join = Some(join);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
            props: PathProps::default(),
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        );
        self.props.render(out);
        out.push_str("/>");
    }
}

impl PathStyle for Circle {
    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("<polyline points=\"");
        for (position, point) in self.points.iter().enumerate() {
            if position > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", point.x, point.y);
        }
        out.push('"');
        self.props.render(out);
        out.push_str("/>");
    }
}

impl PathStyle for Polyline {
    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    props: PathProps,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
            props: PathProps::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn font_weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_string());
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        );
        if let Some(family) = &self.font_family {
            let _ = write!(out, " font-family=\"{}\"", family);
        }
        if let Some(weight) = &self.font_weight {
            let _ = write!(out, " font-weight=\"{}\"", weight);
        }
        self.props.render(out);
        out.push('>');
        write_escaped(out, &self.data);
        out.push_str("</text>");
    }
}

impl PathStyle for Text {
    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

/// Closed set of element kinds a document can hold.
#[derive(Debug, Clone)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Object {
    fn from(circle: Circle) -> Self {
        Object::Circle(circle)
    }
}

impl From<Polyline> for Object {
    fn from(polyline: Polyline) -> Self {
        Object::Polyline(polyline)
    }
}

impl From<Text> for Object {
    fn from(text: Text) -> Self {
        Object::Text(text)
    }
}

/// An SVG document: the fixed envelope around the added elements, one
/// element per line, indented two spaces, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n");
        for object in &self.objects {
            out.push_str("  ");
            match object {
                Object::Circle(circle) => circle.render(&mut out),
                Object::Polyline(polyline) => polyline.render(&mut out),
                Object::Text(text) => text.render(&mut out),
            }
            out.push('\n');
        }
        out.push_str("</svg>");
        out
    }
}

fn write_escaped(out: &mut String, text: &str) {
    for character in text.chars() {
        match character {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_render_in_the_input_grammar() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::Named("green".to_string()).to_string(), "green");
        assert_eq!(
            Color::Rgb {
                red: 255,
                green: 160,
                blue: 0
            }
            .to_string(),
            "rgb(255,160,0)"
        );
        assert_eq!(
            Color::Rgba {
                red: 255,
                green: 160,
                blue: 0,
                opacity: 0.85
            }
            .to_string(),
            "rgba(255,160,0,0.85)"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let mut document = Document::new();
        document.add(Text::new().data("M&M's \"<Stop>\""));
        let rendered = document.render();
        assert!(rendered.contains("M&amp;M&apos;s &quot;&lt;Stop&gt;&quot;"));
    }

    #[test]
    fn circle_attributes_render_in_order() {
        let mut document = Document::new();
        document.add(
            Circle::new()
                .center(Point::new(20.0, 30.0))
                .radius(5.0)
                .fill_color(Color::Named("white".to_string())),
        );
        let rendered = document.render();
        assert!(rendered.contains("  <circle cx=\"20\" cy=\"30\" r=\"5\" fill=\"white\"/>"));
    }

    #[test]
    fn document_envelope_wraps_every_element_on_its_own_line() {
        let mut document = Document::new();
        document.add(Polyline::new().add_point(Point::new(1.0, 2.0)));
        let rendered = document.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>");
        assert_eq!(
            lines[1],
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"
        );
        assert_eq!(lines[2], "  <polyline points=\"1,2\"/>");
        assert_eq!(lines[3], "</svg>");
    }
}
