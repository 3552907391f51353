//! Circle managed objects

use geojson::{Feature, Geometry, JsonObject};
use serde_json::{json, Value};
use tilemark_map::LngLat;

use crate::color::Color;

/// A circle marker managed by a [`crate::CircleManager`]
///
/// Style values live in a feature property bag so the shared layer can bind
/// each paint property to the matching per-feature property. Identifiers are
/// assigned by the owning manager and embedded in the serialized feature for
/// click resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: u64,
    center: LngLat,
    data: JsonObject,
}

impl Circle {
    /// Feature property key carrying the circle identifier
    pub const ID_KEY: &'static str = "id-circle";

    pub(crate) fn new(id: u64, center: LngLat, data: JsonObject) -> Self {
        Self { id, center, data }
    }

    /// Get the identifier assigned by the owning manager
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the center coordinate
    pub fn center(&self) -> LngLat {
        self.center
    }

    /// Set the center coordinate
    pub fn set_center(&mut self, center: LngLat) {
        self.center = center;
    }

    /// Get the circle radius in pixels
    pub fn circle_radius(&self) -> Option<f64> {
        self.number("circle-radius")
    }

    /// Set the circle radius in pixels
    pub fn set_circle_radius(&mut self, radius: f64) {
        self.set_number("circle-radius", radius);
    }

    /// Get the fill color
    pub fn circle_color(&self) -> Option<Color> {
        self.color("circle-color")
    }

    /// Set the fill color
    pub fn set_circle_color(&mut self, color: Color) {
        self.set_color("circle-color", color);
    }

    /// Get the blur applied to the fill, as a fraction of the radius
    pub fn circle_blur(&self) -> Option<f64> {
        self.number("circle-blur")
    }

    /// Set the blur applied to the fill
    pub fn set_circle_blur(&mut self, blur: f64) {
        self.set_number("circle-blur", blur);
    }

    /// Get the fill opacity
    pub fn circle_opacity(&self) -> Option<f64> {
        self.number("circle-opacity")
    }

    /// Set the fill opacity
    pub fn set_circle_opacity(&mut self, opacity: f64) {
        self.set_number("circle-opacity", opacity);
    }

    /// Get the stroke width in pixels
    pub fn circle_stroke_width(&self) -> Option<f64> {
        self.number("circle-stroke-width")
    }

    /// Set the stroke width in pixels
    pub fn set_circle_stroke_width(&mut self, width: f64) {
        self.set_number("circle-stroke-width", width);
    }

    /// Get the stroke color
    pub fn circle_stroke_color(&self) -> Option<Color> {
        self.color("circle-stroke-color")
    }

    /// Set the stroke color
    pub fn set_circle_stroke_color(&mut self, color: Color) {
        self.set_color("circle-stroke-color", color);
    }

    /// Get the stroke opacity
    pub fn circle_stroke_opacity(&self) -> Option<f64> {
        self.number("circle-stroke-opacity")
    }

    /// Set the stroke opacity
    pub fn set_circle_stroke_opacity(&mut self, opacity: f64) {
        self.set_number("circle-stroke-opacity", opacity);
    }

    /// Get the full style property bag
    pub fn data(&self) -> &JsonObject {
        &self.data
    }

    /// Serialize into the feature form consumed by the GeoJSON source
    ///
    /// The identifier property is embedded alongside the style values so
    /// rendered features can be resolved back to this circle.
    pub fn to_feature(&self) -> Feature {
        let mut properties = self.data.clone();
        properties.insert(Self::ID_KEY.to_owned(), json!(self.id));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::Point(
                self.center.to_position(),
            ))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(Value::as_f64)
    }

    fn set_number(&mut self, key: &str, value: f64) {
        self.data.insert(key.to_owned(), json!(value));
    }

    fn color(&self, key: &str) -> Option<Color> {
        self.data
            .get(key)
            .and_then(Value::as_str)
            .and_then(Color::parse)
    }

    fn set_color(&mut self, key: &str, color: Color) {
        self.data
            .insert(key.to_owned(), json!(color.to_rgba_string()));
    }
}
