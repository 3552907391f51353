//! Builder for new circles

use geojson::JsonObject;
use serde_json::json;
use tilemark_map::LngLat;

use crate::color::Color;

/// Initial placement and styling for a circle created by the manager
///
/// Only the center is required; omitted style values fall back to the
/// engine's layer defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOptions {
    center: LngLat,
    data: JsonObject,
}

impl CircleOptions {
    /// Start options at the given center coordinate
    pub fn new(center: LngLat) -> Self {
        Self {
            center,
            data: JsonObject::new(),
        }
    }

    /// Set the circle radius in pixels
    pub fn with_circle_radius(mut self, radius: f64) -> Self {
        self.data.insert("circle-radius".to_owned(), json!(radius));
        self
    }

    /// Set the fill color
    pub fn with_circle_color(mut self, color: Color) -> Self {
        self.data
            .insert("circle-color".to_owned(), json!(color.to_rgba_string()));
        self
    }

    /// Set the blur applied to the fill
    pub fn with_circle_blur(mut self, blur: f64) -> Self {
        self.data.insert("circle-blur".to_owned(), json!(blur));
        self
    }

    /// Set the fill opacity
    pub fn with_circle_opacity(mut self, opacity: f64) -> Self {
        self.data.insert("circle-opacity".to_owned(), json!(opacity));
        self
    }

    /// Set the stroke width in pixels
    pub fn with_circle_stroke_width(mut self, width: f64) -> Self {
        self.data
            .insert("circle-stroke-width".to_owned(), json!(width));
        self
    }

    /// Set the stroke color
    pub fn with_circle_stroke_color(mut self, color: Color) -> Self {
        self.data.insert(
            "circle-stroke-color".to_owned(),
            json!(color.to_rgba_string()),
        );
        self
    }

    /// Set the stroke opacity
    pub fn with_circle_stroke_opacity(mut self, opacity: f64) -> Self {
        self.data
            .insert("circle-stroke-opacity".to_owned(), json!(opacity));
        self
    }

    pub(crate) fn into_parts(self) -> (LngLat, JsonObject) {
        (self.center, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_style_values() {
        let options = CircleOptions::new(LngLat::new(1.0, 2.0))
            .with_circle_radius(6.0)
            .with_circle_color(Color::RED)
            .with_circle_stroke_opacity(0.4);

        let (center, data) = options.into_parts();
        assert_eq!(center, LngLat::new(1.0, 2.0));
        assert_eq!(data.get("circle-radius"), Some(&json!(6.0)));
        assert_eq!(data.get("circle-color"), Some(&json!("rgba(255, 0, 0, 1)")));
        assert_eq!(data.get("circle-stroke-opacity"), Some(&json!(0.4)));
        assert_eq!(data.get("circle-blur"), None);
    }
}
