//! Data-driven style expressions and layer paint values

use serde_json::{json, Value};

/// Data-driven style value in the engine's JSON array encoding
///
/// Only the forms the annotation plugin emits are modeled: per-feature
/// property lookups and constant values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `["get", name]`: read the value from each rendered feature
    Get(String),
    /// A constant applied to the whole layer
    Literal(Value),
}

impl Expression {
    /// Bind to the named per-feature property
    pub fn get(property: impl Into<String>) -> Self {
        Expression::Get(property.into())
    }

    /// Wrap a constant value
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// Encode for the engine
    pub fn to_value(&self) -> Value {
        match self {
            Expression::Get(name) => json!(["get", name]),
            Expression::Literal(value) => value.clone(),
        }
    }
}

/// A single layer paint setting keyed by its style-spec name
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    key: &'static str,
    value: Value,
}

impl PropertyValue {
    fn new(key: &'static str, value: Value) -> Self {
        Self { key, value }
    }

    /// Get the style-spec property name
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Get the encoded value
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Reference frame for `circle-translate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateAnchor {
    /// Offset relative to the map
    Map,
    /// Offset relative to the viewport
    Viewport,
}

impl TranslateAnchor {
    /// Style-spec string value
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslateAnchor::Map => "map",
            TranslateAnchor::Viewport => "viewport",
        }
    }

    /// Parse a style-spec string value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "map" => Some(TranslateAnchor::Map),
            "viewport" => Some(TranslateAnchor::Viewport),
            _ => None,
        }
    }
}

/// Zoom scaling behavior for circle radii
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchScale {
    /// Circles scale with the map
    Map,
    /// Circles keep their screen size
    Viewport,
}

impl PitchScale {
    /// Style-spec string value
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchScale::Map => "map",
            PitchScale::Viewport => "viewport",
        }
    }

    /// Parse a style-spec string value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "map" => Some(PitchScale::Map),
            "viewport" => Some(PitchScale::Viewport),
            _ => None,
        }
    }
}

/// Orientation of circles on a pitched map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchAlignment {
    /// Circles lie flat on the map surface
    Map,
    /// Circles face the viewport
    Viewport,
}

impl PitchAlignment {
    /// Style-spec string value
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchAlignment::Map => "map",
            PitchAlignment::Viewport => "viewport",
        }
    }

    /// Parse a style-spec string value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "map" => Some(PitchAlignment::Map),
            "viewport" => Some(PitchAlignment::Viewport),
            _ => None,
        }
    }
}

/// Set the circle radius from an expression
pub fn circle_radius(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-radius", expression.to_value())
}

/// Set the circle fill color from an expression
pub fn circle_color(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-color", expression.to_value())
}

/// Set the circle blur from an expression
pub fn circle_blur(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-blur", expression.to_value())
}

/// Set the circle fill opacity from an expression
pub fn circle_opacity(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-opacity", expression.to_value())
}

/// Set the circle stroke width from an expression
pub fn circle_stroke_width(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-stroke-width", expression.to_value())
}

/// Set the circle stroke color from an expression
pub fn circle_stroke_color(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-stroke-color", expression.to_value())
}

/// Set the circle stroke opacity from an expression
pub fn circle_stroke_opacity(expression: Expression) -> PropertyValue {
    PropertyValue::new("circle-stroke-opacity", expression.to_value())
}

/// Set the layer-wide circle offset in pixels
pub fn circle_translate(offset: [f64; 2]) -> PropertyValue {
    PropertyValue::new("circle-translate", json!(offset))
}

/// Set the reference frame for the layer-wide circle offset
pub fn circle_translate_anchor(anchor: TranslateAnchor) -> PropertyValue {
    PropertyValue::new("circle-translate-anchor", json!(anchor.as_str()))
}

/// Set the zoom scaling behavior for circle radii
pub fn circle_pitch_scale(scale: PitchScale) -> PropertyValue {
    PropertyValue::new("circle-pitch-scale", json!(scale.as_str()))
}

/// Set the orientation of circles on a pitched map
pub fn circle_pitch_alignment(alignment: PitchAlignment) -> PropertyValue {
    PropertyValue::new("circle-pitch-alignment", json!(alignment.as_str()))
}
