//! Geographic and screen-space coordinate types

use serde::{Deserialize, Serialize};

/// Geographic coordinate in GeoJSON axis order (longitude first)
///
/// No range normalization is applied here; longitude wrapping and latitude
/// clamping are engine concerns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Create a new geographic coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// GeoJSON position for Point geometry construction
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

/// Screen-space pixel position produced by the engine projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
