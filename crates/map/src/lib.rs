//! Engine boundary for the tilemark annotation plugin
//!
//! Plain data types that cross into a vector-tile map renderer (coordinates,
//! rendered-feature snapshots, sources, layers, paint values) and the narrow
//! [`MapApi`] capability trait a host engine implements. The renderer itself
//! (tiling, compositing, hit-testing, projection math) lives on the other
//! side of this boundary and is never reproduced here.

pub mod api;
pub mod feature;
pub mod geo;
pub mod layer;
pub mod source;
pub mod style;

pub use api::{ClickSubscription, MapApi, MapClickCallback, MapError, MapResult};
pub use feature::RenderedFeature;
pub use geo::{LngLat, ScreenPoint};
pub use layer::CircleLayer;
pub use source::GeoJsonSource;
pub use style::{
    circle_blur, circle_color, circle_opacity, circle_pitch_alignment, circle_pitch_scale,
    circle_radius, circle_stroke_color, circle_stroke_opacity, circle_stroke_width,
    circle_translate, circle_translate_anchor, Expression, PitchAlignment, PitchScale,
    PropertyValue, TranslateAnchor,
};
