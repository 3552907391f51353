//! Circle annotations for vector-tile map renderers
//!
//! Lets a host application place, style, and receive click events for circle
//! markers drawn by a map engine implementing [`tilemark_map::MapApi`]. The
//! plugin marshals per-circle style values into one shared data-driven layer
//! and resolves map clicks back to the managed circle through an identifier
//! property embedded in rendered features.

pub mod circle;
mod click;
pub mod color;
pub mod manager;
pub mod options;

pub use circle::Circle;
pub use color::Color;
pub use manager::{CircleManager, ListenerId, CIRCLE_LAYER_ID, CIRCLE_SOURCE_ID};
pub use options::CircleOptions;

pub use tilemark_map::LngLat;
