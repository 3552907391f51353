//! The capability interface a host map engine implements

use geojson::FeatureCollection;

use crate::feature::RenderedFeature;
use crate::geo::{LngLat, ScreenPoint};
use crate::layer::CircleLayer;
use crate::source::GeoJsonSource;
use crate::style::PropertyValue;

/// Errors reported by an engine during plugin setup
#[derive(Debug)]
pub enum MapError {
    /// A source with the same id is already registered
    SourceAlreadyAdded(String),
    /// A layer with the same id is already registered
    LayerAlreadyAdded(String),
    /// A layer references a source id the engine does not know
    SourceNotFound { layer: String, source: String },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::SourceAlreadyAdded(id) => write!(f, "source already added: {id}"),
            MapError::LayerAlreadyAdded(id) => write!(f, "layer already added: {id}"),
            MapError::SourceNotFound { layer, source } => {
                write!(f, "source {source} not found for layer {layer}")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Result type for engine boundary operations
pub type MapResult<T> = Result<T, MapError>;

/// Callback invoked by the engine with the geographic position of a map click
pub type MapClickCallback = Box<dyn Fn(LngLat)>;

/// Opaque handle identifying a registered click callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickSubscription(u64);

impl ClickSubscription {
    /// Create a handle from an engine-assigned token
    pub fn new(token: u64) -> Self {
        Self(token)
    }

    /// Get the engine-assigned token
    pub fn token(&self) -> u64 {
        self.0
    }
}

/// Narrow capability interface over a vector-tile map renderer
///
/// The annotation plugin depends only on this surface, so tests substitute a
/// recording double for the real engine. All methods take `&self`: engines
/// are host-owned shared objects and the whole model is single-threaded.
/// Registration is fallible; everything after successful setup is assumed to
/// succeed once the layer exists.
pub trait MapApi {
    /// Register a GeoJSON source
    fn add_source(&self, source: &GeoJsonSource) -> MapResult<()>;

    /// Register a layer above all existing layers
    fn add_layer(&self, layer: &CircleLayer) -> MapResult<()>;

    /// Register a layer beneath the named existing layer
    fn add_layer_below(&self, layer: &CircleLayer, below_layer_id: &str) -> MapResult<()>;

    /// Replace the payload of a registered source
    fn set_geojson(&self, source_id: &str, collection: &FeatureCollection);

    /// Update one paint property of a registered layer
    fn set_paint_property(&self, layer_id: &str, property: &PropertyValue);

    /// Hit-test the named layer at a screen position
    ///
    /// Results are ordered front to back: the first entry is the top-most
    /// rendered feature. The result may be empty.
    fn query_rendered_features(&self, point: ScreenPoint, layer_id: &str) -> Vec<RenderedFeature>;

    /// Project a geographic coordinate to screen space
    fn project(&self, coordinate: LngLat) -> ScreenPoint;

    /// Register a map click callback
    fn add_click_listener(&self, callback: MapClickCallback) -> ClickSubscription;

    /// Remove a previously registered click callback
    fn remove_click_listener(&self, subscription: ClickSubscription);
}
