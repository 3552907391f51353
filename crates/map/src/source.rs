//! GeoJSON source descriptors

use geojson::FeatureCollection;

/// Descriptor for an engine GeoJSON source and its current payload
///
/// The descriptor mirrors the collection most recently pushed through
/// [`crate::MapApi::set_geojson`]; the engine owns the rendered copy.
#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    id: String,
    collection: FeatureCollection,
}

impl GeoJsonSource {
    /// Create an empty source descriptor
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            collection: FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            },
        }
    }

    /// Get the source id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the mirrored feature collection
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// Replace the mirrored feature collection
    pub fn set_collection(&mut self, collection: FeatureCollection) {
        self.collection = collection;
    }
}
