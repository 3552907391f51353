//! Rendered-feature snapshots returned by engine hit-test queries

use geojson::{Feature, Geometry, JsonObject};
use serde_json::Value;

/// Engine-produced, read-only snapshot of a currently painted feature
///
/// Snapshots are transient: the engine regenerates them for every query and
/// callers never store them. The property bag carries whatever the source
/// feature carried at render time, including the identifier property the
/// annotation plugin embeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedFeature {
    geometry: Option<Geometry>,
    properties: JsonObject,
}

impl RenderedFeature {
    /// Create a snapshot from geometry and a property bag
    pub fn new(geometry: Option<Geometry>, properties: JsonObject) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    /// Create a snapshot carrying only a property bag
    pub fn with_properties(properties: JsonObject) -> Self {
        Self {
            geometry: None,
            properties,
        }
    }

    /// Get the rendered geometry, if the engine included one
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Get the full property bag
    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }

    /// Get a single property value by key
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Read an identifier property as an unsigned integer
    ///
    /// Missing keys and non-numeric values yield `None`; click resolution
    /// treats both as a silent miss.
    pub fn id_property(&self, key: &str) -> Option<u64> {
        self.property(key).and_then(Value::as_u64)
    }
}

impl From<Feature> for RenderedFeature {
    /// Snapshot a source feature the way an engine would when rendering it
    fn from(feature: Feature) -> Self {
        Self {
            geometry: feature.geometry,
            properties: feature.properties.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(entries: &[(&str, Value)]) -> JsonObject {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn test_id_property_reads_numeric_value() {
        let feature = RenderedFeature::with_properties(bag(&[("id-circle", json!(7))]));
        assert_eq!(feature.id_property("id-circle"), Some(7));
    }

    #[test]
    fn test_id_property_missing_key_is_none() {
        let feature = RenderedFeature::with_properties(JsonObject::new());
        assert_eq!(feature.id_property("id-circle"), None);
    }

    #[test]
    fn test_id_property_rejects_non_numeric_value() {
        let feature = RenderedFeature::with_properties(bag(&[("id-circle", json!("seven"))]));
        assert_eq!(feature.id_property("id-circle"), None);
    }

    #[test]
    fn test_snapshot_from_source_feature_keeps_properties() {
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::Point(vec![1.0, 2.0]))),
            id: None,
            properties: Some(bag(&[("circle-radius", json!(12.0))])),
            foreign_members: None,
        };

        let rendered = RenderedFeature::from(feature);
        assert!(rendered.geometry().is_some());
        assert_eq!(rendered.property("circle-radius"), Some(&json!(12.0)));
    }
}
