//! Circle layer descriptors

use crate::style::PropertyValue;
use serde_json::Value;

/// Descriptor for the engine layer visualizing managed circles
///
/// One layer is shared by every circle; per-object styling comes from
/// binding each paint property to the identically named property of each
/// rendered feature.
#[derive(Debug, Clone)]
pub struct CircleLayer {
    id: String,
    source_id: String,
    paint: Vec<PropertyValue>,
}

impl CircleLayer {
    /// Create a layer descriptor over the named source
    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            paint: Vec::new(),
        }
    }

    /// Attach paint properties, replacing earlier values with the same key
    pub fn with_properties(mut self, properties: Vec<PropertyValue>) -> Self {
        for property in properties {
            self.set_paint_property(property);
        }
        self
    }

    /// Get the layer id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the id of the source this layer draws from
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Get all current paint properties
    pub fn paint(&self) -> &[PropertyValue] {
        &self.paint
    }

    /// Get the current paint value for a style-spec key, if set
    pub fn paint_value(&self, key: &str) -> Option<&Value> {
        self.paint
            .iter()
            .find(|property| property.key() == key)
            .map(PropertyValue::value)
    }

    /// Set or replace one paint value, keeping the position of replaced keys
    pub fn set_paint_property(&mut self, property: PropertyValue) {
        match self
            .paint
            .iter_mut()
            .find(|existing| existing.key() == property.key())
        {
            Some(existing) => *existing = property,
            None => self.paint.push(property),
        }
    }
}
