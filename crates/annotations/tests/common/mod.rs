//! Recording engine double shared by the integration suites
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use geojson::FeatureCollection;
use serde_json::json;
use tilemark_annotations::Circle;
use tilemark_map::{
    CircleLayer, ClickSubscription, GeoJsonSource, LngLat, MapApi, MapClickCallback, MapError,
    MapResult, PropertyValue, RenderedFeature, ScreenPoint,
};

/// One layer registration observed by the spy
#[derive(Debug, Clone)]
pub struct LayerRecord {
    pub id: String,
    pub source_id: String,
    pub below: Option<String>,
    pub paint: Vec<PropertyValue>,
}

/// Engine double recording every boundary call and replaying canned
/// hit-test results
#[derive(Default)]
pub struct SpyMap {
    sources: RefCell<Vec<String>>,
    layers: RefCell<Vec<LayerRecord>>,
    geojson_updates: RefCell<Vec<(String, FeatureCollection)>>,
    paint_updates: RefCell<Vec<(String, PropertyValue)>>,
    query_calls: RefCell<Vec<(ScreenPoint, String)>>,
    query_results: RefCell<Vec<RenderedFeature>>,
    click_callbacks: RefCell<HashMap<u64, Rc<MapClickCallback>>>,
    next_subscription: Cell<u64>,
}

impl SpyMap {
    /// Queue the features returned by the next hit-test queries
    pub fn set_query_results(&self, features: Vec<RenderedFeature>) {
        *self.query_results.borrow_mut() = features;
    }

    /// Deliver a map click to every registered callback
    pub fn fire_click(&self, point: LngLat) {
        let callbacks: Vec<Rc<MapClickCallback>> =
            self.click_callbacks.borrow().values().cloned().collect();
        for callback in &callbacks {
            callback(point);
        }
    }

    pub fn sources(&self) -> Vec<String> {
        self.sources.borrow().clone()
    }

    pub fn layers(&self) -> Vec<LayerRecord> {
        self.layers.borrow().clone()
    }

    pub fn last_geojson(&self) -> Option<FeatureCollection> {
        self.geojson_updates
            .borrow()
            .last()
            .map(|(_, collection)| collection.clone())
    }

    pub fn geojson_update_count(&self) -> usize {
        self.geojson_updates.borrow().len()
    }

    pub fn paint_updates(&self) -> Vec<(String, PropertyValue)> {
        self.paint_updates.borrow().clone()
    }

    pub fn query_call_count(&self) -> usize {
        self.query_calls.borrow().len()
    }

    pub fn click_listener_count(&self) -> usize {
        self.click_callbacks.borrow().len()
    }
}

impl MapApi for SpyMap {
    fn add_source(&self, source: &GeoJsonSource) -> MapResult<()> {
        let mut sources = self.sources.borrow_mut();
        if sources.iter().any(|id| id == source.id()) {
            return Err(MapError::SourceAlreadyAdded(source.id().to_owned()));
        }
        sources.push(source.id().to_owned());
        Ok(())
    }

    fn add_layer(&self, layer: &CircleLayer) -> MapResult<()> {
        self.register_layer(layer, None)
    }

    fn add_layer_below(&self, layer: &CircleLayer, below_layer_id: &str) -> MapResult<()> {
        self.register_layer(layer, Some(below_layer_id.to_owned()))
    }

    fn set_geojson(&self, source_id: &str, collection: &FeatureCollection) {
        self.geojson_updates
            .borrow_mut()
            .push((source_id.to_owned(), collection.clone()));
    }

    fn set_paint_property(&self, layer_id: &str, property: &PropertyValue) {
        self.paint_updates
            .borrow_mut()
            .push((layer_id.to_owned(), property.clone()));
    }

    fn query_rendered_features(&self, point: ScreenPoint, layer_id: &str) -> Vec<RenderedFeature> {
        self.query_calls
            .borrow_mut()
            .push((point, layer_id.to_owned()));
        self.query_results.borrow().clone()
    }

    fn project(&self, coordinate: LngLat) -> ScreenPoint {
        ScreenPoint::new(coordinate.lng as f32, coordinate.lat as f32)
    }

    fn add_click_listener(&self, callback: MapClickCallback) -> ClickSubscription {
        let token = self.next_subscription.get();
        self.next_subscription.set(token + 1);
        self.click_callbacks
            .borrow_mut()
            .insert(token, Rc::new(callback));
        ClickSubscription::new(token)
    }

    fn remove_click_listener(&self, subscription: ClickSubscription) {
        self.click_callbacks
            .borrow_mut()
            .remove(&subscription.token());
    }
}

impl SpyMap {
    fn register_layer(&self, layer: &CircleLayer, below: Option<String>) -> MapResult<()> {
        let mut layers = self.layers.borrow_mut();
        if layers.iter().any(|record| record.id == layer.id()) {
            return Err(MapError::LayerAlreadyAdded(layer.id().to_owned()));
        }
        if !self.sources.borrow().iter().any(|id| id == layer.source_id()) {
            return Err(MapError::SourceNotFound {
                layer: layer.id().to_owned(),
                source: layer.source_id().to_owned(),
            });
        }
        layers.push(LayerRecord {
            id: layer.id().to_owned(),
            source_id: layer.source_id().to_owned(),
            below,
            paint: layer.paint().to_vec(),
        });
        Ok(())
    }
}

/// Rendered-feature snapshot carrying a circle identifier property
pub fn rendered_circle(id: u64) -> RenderedFeature {
    let mut properties = geojson::JsonObject::new();
    properties.insert(Circle::ID_KEY.to_owned(), json!(id));
    RenderedFeature::with_properties(properties)
}
