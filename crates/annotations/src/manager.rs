//! Circle bookkeeping and layer lifecycle

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use geojson::FeatureCollection;
use tilemark_map::{
    circle_blur, circle_color, circle_opacity, circle_pitch_alignment, circle_pitch_scale,
    circle_radius, circle_stroke_color, circle_stroke_opacity, circle_stroke_width,
    circle_translate, circle_translate_anchor, CircleLayer, ClickSubscription, Expression,
    GeoJsonSource, MapApi, MapResult, PitchAlignment, PitchScale, PropertyValue, TranslateAnchor,
};

use crate::circle::Circle;
use crate::click::MapClickResolver;
use crate::options::CircleOptions;

/// Source id registered for circle features
pub const CIRCLE_SOURCE_ID: &str = "tilemark-circle-source";

/// Layer id registered for circle rendering
pub const CIRCLE_LAYER_ID: &str = "tilemark-circle-layer";

/// Handle identifying a registered circle click listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Listener invoked with the resolved circle for every click that hits one
pub(crate) type CircleClickListener = Rc<dyn Fn(&Circle)>;

pub(crate) type CircleRegistry = RefCell<HashMap<u64, Circle>>;
pub(crate) type ListenerRegistry = RefCell<Vec<(ListenerId, CircleClickListener)>>;

/// Manages circle annotations drawn through a host map engine
///
/// All operations must run on the host UI thread. The manager shares its
/// registries with the engine click callback through `Rc` handles; there is
/// no locking because nothing else touches them.
pub struct CircleManager<M: MapApi> {
    map: Rc<M>,
    layer: CircleLayer,
    source: GeoJsonSource,
    annotations: Rc<CircleRegistry>,
    click_listeners: Rc<ListenerRegistry>,
    next_annotation_id: u64,
    next_listener_id: u64,
    click_subscription: ClickSubscription,
}

impl<M: MapApi + 'static> CircleManager<M> {
    /// Create a circle manager, registering the circle source and layer
    ///
    /// `below_layer_id` orders the circle layer beneath a named existing
    /// layer; `None` places it above all current layers.
    pub fn new(map: Rc<M>, below_layer_id: Option<&str>) -> MapResult<Self> {
        let source = GeoJsonSource::new(CIRCLE_SOURCE_ID);
        let layer =
            CircleLayer::new(CIRCLE_LAYER_ID, CIRCLE_SOURCE_ID).with_properties(layer_definition());
        Self::with_style(map, source, layer, below_layer_id)
    }

    /// Create a circle manager with a caller-supplied source and layer
    pub fn with_style(
        map: Rc<M>,
        source: GeoJsonSource,
        layer: CircleLayer,
        below_layer_id: Option<&str>,
    ) -> MapResult<Self> {
        map.add_source(&source)?;
        match below_layer_id {
            Some(below) => map.add_layer_below(&layer, below)?,
            None => map.add_layer(&layer)?,
        }

        let annotations: Rc<CircleRegistry> = Rc::new(RefCell::new(HashMap::new()));
        let click_listeners: Rc<ListenerRegistry> = Rc::new(RefCell::new(Vec::new()));

        let resolver = MapClickResolver::new(
            Rc::downgrade(&map),
            layer.id().to_owned(),
            Rc::downgrade(&annotations),
            Rc::downgrade(&click_listeners),
        );
        let click_subscription =
            map.add_click_listener(Box::new(move |point| resolver.on_map_click(point)));
        log::debug!("circle manager initialized on layer {}", layer.id());

        Ok(Self {
            map,
            layer,
            source,
            annotations,
            click_listeners,
            next_annotation_id: 0,
            next_listener_id: 0,
            click_subscription,
        })
    }

    /// Create a circle on the map from the given options
    ///
    /// Returns a snapshot of the created circle; mutate the snapshot and pass
    /// it to [`CircleManager::update`] to change the rendered state.
    pub fn create_circle(&mut self, options: CircleOptions) -> Circle {
        let id = self.next_annotation_id;
        self.next_annotation_id += 1;

        let (center, data) = options.into_parts();
        let circle = Circle::new(id, center, data);
        self.annotations.borrow_mut().insert(id, circle.clone());
        self.update_source();
        circle
    }

    /// Get a snapshot of a managed circle by identifier
    pub fn get(&self, id: u64) -> Option<Circle> {
        self.annotations.borrow().get(&id).cloned()
    }

    /// Get snapshots of all managed circles in identifier order
    pub fn annotations(&self) -> Vec<Circle> {
        let annotations = self.annotations.borrow();
        let mut circles: Vec<Circle> = annotations.values().cloned().collect();
        circles.sort_by_key(Circle::id);
        circles
    }

    /// Number of managed circles
    pub fn len(&self) -> usize {
        self.annotations.borrow().len()
    }

    /// Check whether no circles are managed
    pub fn is_empty(&self) -> bool {
        self.annotations.borrow().is_empty()
    }

    /// Replace a managed circle with an updated copy and resync the source
    ///
    /// Updates for identifiers that are no longer managed are ignored; the
    /// circle was deleted in the meantime and must not be resurrected.
    pub fn update(&mut self, circle: Circle) {
        let replaced = {
            let mut annotations = self.annotations.borrow_mut();
            match annotations.entry(circle.id()) {
                Entry::Occupied(mut entry) => {
                    entry.insert(circle);
                    true
                }
                Entry::Vacant(_) => false,
            }
        };
        if replaced {
            self.update_source();
        }
    }

    /// Remove a circle, returning it if it was managed
    ///
    /// The identifier is never reassigned to a later circle.
    pub fn delete(&mut self, id: u64) -> Option<Circle> {
        let removed = self.annotations.borrow_mut().remove(&id);
        if removed.is_some() {
            self.update_source();
        }
        removed
    }

    /// Remove every managed circle
    pub fn delete_all(&mut self) {
        self.annotations.borrow_mut().clear();
        self.update_source();
    }

    /// Register a click listener, invoked in registration order
    pub fn add_click_listener(&mut self, listener: impl Fn(&Circle) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.click_listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a previously registered click listener
    pub fn remove_click_listener(&mut self, id: ListenerId) {
        self.click_listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Get the circle-translate property
    pub fn circle_translate(&self) -> Option<[f64; 2]> {
        let value = self.layer.paint_value("circle-translate")?;
        let offset = value.as_array()?;
        Some([offset.first()?.as_f64()?, offset.get(1)?.as_f64()?])
    }

    /// Set the circle-translate property
    pub fn set_circle_translate(&mut self, offset: [f64; 2]) {
        self.set_layer_property(circle_translate(offset));
    }

    /// Get the circle-translate-anchor property
    pub fn circle_translate_anchor(&self) -> Option<TranslateAnchor> {
        self.layer
            .paint_value("circle-translate-anchor")?
            .as_str()
            .and_then(TranslateAnchor::parse)
    }

    /// Set the circle-translate-anchor property
    pub fn set_circle_translate_anchor(&mut self, anchor: TranslateAnchor) {
        self.set_layer_property(circle_translate_anchor(anchor));
    }

    /// Get the circle-pitch-scale property
    pub fn circle_pitch_scale(&self) -> Option<PitchScale> {
        self.layer
            .paint_value("circle-pitch-scale")?
            .as_str()
            .and_then(PitchScale::parse)
    }

    /// Set the circle-pitch-scale property
    pub fn set_circle_pitch_scale(&mut self, scale: PitchScale) {
        self.set_layer_property(circle_pitch_scale(scale));
    }

    /// Get the circle-pitch-alignment property
    pub fn circle_pitch_alignment(&self) -> Option<PitchAlignment> {
        self.layer
            .paint_value("circle-pitch-alignment")?
            .as_str()
            .and_then(PitchAlignment::parse)
    }

    /// Set the circle-pitch-alignment property
    pub fn set_circle_pitch_alignment(&mut self, alignment: PitchAlignment) {
        self.set_layer_property(circle_pitch_alignment(alignment));
    }

    /// Get the layer descriptor, including current paint values
    pub fn layer(&self) -> &CircleLayer {
        &self.layer
    }

    /// Get the source descriptor, mirroring the last pushed collection
    pub fn source(&self) -> &GeoJsonSource {
        &self.source
    }

    /// Rebuild the feature collection in identifier order and push it to the
    /// engine source
    fn update_source(&mut self) {
        let features = {
            let annotations = self.annotations.borrow();
            let mut ids: Vec<u64> = annotations.keys().copied().collect();
            ids.sort_unstable();
            ids.iter()
                .filter_map(|id| annotations.get(id))
                .map(Circle::to_feature)
                .collect()
        };

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        self.map.set_geojson(self.source.id(), &collection);
        self.source.set_collection(collection);
    }

    fn set_layer_property(&mut self, property: PropertyValue) {
        self.map.set_paint_property(self.layer.id(), &property);
        self.layer.set_paint_property(property);
    }
}

impl<M: MapApi> Drop for CircleManager<M> {
    /// Deregister the engine click callback on teardown
    fn drop(&mut self) {
        self.map.remove_click_listener(self.click_subscription);
    }
}

/// Data-driven layer definition: every per-feature paint property reads the
/// identically named property of each rendered feature, so circles carry
/// their own visual parameters while sharing one layer
fn layer_definition() -> Vec<PropertyValue> {
    vec![
        circle_radius(Expression::get("circle-radius")),
        circle_color(Expression::get("circle-color")),
        circle_blur(Expression::get("circle-blur")),
        circle_opacity(Expression::get("circle-opacity")),
        circle_stroke_width(Expression::get("circle-stroke-width")),
        circle_stroke_color(Expression::get("circle-stroke-color")),
        circle_stroke_opacity(Expression::get("circle-stroke-opacity")),
    ]
}
