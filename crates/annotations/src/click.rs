//! Map click resolution

use std::rc::{Rc, Weak};

use tilemark_map::{LngLat, MapApi};

use crate::circle::Circle;
use crate::manager::{CircleClickListener, CircleRegistry, ListenerRegistry};

/// Translates engine map clicks into circle click notifications
///
/// The resolver holds weak handles to the manager's registries so the engine
/// callback never extends their lifetime; a click delivered after manager
/// teardown degrades to a no-op. The engine itself is held weakly for the
/// same reason: the callback lives inside the engine.
pub(crate) struct MapClickResolver<M> {
    map: Weak<M>,
    layer_id: String,
    annotations: Weak<CircleRegistry>,
    click_listeners: Weak<ListenerRegistry>,
}

impl<M: MapApi> MapClickResolver<M> {
    pub(crate) fn new(
        map: Weak<M>,
        layer_id: String,
        annotations: Weak<CircleRegistry>,
        click_listeners: Weak<ListenerRegistry>,
    ) -> Self {
        Self {
            map,
            layer_id,
            annotations,
            click_listeners,
        }
    }

    /// Resolve a map click to at most one circle and fan it out
    ///
    /// Every miss (no listeners, no rendered feature under the click, no
    /// identifier, stale identifier) is a silent no-op.
    pub(crate) fn on_map_click(&self, point: LngLat) {
        let Some(map) = self.map.upgrade() else {
            return;
        };
        let Some(annotations) = self.annotations.upgrade() else {
            return;
        };
        let Some(click_listeners) = self.click_listeners.upgrade() else {
            return;
        };
        if click_listeners.borrow().is_empty() {
            return;
        }

        let screen_location = map.project(point);
        let features = map.query_rendered_features(screen_location, &self.layer_id);
        // Only the top-most rendered feature is consulted, never a fallback
        // search through the rest of the hit set.
        let Some(feature) = features.first() else {
            return;
        };
        let Some(circle_id) = feature.id_property(Circle::ID_KEY) else {
            return;
        };

        let circle = annotations.borrow().get(&circle_id).cloned();
        let Some(circle) = circle else {
            // Stale feature: the backing circle was deleted after the last
            // render.
            log::trace!("map click resolved to unknown circle {circle_id}");
            return;
        };

        // Snapshot the listener list so a listener may re-enter the manager
        // without aliasing the registry borrow.
        let listeners: Vec<CircleClickListener> = click_listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &listeners {
            listener(&circle);
        }
    }
}
