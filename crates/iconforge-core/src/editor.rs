//! Editing session: routes scene events to the snap engine and layer stack.

use crate::config::{ConfigError, EditorConfig};
use crate::ids::generate_unique_id;
use crate::layers::{LayerDirection, LayerPanel};
use crate::scene::{Scene, SceneEvent, SceneHost};
use crate::shapes::{CanvasObject, ColorError, DEFAULT_ICON_PREFIX, IconPath, RECTANGLE_PREFIX, SerializableColor};
use crate::snap::{self, SnapResult};
use kurbo::Point;

/// An icon editing session over an in-memory scene.
///
/// Every public operation drains the scene's event queue before returning, so
/// the layer list and guidelines are always up to date afterwards.
#[derive(Debug, Clone)]
pub struct IconEditor {
    scene: Scene,
    layers: LayerPanel,
    config: EditorConfig,
    last_snap: Option<SnapResult>,
}

impl IconEditor {
    /// Create a session with an empty canvas.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut scene = Scene::new(config.canvas_size());
        scene.set_background(Some(config.background_color()?));
        scene.render_all();

        let mut editor = Self {
            scene,
            layers: LayerPanel::new(),
            config,
            last_snap: None,
        };
        editor.layers.refresh(&editor.scene);
        Ok(editor)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layers(&self) -> &LayerPanel {
        &self.layers
    }

    /// Add a rectangle with the toolbar defaults. Returns its id.
    pub fn add_rectangle(&mut self) -> String {
        let id = generate_unique_id(&self.scene, RECTANGLE_PREFIX);
        self.add_object(CanvasObject::rectangle(id.clone()));
        id
    }

    /// Add an icon glyph. Ids are numbered under `prefix`, or under
    /// [`DEFAULT_ICON_PREFIX`] when none is given.
    pub fn add_icon(&mut self, glyph: &IconPath, prefix: Option<&str>) -> String {
        let id = generate_unique_id(&self.scene, prefix.unwrap_or(DEFAULT_ICON_PREFIX));
        self.add_object(CanvasObject::icon(id.clone(), glyph));
        id
    }

    /// Add an arbitrary object on top of the stack.
    pub fn add_object(&mut self, object: CanvasObject) {
        log::debug!("adding {} {}", object.kind.as_str(), object.id);
        self.scene.add(object.into());
        self.scene.render_all();
        self.pump_events();
    }

    /// Change the canvas background. Invalid colors leave it unchanged.
    pub fn set_background_hex(&mut self, value: &str) -> Result<(), ColorError> {
        let color = SerializableColor::from_hex(value).inspect_err(|_| {
            log::warn!("ignoring invalid background color {:?}", value);
        })?;
        self.scene.set_background(Some(color));
        self.scene.render_all();
        Ok(())
    }

    /// Drag an object to `position`, as one pointer-move update.
    ///
    /// Returns the snap outcome, or `None` if the object does not exist or is
    /// locked.
    pub fn drag(&mut self, id: &str, position: Point) -> Option<SnapResult> {
        if !self.scene.object(id)?.evented {
            return None;
        }
        self.scene.drag_object(id, position);
        self.pump_events();
        self.last_snap.take()
    }

    /// End the gesture on an object (pointer release).
    pub fn release(&mut self, id: &str) -> bool {
        let committed = self.scene.commit_object(id);
        self.pump_events();
        committed
    }

    pub fn select(&mut self, id: &str) -> bool {
        let selected = self.layers.select_layer(&mut self.scene, id);
        self.pump_events();
        selected
    }

    pub fn deselect(&mut self) {
        self.scene.discard_active_object();
        self.scene.render_all();
        self.pump_events();
    }

    pub fn move_selected(&mut self, direction: LayerDirection) -> bool {
        let moved = self.layers.move_selected(&mut self.scene, direction);
        self.pump_events();
        moved
    }

    pub fn toggle_lock(&mut self) -> Option<bool> {
        let locked = self.layers.toggle_lock(&mut self.scene);
        self.pump_events();
        locked
    }

    pub fn delete_layer(&mut self, id: &str) -> bool {
        let deleted = self.layers.delete_layer(&mut self.scene, id);
        self.pump_events();
        deleted
    }

    /// Process queued scene events until none remain.
    /// Returns how many were handled.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.scene.next_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    fn handle_event(&mut self, event: SceneEvent) {
        log::trace!("scene event: {:?}", event);
        match event {
            SceneEvent::ObjectMoving(id) => {
                self.last_snap = snap::evaluate_move(&mut self.scene, &id, &self.config.snap);
            }
            SceneEvent::ObjectModified(_) => {
                snap::clear_guidelines(&mut self.scene);
                self.layers.refresh(&self.scene);
            }
            SceneEvent::ObjectAdded(_) | SceneEvent::ObjectRemoved(_) => {
                self.layers.refresh(&self.scene);
            }
            SceneEvent::SelectionCreated(ids) | SceneEvent::SelectionUpdated(ids) => {
                self.layers.handle_selection(&self.scene, &ids);
            }
            SceneEvent::SelectionCleared => {
                self.layers.handle_selection(&self.scene, &[]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerEntry;

    fn editor() -> IconEditor {
        IconEditor::new(EditorConfig {
            canvas_width: 248.0,
            canvas_height: 248.0,
            ..EditorConfig::default()
        })
        .unwrap()
    }

    fn ids(layers: &[LayerEntry]) -> Vec<&str> {
        layers.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_new_applies_background() {
        let editor = editor();
        assert_eq!(editor.scene().background(), Some(SerializableColor::white()));
        assert!(editor.layers().layers().is_empty());
    }

    #[test]
    fn test_add_refreshes_layers() {
        let mut editor = editor();
        let first = editor.add_rectangle();
        let second = editor.add_icon(&IconPath::filled("M0 0h24v24H0z"), None);
        assert_eq!(first, "rectangle-1");
        assert_eq!(second, "mdi:sword-1");
        assert_eq!(ids(editor.layers().layers()), vec!["mdi:sword-1", "rectangle-1"]);
    }

    #[test]
    fn test_drag_snaps_and_release_clears() {
        let mut editor = editor();
        let id = editor.add_rectangle();

        let result = editor.drag(&id, Point::new(3.0, 120.0)).unwrap();
        assert!(result.snapped_x);
        assert_eq!(editor.scene().object(&id).unwrap().left, 0.0);
        assert_eq!(editor.scene().guidelines().count(), 1);
        // Guidelines never show up as layers.
        assert_eq!(ids(editor.layers().layers()), vec!["rectangle-1"]);

        assert!(editor.release(&id));
        assert_eq!(editor.scene().guidelines().count(), 0);
    }

    #[test]
    fn test_locked_object_cannot_be_dragged() {
        let mut editor = editor();
        let id = editor.add_rectangle();
        editor.select(&id);
        assert_eq!(editor.toggle_lock(), Some(true));
        assert!(editor.drag(&id, Point::new(3.0, 3.0)).is_none());
        assert_eq!(editor.scene().object(&id).unwrap().position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_selection_events_reach_panel() {
        let mut editor = editor();
        let id = editor.add_rectangle();
        assert!(editor.select(&id));
        assert_eq!(editor.layers().selected_layer(), Some(id.as_str()));
        editor.deselect();
        assert_eq!(editor.layers().selected_layer(), None);
    }

    #[test]
    fn test_invalid_background_is_rejected() {
        let mut editor = editor();
        assert!(editor.set_background_hex("#12345").is_err());
        assert_eq!(editor.scene().background(), Some(SerializableColor::white()));
        editor.set_background_hex("1a2b3c").unwrap();
        assert_eq!(
            editor.scene().background().map(|c| c.to_hex()).as_deref(),
            Some("#1a2b3c")
        );
    }
}
