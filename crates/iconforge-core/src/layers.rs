//! Layer stack management: z-order of canvas objects and the layer list.
//!
//! The scene's item order is the render order (back to front). The layer list
//! shown to users is that order reversed, topmost first, with guidelines left
//! out. It is always rebuilt from the scene rather than patched.

use crate::scene::{ItemId, SceneHost, SceneItem};
use crate::shapes::ObjectKind;

/// One row of the layer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub id: String,
    /// Position in the scene's render order (0 = bottommost).
    pub z_index: usize,
    pub kind: ObjectKind,
}

impl LayerEntry {
    /// Icon name shown next to this row.
    pub fn icon(&self) -> &'static str {
        self.kind.layer_icon()
    }
}

/// Direction to move a layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// One step towards the front (top of the layer list).
    Up,
    /// One step towards the back.
    Down,
}

/// Annotate the user objects of `items` with their z-index, bottom to top.
///
/// Indices come from each object's position in the full collection, so they
/// are unique and strictly increasing.
pub fn recompute_z_indices(items: &[SceneItem]) -> Vec<LayerEntry> {
    items
        .iter()
        .enumerate()
        .filter_map(|(z_index, item)| {
            item.as_object().map(|obj| LayerEntry {
                id: obj.id.clone(),
                z_index,
                kind: obj.kind,
            })
        })
        .collect()
}

/// Build the layer list for display: topmost layer first.
pub fn refresh_layers<H: SceneHost>(host: &H) -> Vec<LayerEntry> {
    let mut layers = recompute_z_indices(host.items());
    layers.reverse();
    layers
}

/// Move an object one step up or down the stack.
///
/// The scene is rebuilt in the new order with a single render at the end; the
/// background is carried across the rebuild and the object is re-selected.
/// Returns false if the object is missing or already at the end of the stack.
pub fn move_layer<H: SceneHost>(host: &mut H, id: &str, direction: LayerDirection) -> bool {
    let item_id = ItemId::Object(id.to_string());
    let Some(pos) = host.items().iter().position(|item| item.matches(&item_id)) else {
        return false;
    };
    let target = match direction {
        LayerDirection::Up if pos + 1 < host.items().len() => pos + 1,
        LayerDirection::Down if pos > 0 => pos - 1,
        _ => return false,
    };

    let background = host.background();
    let mut items = host.clear();
    items.swap(pos, target);
    for item in items {
        host.add(item);
    }
    host.set_background(background);
    host.set_active_object(id);
    host.render_all();

    log::debug!("moved layer {} {:?} from z-index {} to {}", id, direction, pos, target);
    true
}

/// Flip the lock state of the active object.
///
/// Locking inverts `selectable` and `evented` alongside `locked`. Returns the
/// new lock state, or `None` if nothing is selected.
pub fn toggle_lock<H: SceneHost>(host: &mut H) -> Option<bool> {
    let id = host.active_object()?.to_string();
    let obj = host.object_mut(&id)?;
    obj.locked = !obj.locked;
    obj.selectable = !obj.selectable;
    obj.evented = !obj.evented;
    let locked = obj.locked;
    host.render_all();
    Some(locked)
}

/// Remove the object with the given id. Returns false if it was not found.
pub fn delete_layer<H: SceneHost>(host: &mut H, id: &str) -> bool {
    if host.remove(&ItemId::Object(id.to_string())).is_none() {
        return false;
    }
    host.render_all();
    true
}

/// Make the object with the given id the active object.
pub fn select_layer<H: SceneHost>(host: &mut H, id: &str) -> bool {
    if !host.set_active_object(id) {
        return false;
    }
    host.render_all();
    true
}

/// Layer list state as seen by the UI.
#[derive(Debug, Clone, Default)]
pub struct LayerPanel {
    layers: Vec<LayerEntry>,
    selected: Option<String>,
    locked: bool,
}

impl LayerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached layer list, topmost first.
    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    /// Id of the selected layer.
    pub fn selected_layer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Lock state of the selected layer.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Rebuild the cached list from the scene.
    pub fn refresh<H: SceneHost>(&mut self, host: &H) -> &[LayerEntry] {
        self.layers = refresh_layers(host);
        &self.layers
    }

    /// Mirror a selection change. `selected` holds the newly selected ids;
    /// an empty slice means the selection was cleared.
    pub fn handle_selection<H: SceneHost>(&mut self, host: &H, selected: &[String]) {
        match selected.first() {
            Some(id) => {
                self.locked = host.object(id).is_some_and(|obj| obj.locked);
                self.selected = Some(id.clone());
            }
            None => {
                self.selected = None;
                self.locked = false;
            }
        }
    }

    /// Move the selected layer one step. The list is refreshed either way.
    pub fn move_selected<H: SceneHost>(&mut self, host: &mut H, direction: LayerDirection) -> bool {
        let moved = match self.selected.clone() {
            Some(id) => move_layer(host, &id, direction),
            None => false,
        };
        self.refresh(host);
        moved
    }

    /// Toggle the lock of the active object and mirror the new state.
    pub fn toggle_lock<H: SceneHost>(&mut self, host: &mut H) -> Option<bool> {
        let locked = toggle_lock(host)?;
        self.locked = locked;
        Some(locked)
    }

    pub fn delete_layer<H: SceneHost>(&mut self, host: &mut H, id: &str) -> bool {
        delete_layer(host, id)
    }

    pub fn select_layer<H: SceneHost>(&mut self, host: &mut H, id: &str) -> bool {
        select_layer(host, id)
    }
}
