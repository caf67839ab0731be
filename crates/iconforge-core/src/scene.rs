//! Scene host abstraction and the in-memory scene.
//!
//! The scene owns every item drawn on the canvas in render order (back to
//! front). User objects and guidelines share that collection but are kept
//! apart at the type level by [`SceneItem`].

use crate::guideline::{Guideline, GuidelineKind};
use crate::shapes::{CanvasObject, SerializableColor};
use kurbo::{Point, Size};
use std::collections::VecDeque;

/// Identifier of an item in the scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Object(String),
    Guideline(GuidelineKind),
}

impl ItemId {
    /// Textual id, as shown to users.
    pub fn as_str(&self) -> &str {
        match self {
            ItemId::Object(id) => id,
            ItemId::Guideline(kind) => kind.id(),
        }
    }
}

/// An item in the scene's render list.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    Object(CanvasObject),
    Guideline(Guideline),
}

impl SceneItem {
    pub fn id(&self) -> ItemId {
        match self {
            SceneItem::Object(obj) => ItemId::Object(obj.id.clone()),
            SceneItem::Guideline(guide) => ItemId::Guideline(guide.kind),
        }
    }

    /// Check whether this item has the given id.
    pub fn matches(&self, id: &ItemId) -> bool {
        match (self, id) {
            (SceneItem::Object(obj), ItemId::Object(other)) => obj.id == *other,
            (SceneItem::Guideline(guide), ItemId::Guideline(kind)) => guide.kind == *kind,
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&CanvasObject> {
        match self {
            SceneItem::Object(obj) => Some(obj),
            SceneItem::Guideline(_) => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut CanvasObject> {
        match self {
            SceneItem::Object(obj) => Some(obj),
            SceneItem::Guideline(_) => None,
        }
    }

    pub fn as_guideline(&self) -> Option<&Guideline> {
        match self {
            SceneItem::Guideline(guide) => Some(guide),
            SceneItem::Object(_) => None,
        }
    }

    pub fn is_guideline(&self) -> bool {
        matches!(self, SceneItem::Guideline(_))
    }
}

impl From<CanvasObject> for SceneItem {
    fn from(obj: CanvasObject) -> Self {
        SceneItem::Object(obj)
    }
}

impl From<Guideline> for SceneItem {
    fn from(guide: Guideline) -> Self {
        SceneItem::Guideline(guide)
    }
}

/// Notifications emitted by a scene host.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// An object is being dragged; its position has already been updated.
    ObjectMoving(String),
    /// A drag, resize or rotation gesture was committed.
    ObjectModified(String),
    ObjectAdded(ItemId),
    ObjectRemoved(ItemId),
    /// Selection made while nothing was selected.
    SelectionCreated(Vec<String>),
    /// Selection replaced by a different one.
    SelectionUpdated(Vec<String>),
    SelectionCleared,
}

/// The canvas collaborator the snap engine and layer stack operate on.
///
/// Render order is collection order: index 0 is drawn first (bottommost).
pub trait SceneHost {
    /// Canvas dimensions.
    fn size(&self) -> Size;

    /// All items in render order (back to front).
    fn items(&self) -> &[SceneItem];

    /// Append an item on top of the stack.
    fn add(&mut self, item: SceneItem);

    /// Remove an item, returning it if present.
    fn remove(&mut self, id: &ItemId) -> Option<SceneItem>;

    /// Remove every item, returning them in render order.
    ///
    /// Also drops the active selection and resets the background.
    fn clear(&mut self) -> Vec<SceneItem>;

    /// Get a mutable reference to a user object by id.
    fn object_mut(&mut self, id: &str) -> Option<&mut CanvasObject>;

    /// Id of the active (selected) object.
    fn active_object(&self) -> Option<&str>;

    /// Make an object the active one. Returns false if it does not exist.
    fn set_active_object(&mut self, id: &str) -> bool;

    /// Drop the active selection.
    fn discard_active_object(&mut self);

    fn background(&self) -> Option<SerializableColor>;

    fn set_background(&mut self, color: Option<SerializableColor>);

    /// Request a redraw of the whole canvas.
    fn render_all(&mut self);

    /// User objects in render order, guidelines excluded.
    fn objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.items().iter().filter_map(SceneItem::as_object)
    }

    /// Guidelines in render order.
    fn guidelines(&self) -> impl Iterator<Item = &Guideline> {
        self.items().iter().filter_map(SceneItem::as_guideline)
    }

    /// Get a user object by id.
    fn object(&self, id: &str) -> Option<&CanvasObject> {
        self.objects().find(|obj| obj.id == id)
    }
}

/// In-memory scene host.
///
/// Mutations queue [`SceneEvent`]s which the owner drains with
/// [`Scene::next_event`].
#[derive(Debug, Clone)]
pub struct Scene {
    size: Size,
    items: Vec<SceneItem>,
    active: Option<String>,
    background: Option<SerializableColor>,
    events: VecDeque<SceneEvent>,
    frames: u64,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            items: Vec::new(),
            active: None,
            background: None,
            events: VecDeque::new(),
            frames: 0,
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queue an event, as if delivered by the input layer.
    pub fn emit(&mut self, event: SceneEvent) {
        self.events.push_back(event);
    }

    /// Pop the oldest pending event.
    pub fn next_event(&mut self) -> Option<SceneEvent> {
        self.events.pop_front()
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Drag an object to a new top-left position.
    /// Returns false if there is no such object.
    pub fn drag_object(&mut self, id: &str, position: Point) -> bool {
        let Some(obj) = self.object_mut(id) else {
            return false;
        };
        obj.set_position(position);
        self.emit(SceneEvent::ObjectMoving(id.to_string()));
        true
    }

    /// Commit the current gesture on an object.
    pub fn commit_object(&mut self, id: &str) -> bool {
        if self.object(id).is_none() {
            return false;
        }
        self.emit(SceneEvent::ObjectModified(id.to_string()));
        true
    }

    /// Ids of items in render order.
    pub fn order(&self) -> Vec<ItemId> {
        self.items.iter().map(SceneItem::id).collect()
    }
}

impl SceneHost for Scene {
    fn size(&self) -> Size {
        self.size
    }

    fn items(&self) -> &[SceneItem] {
        &self.items
    }

    fn add(&mut self, item: SceneItem) {
        let id = item.id();
        self.items.push(item);
        self.emit(SceneEvent::ObjectAdded(id));
    }

    fn remove(&mut self, id: &ItemId) -> Option<SceneItem> {
        let pos = self.items.iter().position(|item| item.matches(id))?;
        let item = self.items.remove(pos);
        if let ItemId::Object(obj_id) = id {
            if self.active.as_deref() == Some(obj_id.as_str()) {
                self.discard_active_object();
            }
        }
        self.emit(SceneEvent::ObjectRemoved(id.clone()));
        Some(item)
    }

    fn clear(&mut self) -> Vec<SceneItem> {
        self.discard_active_object();
        self.background = None;
        let items = std::mem::take(&mut self.items);
        for item in &items {
            self.events.push_back(SceneEvent::ObjectRemoved(item.id()));
        }
        items
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut CanvasObject> {
        self.items
            .iter_mut()
            .filter_map(SceneItem::as_object_mut)
            .find(|obj| obj.id == id)
    }

    fn active_object(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn set_active_object(&mut self, id: &str) -> bool {
        if self.object(id).is_none() {
            return false;
        }
        let selected = vec![id.to_string()];
        match self.active.replace(id.to_string()) {
            None => self.emit(SceneEvent::SelectionCreated(selected)),
            Some(previous) if previous != id => self.emit(SceneEvent::SelectionUpdated(selected)),
            Some(_) => {}
        }
        true
    }

    fn discard_active_object(&mut self) {
        if self.active.take().is_some() {
            self.emit(SceneEvent::SelectionCleared);
        }
    }

    fn background(&self) -> Option<SerializableColor> {
        self.background
    }

    fn set_background(&mut self, color: Option<SerializableColor>) {
        self.background = color;
    }

    fn render_all(&mut self) {
        self.frames += 1;
    }
}
