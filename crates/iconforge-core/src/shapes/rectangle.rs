//! Rectangle objects.

use super::{CanvasObject, ObjectKind, ObjectStyle, SerializableColor, Shadow};
use kurbo::Point;

/// Id prefix for rectangles added from the toolbar.
pub const RECTANGLE_PREFIX: &str = "rectangle-";

impl CanvasObject {
    /// Default placement of a new rectangle.
    pub const DEFAULT_RECT_POSITION: Point = Point::new(100.0, 100.0);
    /// Default side length of a new rectangle.
    pub const DEFAULT_RECT_SIZE: f64 = 100.0;
    /// Default fill of a new rectangle (light sea green).
    pub const DEFAULT_RECT_FILL: SerializableColor = SerializableColor {
        r: 0x20,
        g: 0xb2,
        b: 0xaa,
        a: 255,
    };

    /// Create a rectangle with the toolbar defaults.
    pub fn rectangle(id: impl Into<String>) -> Self {
        let position = Self::DEFAULT_RECT_POSITION;
        let mut rect = Self::new(
            id,
            ObjectKind::Rect,
            position.x,
            position.y,
            Self::DEFAULT_RECT_SIZE,
            Self::DEFAULT_RECT_SIZE,
        );
        rect.style = ObjectStyle {
            fill: Some(Self::DEFAULT_RECT_FILL),
            stroke: None,
            stroke_width: 1.0,
            shadow: Some(Shadow::default()),
            ..ObjectStyle::default()
        };
        rect
    }
}
