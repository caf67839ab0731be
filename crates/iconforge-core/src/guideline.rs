//! Alignment guidelines shown while an object is being dragged.

use crate::shapes::SerializableColor;
use kurbo::{Line, Point, Size};
use serde::{Deserialize, Serialize};

/// Orientation of a guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Constant x, spans the canvas height.
    Vertical,
    /// Constant y, spans the canvas width.
    Horizontal,
}

/// The fixed set of canvas alignments a guideline can mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidelineKind {
    VerticalLeft,
    VerticalRight,
    VerticalCenter,
    HorizontalTop,
    HorizontalBottom,
    HorizontalCenter,
}

impl GuidelineKind {
    pub const ALL: [GuidelineKind; 6] = [
        GuidelineKind::VerticalLeft,
        GuidelineKind::VerticalRight,
        GuidelineKind::VerticalCenter,
        GuidelineKind::HorizontalTop,
        GuidelineKind::HorizontalBottom,
        GuidelineKind::HorizontalCenter,
    ];

    /// Stable identifier of the guideline.
    pub fn id(self) -> &'static str {
        match self {
            GuidelineKind::VerticalLeft => "vertical-left",
            GuidelineKind::VerticalRight => "vertical-right",
            GuidelineKind::VerticalCenter => "vertical-center",
            GuidelineKind::HorizontalTop => "horizontal-top",
            GuidelineKind::HorizontalBottom => "horizontal-bottom",
            GuidelineKind::HorizontalCenter => "horizontal-center",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn orientation(self) -> Orientation {
        match self {
            GuidelineKind::VerticalLeft | GuidelineKind::VerticalRight | GuidelineKind::VerticalCenter => {
                Orientation::Vertical
            }
            GuidelineKind::HorizontalTop
            | GuidelineKind::HorizontalBottom
            | GuidelineKind::HorizontalCenter => Orientation::Horizontal,
        }
    }

    /// Coordinate of this alignment on a canvas of the given size
    /// (x for vertical guidelines, y for horizontal ones).
    pub fn position_on(self, canvas: Size) -> f64 {
        match self {
            GuidelineKind::VerticalLeft | GuidelineKind::HorizontalTop => 0.0,
            GuidelineKind::VerticalRight => canvas.width,
            GuidelineKind::HorizontalBottom => canvas.height,
            GuidelineKind::VerticalCenter => canvas.width / 2.0,
            GuidelineKind::HorizontalCenter => canvas.height / 2.0,
        }
    }
}

/// Visual style shared by every guideline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidelineStyle {
    pub stroke: SerializableColor,
    pub stroke_width: f64,
    pub opacity: f64,
    /// Dash pattern: on length, off length.
    pub dash: [f64; 2],
}

impl Default for GuidelineStyle {
    fn default() -> Self {
        Self {
            stroke: SerializableColor::new(0xd9, 0x53, 0x4f, 255),
            stroke_width: 2.0,
            opacity: 0.7,
            dash: [5.0, 5.0],
        }
    }
}

/// A guideline placed on the canvas.
///
/// Guidelines never take part in selection or hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Guideline {
    pub kind: GuidelineKind,
    /// Segment spanning the canvas.
    pub line: Line,
    pub style: GuidelineStyle,
}

impl Guideline {
    /// Vertical guideline at `x`, spanning the canvas height.
    pub fn vertical(kind: GuidelineKind, x: f64, canvas: Size, style: &GuidelineStyle) -> Self {
        Self {
            kind,
            line: Line::new(Point::new(x, 0.0), Point::new(x, canvas.height)),
            style: *style,
        }
    }

    /// Horizontal guideline at `y`, spanning the canvas width.
    pub fn horizontal(kind: GuidelineKind, y: f64, canvas: Size, style: &GuidelineStyle) -> Self {
        Self {
            kind,
            line: Line::new(Point::new(0.0, y), Point::new(canvas.width, y)),
            style: *style,
        }
    }

    /// Guideline for `kind` at its canonical position on the canvas.
    pub fn for_canvas(kind: GuidelineKind, canvas: Size, style: &GuidelineStyle) -> Self {
        let position = kind.position_on(canvas);
        match kind.orientation() {
            Orientation::Vertical => Self::vertical(kind, position, canvas, style),
            Orientation::Horizontal => Self::horizontal(kind, position, canvas, style),
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// The x (vertical) or y (horizontal) coordinate of the line.
    pub fn position(&self) -> f64 {
        match self.kind.orientation() {
            Orientation::Vertical => self.line.p0.x,
            Orientation::Horizontal => self.line.p0.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for kind in GuidelineKind::ALL {
            assert_eq!(GuidelineKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(GuidelineKind::from_id("vertical-middle"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&GuidelineKind::HorizontalBottom).unwrap();
        assert_eq!(json, "\"horizontal-bottom\"");
    }

    #[test]
    fn test_vertical_spans_height() {
        let canvas = Size::new(248.0, 200.0);
        let guide = Guideline::for_canvas(GuidelineKind::VerticalRight, canvas, &GuidelineStyle::default());
        assert_eq!(guide.line.p0, Point::new(248.0, 0.0));
        assert_eq!(guide.line.p1, Point::new(248.0, 200.0));
        assert!((guide.position() - 248.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_horizontal_center() {
        let canvas = Size::new(248.0, 200.0);
        let guide = Guideline::for_canvas(GuidelineKind::HorizontalCenter, canvas, &GuidelineStyle::default());
        assert_eq!(guide.line.p0, Point::new(0.0, 100.0));
        assert_eq!(guide.line.p1, Point::new(248.0, 100.0));
    }

    #[test]
    fn test_default_style() {
        let style = GuidelineStyle::default();
        assert_eq!(style.stroke.to_hex(), "#d9534f");
        assert_eq!(style.dash, [5.0, 5.0]);
        assert!((style.opacity - 0.7).abs() < f64::EPSILON);
    }
}
