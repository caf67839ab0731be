//! Icon glyph objects built from SVG path data.

use super::{CanvasObject, LineCap, LineJoin, ObjectKind, ObjectStyle, SerializableColor, Shadow};

/// Id prefix used when no glyph-specific prefix is given.
pub const DEFAULT_ICON_PREFIX: &str = "mdi:sword-";

/// Glyph data for an icon, already fetched and extracted from its SVG body.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPath {
    /// The path `d` attribute.
    pub data: String,
    /// Fill color (None = unfilled outline glyph).
    pub fill: Option<SerializableColor>,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl IconPath {
    /// A filled glyph with no stroke width.
    pub fn filled(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill: Some(SerializableColor::black()),
            stroke_width: 0.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

impl CanvasObject {
    /// Glyphs are authored on a 24 unit grid.
    pub const ICON_GLYPH_SIZE: f64 = 24.0;
    /// Default scale applied to new icons.
    pub const DEFAULT_ICON_SCALE: f64 = 5.0;
    /// Default left/top of new icons.
    pub const DEFAULT_ICON_OFFSET: f64 = 50.0;

    /// Create a path object for an icon glyph.
    pub fn icon(id: impl Into<String>, glyph: &IconPath) -> Self {
        let mut icon = Self::new(
            id,
            ObjectKind::Path,
            Self::DEFAULT_ICON_OFFSET,
            Self::DEFAULT_ICON_OFFSET,
            Self::ICON_GLYPH_SIZE,
            Self::ICON_GLYPH_SIZE,
        )
        .with_scale(Self::DEFAULT_ICON_SCALE, Self::DEFAULT_ICON_SCALE);
        icon.style = ObjectStyle {
            fill: Some(glyph.fill.unwrap_or_else(SerializableColor::transparent)),
            stroke: Some(SerializableColor::black()),
            stroke_width: glyph.stroke_width,
            line_cap: glyph.line_cap,
            line_join: glyph.line_join,
            shadow: Some(Shadow::default()),
            opacity: 1.0,
        };
        icon.path = Some(glyph.data.clone());
        icon
    }
}
