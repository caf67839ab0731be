//! Snap functionality for aligning dragged objects to the canvas.
//!
//! While an object is dragged, its edges and center are compared against the
//! canvas edges and center. Any alignment closer than the snap threshold pulls
//! the object onto the reference line and shows a guideline for it.

use crate::guideline::{Guideline, GuidelineKind, GuidelineStyle};
use crate::scene::{ItemId, SceneHost};
use crate::shapes::CanvasObject;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Distance threshold for canvas snapping (in canvas pixels).
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Snap settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Alignments strictly closer than this snap.
    pub threshold: f64,
    /// Style applied to every guideline.
    pub guideline: GuidelineStyle,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: SNAP_THRESHOLD,
            guideline: GuidelineStyle::default(),
        }
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// The corrected top-left position.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
    /// Alignments that matched, in evaluation order. Each kind appears once.
    pub guides: Vec<GuidelineKind>,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
            guides: Vec::new(),
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }

    fn snap(&mut self, kind: GuidelineKind, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            self.point.x = x;
            self.snapped_x = true;
        }
        if let Some(y) = y {
            self.point.y = y;
            self.snapped_y = true;
        }
        if !self.guides.contains(&kind) {
            self.guides.push(kind);
        }
    }
}

/// Normalize canvas dimensions: non-finite values become 0 and fractions are
/// truncated toward zero.
pub fn canvas_bounds(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() { v.trunc() } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}

/// Snap an object against the canvas edges and center.
///
/// Every comparison uses the object's position before any correction, so
/// horizontal and vertical snaps compose. When two alignments on the same
/// axis match (only possible for objects about as large as the canvas), the
/// later one in the order left, top, right, bottom, center-x, center-y wins.
///
/// Non-finite geometry never satisfies a comparison and yields no snap.
pub fn snap_to_canvas(object: &CanvasObject, canvas: Size, threshold: f64) -> SnapResult {
    let mut result = SnapResult::none(object.position());
    if canvas.width <= 0.0 || canvas.height <= 0.0 {
        return result;
    }

    let width = object.scaled_width();
    let height = object.scaled_height();
    let bounds = object.bounds();
    let center = object.center();
    let within = |value: f64, target: f64| (value - target).abs() < threshold;

    if within(bounds.x0, 0.0) {
        result.snap(GuidelineKind::VerticalLeft, Some(0.0), None);
    }
    if within(bounds.y0, 0.0) {
        result.snap(GuidelineKind::HorizontalTop, None, Some(0.0));
    }
    if within(bounds.x1, canvas.width) {
        result.snap(GuidelineKind::VerticalRight, Some(canvas.width - width), None);
    }
    if within(bounds.y1, canvas.height) {
        result.snap(GuidelineKind::HorizontalBottom, None, Some(canvas.height - height));
    }
    if within(center.x, canvas.width / 2.0) {
        result.snap(
            GuidelineKind::VerticalCenter,
            Some(canvas.width / 2.0 - width / 2.0),
            None,
        );
    }
    if within(center.y, canvas.height / 2.0) {
        result.snap(
            GuidelineKind::HorizontalCenter,
            None,
            Some(canvas.height / 2.0 - height / 2.0),
        );
    }

    result
}

/// Evaluate one move update for the object being dragged.
///
/// Clears every guideline, snaps the object, writes the corrected position
/// back, adds one guideline per matched alignment and renders. Returns `None`
/// if the object is not in the scene.
pub fn evaluate_move<H: SceneHost>(host: &mut H, id: &str, config: &SnapConfig) -> Option<SnapResult> {
    remove_guidelines(host);

    let canvas = canvas_bounds(host.size());
    let Some(object) = host.object(id) else {
        host.render_all();
        return None;
    };
    let result = snap_to_canvas(object, canvas, config.threshold);
    log::trace!("snap check for {} at {:?}", id, object.position());

    if result.is_snapped() {
        if let Some(object) = host.object_mut(id) {
            object.set_position(result.point);
        }
        for &kind in &result.guides {
            host.add(Guideline::for_canvas(kind, canvas, &config.guideline).into());
        }
        log::debug!(
            "snapped {} to ({}, {}) via {:?}",
            id,
            result.point.x,
            result.point.y,
            result.guides
        );
    }

    host.render_all();
    Some(result)
}

/// Remove every guideline from the scene and render.
/// Returns how many were removed.
pub fn clear_guidelines<H: SceneHost>(host: &mut H) -> usize {
    let removed = remove_guidelines(host);
    host.render_all();
    removed
}

fn remove_guidelines<H: SceneHost>(host: &mut H) -> usize {
    let kinds: Vec<GuidelineKind> = host.guidelines().map(|guide| guide.kind).collect();
    kinds
        .into_iter()
        .filter(|&kind| host.remove(&ItemId::Guideline(kind)).is_some())
        .count()
}
