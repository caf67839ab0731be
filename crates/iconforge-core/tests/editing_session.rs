//! Integration tests: a full editing session through `IconEditor`.
//!
//! Drags objects around a 248x248 canvas and reorders layers, checking the
//! scene, guidelines and layer list after each step.

use iconforge_core::{
    CanvasObject, EditorConfig, GuidelineKind, IconEditor, IconPath, LayerDirection, ObjectKind,
    SceneHost, SerializableColor,
};
use kurbo::Point;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session() -> IconEditor {
    init_logging();
    let config = EditorConfig::from_json(r#"{"canvas_width": 248, "canvas_height": 248}"#).unwrap();
    IconEditor::new(config).unwrap()
}

fn square(id: &str, left: f64, top: f64) -> CanvasObject {
    CanvasObject::new(id, ObjectKind::Rect, left, top, 50.0, 50.0)
}

fn guide_kinds(editor: &IconEditor) -> Vec<GuidelineKind> {
    let mut kinds: Vec<_> = editor.scene().guidelines().map(|g| g.kind).collect();
    kinds.sort();
    kinds
}

fn layer_ids(editor: &IconEditor) -> Vec<String> {
    editor.layers().layers().iter().map(|l| l.id.clone()).collect()
}

fn stack(editor: &IconEditor) -> Vec<String> {
    editor.scene().objects().map(|o| o.id.clone()).collect()
}

// ─── Snapping ───────────────────────────────────────────────────────────

#[test]
fn drag_into_corner_snaps_both_axes() {
    let mut editor = session();
    editor.add_object(square("sq", 80.0, 80.0));

    let result = editor.drag("sq", Point::new(2.0, 2.0)).unwrap();

    assert!(result.is_snapped());
    assert_eq!(editor.scene().object("sq").unwrap().position(), Point::new(0.0, 0.0));
    assert_eq!(
        guide_kinds(&editor),
        vec![GuidelineKind::VerticalLeft, GuidelineKind::HorizontalTop]
    );
}

#[test]
fn drag_away_from_alignment_leaves_no_guidelines() {
    let mut editor = session();
    editor.add_object(square("sq", 80.0, 80.0));

    editor.drag("sq", Point::new(2.0, 2.0)).unwrap();
    let result = editor.drag("sq", Point::new(121.0, 121.0)).unwrap();

    assert!(!result.is_snapped());
    assert_eq!(editor.scene().object("sq").unwrap().position(), Point::new(121.0, 121.0));
    assert!(guide_kinds(&editor).is_empty());
}

#[test]
fn drag_to_right_edge() {
    let mut editor = session();
    editor.add_object(square("sq", 80.0, 60.0));

    editor.drag("sq", Point::new(196.0, 60.0)).unwrap();

    assert_eq!(editor.scene().object("sq").unwrap().left, 198.0);
    let guides: Vec<_> = editor.scene().guidelines().collect();
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].id(), "vertical-right");
    assert_eq!(guides[0].position(), 248.0);
}

#[test]
fn guideline_ids_stay_unique_over_many_moves() {
    let mut editor = session();
    editor.add_object(square("sq", 80.0, 80.0));

    for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
        editor.drag("sq", Point::new(x, 99.0)).unwrap();
        let mut ids: Vec<_> = editor.scene().guidelines().map(|g| g.id()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
    assert_eq!(
        guide_kinds(&editor),
        vec![GuidelineKind::VerticalLeft, GuidelineKind::HorizontalCenter]
    );
}

#[test]
fn release_clears_guidelines_whether_or_not_snapped() {
    let mut editor = session();
    editor.add_object(square("sq", 80.0, 80.0));

    editor.drag("sq", Point::new(2.0, 2.0)).unwrap();
    assert!(editor.release("sq"));
    assert!(guide_kinds(&editor).is_empty());

    editor.drag("sq", Point::new(60.0, 60.0)).unwrap();
    assert!(editor.release("sq"));
    assert!(guide_kinds(&editor).is_empty());
}

// ─── Layers ─────────────────────────────────────────────────────────────

#[test]
fn move_middle_layer_up() {
    let mut editor = session();
    for id in ["A", "B", "C"] {
        editor.add_object(square(id, 60.0, 60.0));
    }
    assert!(editor.select("B"));

    assert!(editor.move_selected(LayerDirection::Up));

    assert_eq!(stack(&editor), vec!["A", "C", "B"]);
    assert_eq!(layer_ids(&editor), vec!["B", "C", "A"]);
    assert_eq!(editor.layers().selected_layer(), Some("B"));
    assert_eq!(editor.scene().active_object(), Some("B"));
}

#[test]
fn move_topmost_up_changes_nothing() {
    let mut editor = session();
    for id in ["A", "B", "C"] {
        editor.add_object(square(id, 60.0, 60.0));
    }
    editor.select("C");

    assert!(!editor.move_selected(LayerDirection::Up));
    assert_eq!(stack(&editor), vec!["A", "B", "C"]);
    assert_eq!(editor.layers().selected_layer(), Some("C"));
}

#[test]
fn reorder_round_trip_keeps_background() {
    let mut editor = session();
    editor.set_background_hex("#336699").unwrap();
    for id in ["A", "B", "C"] {
        editor.add_object(square(id, 60.0, 60.0));
    }
    editor.select("A");

    assert!(editor.move_selected(LayerDirection::Up));
    assert_eq!(stack(&editor), vec!["B", "A", "C"]);
    assert!(editor.move_selected(LayerDirection::Down));
    assert_eq!(stack(&editor), vec!["A", "B", "C"]);
    assert_eq!(
        editor.scene().background(),
        Some(SerializableColor::new(0x33, 0x66, 0x99, 255))
    );
}

#[test]
fn z_indices_follow_stack_order() {
    let mut editor = session();
    let rect = editor.add_rectangle();
    let icon = editor.add_icon(&IconPath::filled("M6 2L18 14Z"), None);

    let layers = editor.layers().layers();
    assert_eq!(layers[0].id, icon);
    assert_eq!(layers[0].z_index, 1);
    assert_eq!(layers[0].icon(), "tdesign:file-icon");
    assert_eq!(layers[1].id, rect);
    assert_eq!(layers[1].z_index, 0);
}

#[test]
fn lock_and_delete_from_layer_list() {
    let mut editor = session();
    let first = editor.add_rectangle();
    let second = editor.add_rectangle();
    assert_eq!(second, "rectangle-2");

    editor.select(&first);
    assert_eq!(editor.toggle_lock(), Some(true));
    assert!(editor.layers().is_locked());

    editor.select(&second);
    assert!(!editor.layers().is_locked());

    assert!(editor.delete_layer(&second));
    assert_eq!(layer_ids(&editor), vec![first.clone()]);
    assert_eq!(editor.layers().selected_layer(), None);

    // The freed number is reused.
    assert_eq!(editor.add_rectangle(), "rectangle-2");
}
