//! IconForge Core Library
//!
//! Canvas snapping and layer stacking for the IconForge icon editor.

pub mod config;
pub mod editor;
pub mod guideline;
pub mod ids;
pub mod layers;
pub mod scene;
pub mod shapes;
pub mod snap;

pub use config::{ConfigError, EditorConfig};
pub use editor::IconEditor;
pub use guideline::{Guideline, GuidelineKind, GuidelineStyle, Orientation};
pub use ids::generate_unique_id;
pub use layers::{LayerDirection, LayerEntry, LayerPanel, recompute_z_indices, refresh_layers};
pub use scene::{ItemId, Scene, SceneEvent, SceneHost, SceneItem};
pub use shapes::{CanvasObject, ColorError, IconPath, ObjectKind, SerializableColor};
pub use snap::{SNAP_THRESHOLD, SnapConfig, SnapResult, clear_guidelines, evaluate_move, snap_to_canvas};
