//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod path_scene;

pub use options::EditorOptions;
pub use options::{DRAG_TOLERANCE, FLATTEN_MAX_SEGMENT_LENGTH};
pub use path_scene::{AnchorHandle, PathScene};
