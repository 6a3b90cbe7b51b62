//! Vector Path Editor Library.
//! Anker-Modell, Pfad-Builder und Gesten-Logik eines interaktiven Pfad-Editors.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog};
pub use core::{
    build_segments, flatten_segments, mirror, Anchor, AnchorId, AnchorPath, ControlPair,
    GestureReducer, GestureValue, PathEditError, Segment,
};
pub use shared::{AnchorHandle, EditorOptions, PathScene};
