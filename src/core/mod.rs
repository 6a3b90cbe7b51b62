//! Core-Domänentypen: Anker, Pfad, Segmente, Gesten.

pub mod anchor;
/// Core-Datenmodell des Pfad-Editors
///
/// - AnchorPath: geordnete Anker mit stabilen IDs
/// - Anchor: Punkt mit optionalem Kontrollpunkt
/// - Segment: Zeichenbefehle für den Renderer
pub mod anchor_path;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod segment;

pub use anchor::{Anchor, AnchorId, ControlPair};
pub use anchor_path::AnchorPath;
pub use error::PathEditError;
pub use geometry::{mirror, DRAG_TOLERANCE};
pub use gesture::{AnchorCandidate, GestureReducer, GestureValue};
pub use segment::{build_segments, flatten_segments, Segment};
