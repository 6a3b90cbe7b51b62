use crate::core::{AnchorId, GestureValue};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Live-Geste aktualisieren (nur Vorschau, Pfad bleibt unverändert)
    UpdateGesturePreview { value: GestureValue },
    /// Geste abschließen und Anker dauerhaft anhängen
    CommitGesture { value: GestureValue },
    /// Live-Vorschau verwerfen
    DiscardGesturePreview,
    /// Anker verschieben (Kontrollpunkt wandert mit)
    MoveAnchorPoint {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Kontrollpunkt über den eingehenden Griff setzen (gespiegelt)
    MoveIncomingHandle {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Kontrollpunkt über den ausgehenden Griff setzen (direkt)
    MoveOutgoingHandle {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
