use crate::core::{AnchorId, GestureValue};
use crate::shared::EditorOptions;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt und bewegt (Live-Vorschau, wiederholt pro Abtastwert)
    GestureChanged { value: GestureValue },
    /// Zeiger losgelassen (Commit, einmal pro Geste)
    GestureEnded { value: GestureValue },
    /// Geste ohne Loslassen abgebrochen (z.B. Fokusverlust)
    GestureCancelled,
    /// Anker-Griff gezogen
    AnchorPointDragged {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Eingehender (gespiegelter) Kontrollpunkt-Griff gezogen
    IncomingHandleDragged {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Ausgehender (gespeicherter) Kontrollpunkt-Griff gezogen
    OutgoingHandleDragged {
        anchor_id: AnchorId,
        world_pos: glam::Vec2,
    },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
}
