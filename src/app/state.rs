//! Application State: committeter Pfad, laufende Geste, Optionen.

use super::CommandLog;
use crate::core::{AnchorPath, GestureReducer, GestureValue};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Committete Ankerfolge (einzige Quelle der Wahrheit)
    pub path: AnchorPath,
    /// Letzter Abtastwert der laufenden Geste (None = keine Vorschau)
    pub live_gesture: Option<GestureValue>,
    /// Laufzeit-Optionen (Drag-Toleranz, Griffgrößen, Abtastung)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: AnchorPath::new(),
            live_gesture: None,
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gesten-Reducer mit der aktuell konfigurierten Drag-Toleranz
    pub fn gesture_reducer(&self) -> GestureReducer {
        GestureReducer::new(self.options.drag_tolerance)
    }

    /// Gibt die Anzahl committeter Anker zurück (für UI-Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.path.len()
    }

    /// Läuft gerade eine Geste mit Vorschau?
    pub fn has_live_gesture(&self) -> bool {
        self.live_gesture.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
