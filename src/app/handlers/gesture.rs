//! Handler für Zeiger-Gesten: Live-Vorschau, Commit, Abbruch.

use crate::app::AppState;
use crate::core::GestureValue;

/// Merkt sich den neuesten Abtastwert. Die Vorschau entsteht erst beim Szenenaufbau.
pub fn update_preview(state: &mut AppState, value: GestureValue) {
    state.live_gesture = Some(value);
}

/// Hängt den Anker der Geste dauerhaft an und beendet die Vorschau.
pub fn commit(state: &mut AppState, value: GestureValue) {
    let reducer = state.gesture_reducer();
    let id = reducer.commit(&mut state.path, &value);
    state.live_gesture = None;

    if let Some(anchor) = state.path.get(id) {
        log::info!(
            "Anker {} angehängt bei ({:.1}, {:.1}), Kontrollpunkt: {:?}",
            id,
            anchor.point.x,
            anchor.point.y,
            anchor.control_offset
        );
    }
}

/// Verwirft die laufende Vorschau ohne Commit.
pub fn discard_preview(state: &mut AppState) {
    if state.live_gesture.take().is_some() {
        log::debug!("Gesten-Vorschau verworfen");
    }
}
