//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen. Wirkt ab dem nächsten Gesten-Abtastwert.
///
/// Ungültige Optionen werden verworfen; der State behält die bisherigen Werte.
pub fn apply(state: &mut AppState, options: &EditorOptions) -> anyhow::Result<()> {
    if let Err(e) = options.validate() {
        log::warn!("Optionen verworfen: {}", e);
        return Err(e);
    }

    if state.options.drag_tolerance != options.drag_tolerance {
        log::info!(
            "Drag-Toleranz geändert: {:.2} → {:.2}",
            state.options.drag_tolerance,
            options.drag_tolerance
        );
    }
    state.options = options.clone();
    Ok(())
}
