//! Handler für Anker- und Kontrollpunkt-Griffe.

use crate::app::AppState;
use crate::core::{AnchorId, PathEditError};

/// Verschiebt einen Anker; ein vorhandener Kontrollpunkt wandert mit.
pub fn move_point(
    state: &mut AppState,
    anchor_id: AnchorId,
    world_pos: glam::Vec2,
) -> anyhow::Result<()> {
    let result = state.path.move_point(anchor_id, world_pos);
    report("Anker", anchor_id, world_pos, result)
}

/// Setzt den Kontrollpunkt über den eingehenden Griff (gespiegelt gespeichert).
pub fn move_incoming(
    state: &mut AppState,
    anchor_id: AnchorId,
    world_pos: glam::Vec2,
) -> anyhow::Result<()> {
    let result = state.path.move_control_via_incoming(anchor_id, world_pos);
    report("Eingehender Griff", anchor_id, world_pos, result)
}

/// Setzt den Kontrollpunkt über den ausgehenden Griff (direkt gespeichert).
pub fn move_outgoing(
    state: &mut AppState,
    anchor_id: AnchorId,
    world_pos: glam::Vec2,
) -> anyhow::Result<()> {
    let result = state.path.move_control_direct(anchor_id, world_pos);
    report("Ausgehender Griff", anchor_id, world_pos, result)
}

fn report(
    what: &str,
    anchor_id: AnchorId,
    world_pos: glam::Vec2,
    result: Result<(), PathEditError>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            log::debug!(
                "{} von {} nach ({:.1}, {:.1}) gezogen",
                what,
                anchor_id,
                world_pos.x,
                world_pos.y
            );
            Ok(())
        }
        Err(e) => {
            log::warn!("{} verworfen: {}", what, e);
            Err(e.into())
        }
    }
}
