//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::GestureChanged { value } => vec![AppCommand::UpdateGesturePreview { value }],
        AppIntent::GestureEnded { value } => vec![AppCommand::CommitGesture { value }],
        AppIntent::GestureCancelled => {
            if state.has_live_gesture() {
                vec![AppCommand::DiscardGesturePreview]
            } else {
                Vec::new()
            }
        }
        AppIntent::AnchorPointDragged {
            anchor_id,
            world_pos,
        } => vec![AppCommand::MoveAnchorPoint {
            anchor_id,
            world_pos,
        }],
        AppIntent::IncomingHandleDragged {
            anchor_id,
            world_pos,
        } => vec![AppCommand::MoveIncomingHandle {
            anchor_id,
            world_pos,
        }],
        AppIntent::OutgoingHandleDragged {
            anchor_id,
            world_pos,
        } => vec![AppCommand::MoveOutgoingHandle {
            anchor_id,
            world_pos,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
