//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PathScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; der Command wird auch
    /// bei Fehlschlag geloggt.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let result = Self::dispatch(state, &command);
        state.command_log.record(command);
        result
    }

    fn dispatch(state: &mut AppState, command: &AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Gesten ===
            AppCommand::UpdateGesturePreview { value } => {
                handlers::gesture::update_preview(state, *value)
            }
            AppCommand::CommitGesture { value } => handlers::gesture::commit(state, *value),
            AppCommand::DiscardGesturePreview => handlers::gesture::discard_preview(state),

            // === Griffe ===
            AppCommand::MoveAnchorPoint {
                anchor_id,
                world_pos,
            } => handlers::handles::move_point(state, *anchor_id, *world_pos)?,
            AppCommand::MoveIncomingHandle {
                anchor_id,
                world_pos,
            } => handlers::handles::move_incoming(state, *anchor_id, *world_pos)?,
            AppCommand::MoveOutgoingHandle {
                anchor_id,
                world_pos,
            } => handlers::handles::move_outgoing(state, *anchor_id, *world_pos)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
        }

        Ok(())
    }

    /// Baut die PathScene für den aktuellen Frame.
    pub fn build_path_scene(&self, state: &AppState) -> PathScene {
        render_scene::build(state)
    }
}
