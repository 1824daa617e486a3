//! Application Controller für zentrale Event-Verarbeitung.

use super::command_log::CommandOutcome;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
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

    /// Führt mutierende Commands auf dem AppState aus und protokolliert ihre Wirkung.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let uploads_before = state.preview.borrow().uploads;
        let logged = command.clone();

        let result = Self::dispatch(state, command);

        let outcome = match &result {
            Err(_) => CommandOutcome::Failed,
            Ok(()) if state.preview.borrow().uploads != uploads_before => {
                CommandOutcome::Regenerated
            }
            Ok(()) => CommandOutcome::Applied,
        };
        state.command_log.record(logged, outcome);
        result
    }

    /// Dispatcht an Feature-Handler in `handlers/`.
    fn dispatch(state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Patch-Lebenszyklus ===
            AppCommand::GeneratePlane => handlers::patch::generate_plane(state)?,
            AppCommand::DiscardPatch => handlers::patch::discard(state),
            AppCommand::RegeneratePatch => handlers::patch::regenerate(state),

            // === Selektion ===
            AppCommand::SelectNearestControlPoint { ray, max_distance } => {
                handlers::selection::select_nearest(state, ray, max_distance)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::BeginControlPointDrag => handlers::editing::begin_drag(state),
            AppCommand::UpdateControlPointDrag { position } => {
                handlers::editing::update_drag(state, position)
            }
            AppCommand::EndControlPointDrag => handlers::editing::end_drag(state),
            AppCommand::CancelControlPointDrag => handlers::editing::cancel_drag(state),
            AppCommand::SetControlPoint { index, position } => {
                handlers::editing::set_control_point(state, index, position)?
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }
}
