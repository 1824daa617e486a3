//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::GeneratePlaneRequested => vec![AppCommand::GeneratePlane],
        AppIntent::DiscardPatchRequested => vec![AppCommand::DiscardPatch],
        AppIntent::ControlPointPickRequested { ray } => {
            if state.patch.is_none() {
                return Vec::new();
            }
            vec![AppCommand::SelectNearestControlPoint {
                ray,
                max_distance: state.options.selection_radius,
            }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::ControlPointDragStarted => vec![AppCommand::BeginControlPointDrag],
        AppIntent::ControlPointDragUpdated { position } => {
            vec![AppCommand::UpdateControlPointDrag { position }]
        }
        AppIntent::ControlPointDragEnded => vec![AppCommand::EndControlPointDrag],
        AppIntent::ControlPointDragCancelled => vec![AppCommand::CancelControlPointDrag],

        AppIntent::SetControlPointRequested { index, position } => {
            vec![AppCommand::SetControlPoint { index, position }]
        }
        AppIntent::RegenerateRequested => vec![AppCommand::RegeneratePatch],

        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
