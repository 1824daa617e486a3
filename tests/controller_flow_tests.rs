use glam::Vec3;
use patch_surface_editor::app::{CommandOutcome, LogEntry};
use patch_surface_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorOptions, GridIndex, PickRay,
};

fn seeded_state() -> AppState {
    let mut state = AppState::new();
    state.options.seed = Some(42);
    state
}

fn ray_onto(point: Vec3) -> PickRay {
    PickRay::new(point + Vec3::Y * 10.0, Vec3::NEG_Y).expect("gültige Richtung")
}

#[test]
fn test_generate_plane_presents_mesh_to_preview() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("GeneratePlaneRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.control_point_count(), 36);
    let preview = state.preview.borrow();
    assert!(preview.live);
    assert_eq!(preview.vertices.len(), 169);
    assert_eq!(preview.indices.len(), 864);
    assert_eq!(preview.uploads, 1);

    match state.command_log.last() {
        Some(LogEntry {
            command: AppCommand::GeneratePlane,
            outcome: CommandOutcome::Regenerated,
        }) => {}
        other => panic!("Unerwarteter letzter Eintrag: {other:?}"),
    }
}

#[test]
fn test_regenerating_plane_replaces_previous_patch() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("erste Ebene");
    state.selection.select_single(GridIndex::new(1, 1));

    let mut options = state.options.clone();
    options.num_width = 4;
    options.num_height = 5;
    options.tessellation = 2;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen übernehmen");
    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("zweite Ebene");

    assert!(state.selection.is_empty());
    assert_eq!(state.control_point_count(), 20);
    let preview = state.preview.borrow();
    assert!(preview.live);
    assert_eq!(preview.vertices.len(), 5 * 3);
}

#[test]
fn test_invalid_options_keep_existing_patch() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");

    let mut options = state.options.clone();
    options.num_width = 3;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen werden ungeprüft übernommen");

    let result = controller.handle_intent(&mut state, AppIntent::GeneratePlaneRequested);

    assert!(result.is_err());
    assert_eq!(state.control_point_count(), 36);
    assert!(state.preview.borrow().live);
}

#[test]
fn test_oversized_tessellation_is_rejected_without_panic() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");
    let before = state
        .patch
        .as_ref()
        .expect("Patch vorhanden")
        .mesh()
        .to_buffers();

    let mut options = state.options.clone();
    options.tessellation = 100_000;
    controller
        .handle_intent(&mut state, AppIntent::OptionsApplied { options })
        .expect("Optionen werden ungeprüft übernommen");

    let result = controller.handle_intent(&mut state, AppIntent::GeneratePlaneRequested);

    let err = result.expect_err("zu große Tessellierung muss abgelehnt werden");
    assert!(err.to_string().contains("zu viele Vertices"));
    let patch = state.patch.as_ref().expect("Patch bleibt erhalten");
    assert_eq!(patch.tessellation(), 4);
    assert_eq!(patch.mesh().to_buffers(), before);
    assert_eq!(state.preview.borrow().uploads, 1);
    assert_eq!(
        state.command_log.last().map(|e| e.outcome),
        Some(CommandOutcome::Failed)
    );
}

#[test]
fn test_pick_and_drag_moves_control_point() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");

    let index = GridIndex::new(2, 3);
    let target = state
        .patch
        .as_ref()
        .expect("Patch vorhanden")
        .control_point(index);

    controller
        .handle_intent(&mut state, AppIntent::ControlPointPickRequested { ray: ray_onto(target) })
        .expect("Pick");
    assert_eq!(state.selection.primary(), Some(index));

    controller
        .handle_intent(&mut state, AppIntent::ControlPointDragStarted)
        .expect("Drag-Start");
    for step in 1..=3 {
        let position = target + Vec3::Y * step as f32;
        controller
            .handle_intent(&mut state, AppIntent::ControlPointDragUpdated { position })
            .expect("Drag-Update");
    }
    controller
        .handle_intent(&mut state, AppIntent::ControlPointDragEnded)
        .expect("Drag-Ende");

    let patch = state.patch.as_ref().expect("Patch vorhanden");
    assert_eq!(patch.control_point(index), target + Vec3::Y * 3.0);
    assert!(state.drag.is_none());
    // Erzeugung plus drei Live-Updates
    assert_eq!(state.preview.borrow().uploads, 4);
    assert_eq!(state.command_log.regeneration_count(), 4);
    let outcomes: Vec<_> = state.command_log.iter().map(|e| e.outcome).collect();
    assert_eq!(
        outcomes,
        [
            CommandOutcome::Regenerated,
            CommandOutcome::Applied,
            CommandOutcome::Applied,
            CommandOutcome::Regenerated,
            CommandOutcome::Regenerated,
            CommandOutcome::Regenerated,
            CommandOutcome::Applied,
        ]
    );
}

#[test]
fn test_deferred_drag_uploads_once_at_end() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    state.options.live_regeneration = false;
    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");

    let target = state
        .patch
        .as_ref()
        .expect("Patch vorhanden")
        .control_point(GridIndex::new(0, 0));
    controller
        .handle_intent(&mut state, AppIntent::ControlPointPickRequested { ray: ray_onto(target) })
        .expect("Pick");
    controller
        .handle_intent(&mut state, AppIntent::ControlPointDragStarted)
        .expect("Drag-Start");
    for step in 1..=5 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ControlPointDragUpdated {
                    position: target + Vec3::Y * step as f32,
                },
            )
            .expect("Drag-Update");
    }
    assert_eq!(state.preview.borrow().uploads, 1);

    controller
        .handle_intent(&mut state, AppIntent::ControlPointDragEnded)
        .expect("Drag-Ende");

    assert_eq!(state.preview.borrow().uploads, 2);
}

#[test]
fn test_set_control_point_out_of_range_is_error() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::SetControlPointRequested {
            index: GridIndex::new(6, 0),
            position: Vec3::ZERO,
        },
    );

    assert!(result.is_err());
    assert_eq!(state.preview.borrow().uploads, 1);
}

#[test]
fn test_discard_releases_preview() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    controller
        .handle_intent(&mut state, AppIntent::GeneratePlaneRequested)
        .expect("Ebene");

    controller
        .handle_intent(&mut state, AppIntent::DiscardPatchRequested)
        .expect("Verwerfen");

    assert!(state.patch.is_none());
    let preview = state.preview.borrow();
    assert!(!preview.live);
    assert!(preview.vertices.is_empty());
    assert!(preview.indices.is_empty());
}

#[test]
fn test_pick_without_patch_logs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ControlPointPickRequested {
                ray: ray_onto(Vec3::ZERO),
            },
        )
        .expect("Pick ohne Patch");

    assert!(state.command_log.is_empty());
}

#[test]
fn test_reset_options_restores_defaults() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("Reset");

    assert_eq!(state.options, EditorOptions::default());
}
