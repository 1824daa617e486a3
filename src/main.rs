//! Patch Surface Editor.
//!
//! Headless-Sitzung: generiert eine Ebene aus den Optionen, selektiert einen
//! Kontrollpunkt, zieht ihn nach oben und protokolliert die Mesh-Statistik.

use glam::Vec3;
use patch_surface_editor::{AppController, AppIntent, AppState, EditorOptions, PickRay};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Patch Surface Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = EditorOptions::config_path();
    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&config_path);
    state.options_path = Some(config_path);

    let mut controller = AppController::new();
    run_session(&mut controller, &mut state);

    let preview = state.preview.borrow();
    log::info!(
        "Sitzung beendet: {} Vertices ({} Bytes), {} Dreiecke, {} Regenerierungen, {} abgelehnte Commands",
        preview.vertices.len(),
        preview.vertex_bytes().len(),
        preview.indices.len() / 3,
        state.command_log.regeneration_count(),
        state.command_log.failure_count()
    );
    Ok(())
}

fn run_session(controller: &mut AppController, state: &mut AppState) {
    dispatch(controller, state, AppIntent::GeneratePlaneRequested);

    let Some(target) = center_control_point(state) else {
        log::warn!("Kein Patch vorhanden, Sitzung wird beendet");
        return;
    };

    let Some(ray) = PickRay::new(target + Vec3::Y * 10.0, Vec3::NEG_Y) else {
        log::warn!("Pick-Strahl ohne Richtung, Sitzung wird beendet");
        return;
    };
    dispatch(controller, state, AppIntent::ControlPointPickRequested { ray });
    dispatch(controller, state, AppIntent::ControlPointDragStarted);
    for step in 1..=4 {
        let position = target + Vec3::Y * step as f32 * 0.5;
        dispatch(
            controller,
            state,
            AppIntent::ControlPointDragUpdated { position },
        );
    }
    dispatch(controller, state, AppIntent::ControlPointDragEnded);
}

fn center_control_point(state: &AppState) -> Option<Vec3> {
    let grid = state.patch.as_ref()?.control_points();
    let index = patch_surface_editor::GridIndex::new(grid.height() / 2, grid.width() / 2);
    Some(grid[index])
}

fn dispatch(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    if let Err(e) = controller.handle_intent(state, intent) {
        log::error!("Fehler beim Verarbeiten: {:#}", e);
    }
}
