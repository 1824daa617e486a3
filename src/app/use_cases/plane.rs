//! Use-Case: Ebene aus Kontrollpunkten generieren und den aktuellen Patch ersetzen.

use crate::app::preview::PreviewPresenter;
use crate::app::AppState;
use crate::core::{ControlGrid, SurfacePatch};
use crate::shared::EditorOptions;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Baut ein ebenes Kontrollgitter mit zufälliger Erhebung.
///
/// Punkt `(i, j)` liegt bei `x = j * plane_width / (num_width - 1)`,
/// `z = i * plane_height / (num_height - 1)`, `y ∈ [0, elevation_jitter)`.
/// Die Optionen müssen zuvor mit [`EditorOptions::validate_plane`] geprüft sein.
pub fn build_plane_grid(options: &EditorOptions, rng: &mut impl Rng) -> ControlGrid {
    let height = options.num_height as usize;
    let width = options.num_width as usize;
    let h_step = options.plane_height / (height - 1) as f32;
    let w_step = options.plane_width / (width - 1) as f32;

    ControlGrid::from_fn(height, width, |i, j| {
        let elevation = rng.random::<f32>() * options.elevation_jitter;
        Vec3::new(j as f32 * w_step, elevation, i as f32 * h_step)
    })
}

/// Erzeugt einen neuen Patch aus den aktuellen Optionen.
///
/// Ein vorhandener Patch wird vorher verworfen. Ungültige Optionen werden
/// abgelehnt, ohne den vorhandenen Patch anzutasten.
pub fn generate_plane(state: &mut AppState) -> anyhow::Result<()> {
    state.options.validate_plane()?;

    let mut rng = match state.options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = build_plane_grid(&state.options, &mut rng);
    let mut patch = SurfacePatch::with_basis(
        state.options.basis,
        grid,
        state.options.tessellation as usize,
    )?;

    discard_patch(state);

    patch.attach_visual(Box::new(PreviewPresenter::new(state.preview.clone())));
    log::info!(
        "Ebene generiert: {}x{} Kontrollpunkte, Tessellierung {}, {} Vertices",
        state.options.num_height,
        state.options.num_width,
        state.options.tessellation,
        patch.layout().vertex_count()
    );
    state.patch = Some(patch);
    Ok(())
}

/// Verwirft den aktuellen Patch samt Darstellung und setzt Selektion und Drag zurück.
pub fn discard_patch(state: &mut AppState) {
    state.selection.clear();
    state.drag = None;
    if let Some(patch) = state.patch.take() {
        patch.destroy();
        log::info!("Patch verworfen");
    }
}
