//! Use-Cases: Kontrollpunkte verschieben (Drag-Lifecycle) und direkt setzen.

use crate::app::state::ControlPointDrag;
use crate::app::AppState;
use crate::core::GridIndex;
use glam::Vec3;

/// Setzt einen Kontrollpunkt und regeneriert das Mesh.
///
/// Ein Index außerhalb des Gitters wird als Fehler abgelehnt.
pub fn set_control_point(
    state: &mut AppState,
    index: GridIndex,
    position: Vec3,
) -> anyhow::Result<()> {
    let Some(patch) = state.patch.as_mut() else {
        anyhow::bail!("Kein Patch vorhanden");
    };
    let grid = patch.control_points();
    if !grid.contains(index) {
        anyhow::bail!(
            "Kontrollpunkt ({}, {}) liegt außerhalb des Gitters {}x{}",
            index.row,
            index.col,
            grid.height(),
            grid.width()
        );
    }

    patch.set_control_point(index, position);
    log::debug!(
        "Kontrollpunkt ({}, {}) gesetzt auf {}",
        index.row,
        index.col,
        position
    );
    Ok(())
}

/// Beginnt einen Drag auf dem ersten selektierten Kontrollpunkt.
pub fn begin_drag(state: &mut AppState) {
    let (Some(patch), Some(index)) = (state.patch.as_ref(), state.selection.primary()) else {
        log::debug!("Drag-Start ignoriert: kein Patch oder keine Selektion");
        return;
    };

    let start = patch.control_point(index);
    state.drag = Some(ControlPointDrag {
        index,
        start,
        pending: start,
    });
}

/// Aktualisiert die Drag-Position. Mit `live_regeneration` wird sofort regeneriert.
pub fn update_drag(state: &mut AppState, position: Vec3) {
    let Some(drag) = state.drag.as_mut() else {
        return;
    };
    drag.pending = position;
    let index = drag.index;

    if state.options.live_regeneration {
        if let Some(patch) = state.patch.as_mut() {
            patch.set_control_point(index, position);
        }
    }
}

/// Schließt den Drag ab und übernimmt ggf. die gepufferte Position.
pub fn end_drag(state: &mut AppState) {
    let Some(drag) = state.drag.take() else {
        return;
    };

    if !state.options.live_regeneration && drag.pending != drag.start {
        if let Some(patch) = state.patch.as_mut() {
            patch.set_control_point(drag.index, drag.pending);
        }
    }
    log::info!(
        "Kontrollpunkt ({}, {}) verschoben: {} -> {}",
        drag.index.row,
        drag.index.col,
        drag.start,
        drag.pending
    );
}

/// Bricht den Drag ab und stellt die Ausgangsposition wieder her.
pub fn cancel_drag(state: &mut AppState) {
    let Some(drag) = state.drag.take() else {
        return;
    };

    if state.options.live_regeneration && drag.pending != drag.start {
        if let Some(patch) = state.patch.as_mut() {
            patch.set_control_point(drag.index, drag.start);
        }
    }
}

/// Regeneriert das Mesh ohne Änderung am Gitter.
pub fn regenerate(state: &mut AppState) {
    if let Some(patch) = state.patch.as_mut() {
        patch.regenerate();
    }
}
