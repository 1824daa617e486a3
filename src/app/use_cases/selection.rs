//! Use-Case: Kontrollpunkt-Selektion per Pick-Strahl.

use crate::app::AppState;
use crate::core::{nearest_control_point, PickRay};

/// Selektiert den nächstgelegenen Kontrollpunkt zum Strahl.
///
/// Die Selektion wird bei jedem Pick geleert; liegt kein Punkt innerhalb von
/// `max_distance`, bleibt sie leer.
pub fn select_nearest_control_point(state: &mut AppState, ray: PickRay, max_distance: f32) {
    state.selection.clear();

    let Some(patch) = state.patch.as_ref() else {
        return;
    };

    if let Some(hit) = nearest_control_point(patch.control_points(), &ray, max_distance) {
        state.selection.select_single(hit.index);
        log::info!(
            "Kontrollpunkt ({}, {}) selektiert (Abstand {:.3})",
            hit.index.row,
            hit.index.col,
            hit.distance
        );
    }
}

/// Hebt die Selektion auf und bricht einen laufenden Drag ab.
pub fn clear_selection(state: &mut AppState) {
    super::editing::cancel_drag(state);
    state.selection.clear();
}
