//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PickRay;

/// Selektiert den nächstgelegenen Kontrollpunkt zum Pick-Strahl.
pub fn select_nearest(state: &mut AppState, ray: PickRay, max_distance: f32) {
    use_cases::editing::cancel_drag(state);
    use_cases::selection::select_nearest_control_point(state, ray, max_distance);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
