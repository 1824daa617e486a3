//! Handler für Kontrollpunkt-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GridIndex;
use glam::Vec3;

/// Beginnt einen Drag auf dem selektierten Kontrollpunkt.
pub fn begin_drag(state: &mut AppState) {
    use_cases::editing::begin_drag(state);
}

/// Aktualisiert die Drag-Position.
pub fn update_drag(state: &mut AppState, position: Vec3) {
    use_cases::editing::update_drag(state, position);
}

/// Schließt den Drag ab.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Bricht den Drag ab.
pub fn cancel_drag(state: &mut AppState) {
    use_cases::editing::cancel_drag(state);
}

/// Setzt einen Kontrollpunkt direkt.
pub fn set_control_point(
    state: &mut AppState,
    index: GridIndex,
    position: Vec3,
) -> anyhow::Result<()> {
    use_cases::editing::set_control_point(state, index, position)
}
