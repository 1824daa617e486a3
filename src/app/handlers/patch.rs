//! Handler für Patch-Lebenszyklus: Ebene generieren, verwerfen, regenerieren.

use crate::app::use_cases;
use crate::app::AppState;

/// Generiert eine neue Ebene aus den aktuellen Optionen.
pub fn generate_plane(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::plane::generate_plane(state)
}

/// Verwirft den aktuellen Patch.
pub fn discard(state: &mut AppState) {
    use_cases::plane::discard_patch(state);
}

/// Berechnet das Mesh des aktuellen Patches neu.
pub fn regenerate(state: &mut AppState) {
    use_cases::editing::regenerate(state);
}
