use crate::core::{GridIndex, PickRay};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ebene aus den Optionen erzeugen und als Patch übernehmen
    GeneratePlane,
    /// Patch verwerfen (Darstellung freigeben, Selektion leeren)
    DiscardPatch,
    /// Nächstgelegenen Kontrollpunkt zum Strahl selektieren
    SelectNearestControlPoint { ray: PickRay, max_distance: f32 },
    /// Selektion aufheben
    ClearSelection,
    /// Drag auf dem ersten selektierten Kontrollpunkt beginnen
    BeginControlPointDrag,
    /// Drag-Position aktualisieren
    UpdateControlPointDrag { position: Vec3 },
    /// Drag abschließen
    EndControlPointDrag,
    /// Drag abbrechen
    CancelControlPointDrag,
    /// Kontrollpunkt setzen und Mesh regenerieren
    SetControlPoint { index: GridIndex, position: Vec3 },
    /// Mesh neu berechnen
    RegeneratePatch,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
}
