use crate::core::{GridIndex, PickRay};
use crate::shared::EditorOptions;
use glam::Vec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Ebene aus den aktuellen Optionen erzeugen (ersetzt den bisherigen Patch)
    GeneratePlaneRequested,
    /// Aktuellen Patch verwerfen
    DiscardPatchRequested,
    /// Kontrollpunkt per Klick selektieren (Pick-Strahl in Weltkoordinaten)
    ControlPointPickRequested { ray: PickRay },
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Drag-Lifecycle Start: selektierten Kontrollpunkt verschieben beginnen
    ControlPointDragStarted,
    /// Drag-Lifecycle Update: neue Position des Kontrollpunkts
    ControlPointDragUpdated { position: Vec3 },
    /// Drag-Lifecycle Ende: Verschieben abgeschlossen
    ControlPointDragEnded,
    /// Drag abbrechen und Ausgangsposition wiederherstellen
    ControlPointDragCancelled,

    /// Kontrollpunkt direkt setzen (z.B. aus einem Eigenschaften-Panel)
    SetControlPointRequested { index: GridIndex, position: Vec3 },
    /// Mesh ohne Änderung neu berechnen
    RegenerateRequested,

    /// Optionen übernehmen
    OptionsApplied { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
