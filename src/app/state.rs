//! Application State: zentrale Datenhaltung der Editier-Sitzung.

use super::preview::SharedPreview;
use super::CommandLog;
use crate::core::{GridIndex, SurfacePatch};
use crate::shared::EditorOptions;
use glam::Vec3;
use indexmap::IndexSet;
use std::path::PathBuf;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierte Kontrollpunkte in Auswahl-Reihenfolge
    pub selected: IndexSet<GridIndex>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zuerst selektierter Kontrollpunkt (Ziel von Drag-Operationen).
    pub fn primary(&self) -> Option<GridIndex> {
        self.selected.first().copied()
    }

    /// Ersetzt die Selektion durch genau einen Punkt.
    pub fn select_single(&mut self, index: GridIndex) {
        self.selected.clear();
        self.selected.insert(index);
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Laufender Drag eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointDrag {
    /// Gezogener Kontrollpunkt
    pub index: GridIndex,
    /// Position beim Drag-Start (für Abbruch)
    pub start: Vec3,
    /// Zuletzt gemeldete Position
    pub pending: Vec3,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Pfad für persistierte Optionen (None = nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Aktueller Patch (höchstens einer)
    pub patch: Option<SurfacePatch>,
    /// Kontrollpunkt-Selektion
    pub selection: SelectionState,
    /// Laufender Drag (falls aktiv)
    pub drag: Option<ControlPointDrag>,
    /// Vorschau-Mesh, das der Patch-Darstellung zugeordnet ist
    pub preview: SharedPreview,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand ohne Patch.
    pub fn new() -> Self {
        Self {
            options: EditorOptions::default(),
            options_path: None,
            patch: None,
            selection: SelectionState::new(),
            drag: None,
            preview: SharedPreview::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl der Kontrollpunkte des aktuellen Patches.
    pub fn control_point_count(&self) -> usize {
        self.patch
            .as_ref()
            .map_or(0, |p| p.control_points().as_slice().len())
    }
}
