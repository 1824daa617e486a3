//! Flächen-Basisfunktionen: Auswertung einer Zelle des Kontrollgitters.

use super::{ControlGrid, PatchError};
use crate::shared::spline_geometry::catmull_rom_window;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Fähigkeit, eine Zelle `(cell_row, cell_col)` an `(t, s)` auszuwerten.
///
/// `t` läuft entlang der Höhe (Gitter-Zeilen), `s` entlang der Breite (Spalten).
pub trait SurfaceBasis {
    /// Welche Variante diese Basis ist.
    fn kind(&self) -> BasisKind;

    /// Wertet die Position innerhalb einer Zelle aus.
    ///
    /// `cell_row ∈ [0, height - 3)`, `cell_col ∈ [0, width - 3)`, `t, s ∈ [0, 1]`.
    fn evaluate_position(
        &self,
        grid: &ControlGrid,
        cell_row: usize,
        cell_col: usize,
        t: f32,
        s: f32,
    ) -> Vec3;
}

/// Auswahl der Basis-Variante (z.B. aus den Editor-Optionen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BasisKind {
    /// Offenes Rechteck-Gitter mit uniformer Catmull-Rom-Basis
    #[default]
    CatmullRomGrid,
    /// Röhre um eine Achse (Topologie noch nicht definiert)
    CatmullRomTube,
}

impl BasisKind {
    /// Erzeugt die Basis-Implementierung dieser Variante.
    pub fn create(self) -> Result<Box<dyn SurfaceBasis>, PatchError> {
        match self {
            BasisKind::CatmullRomGrid => Ok(Box::new(CatmullRomGrid)),
            BasisKind::CatmullRomTube => Err(PatchError::UnsupportedBasis(self)),
        }
    }
}

/// Bikubische Tensorprodukt-Fläche aus uniformen Catmull-Rom-Kurven.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatmullRomGrid;

impl SurfaceBasis for CatmullRomGrid {
    fn kind(&self) -> BasisKind {
        BasisKind::CatmullRomGrid
    }

    fn evaluate_position(
        &self,
        grid: &ControlGrid,
        cell_row: usize,
        cell_col: usize,
        t: f32,
        s: f32,
    ) -> Vec3 {
        assert!(
            cell_row + 3 < grid.height() && cell_col + 3 < grid.width(),
            "Zelle ({cell_row}, {cell_col}) außerhalb des Gitters {}x{}",
            grid.height(),
            grid.width()
        );

        // Höhen-Durchlauf: pro Fenster-Spalte eine Kurve über die 4 Zeilen bei t
        let intermediates: [Vec3; 4] = std::array::from_fn(|j| {
            let column: [Vec3; 4] = std::array::from_fn(|i| grid.get(cell_row + i, cell_col + j));
            catmull_rom_window(&column, t)
        });

        // Breiten-Durchlauf über die 4 Zwischenpunkte bei s
        catmull_rom_window(&intermediates, s)
    }
}
