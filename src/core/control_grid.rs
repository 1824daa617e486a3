//! Kontrollpunkt-Gitter (Höhe × Breite) einer Patch-Fläche.

use glam::Vec3;
use std::ops::Index;

/// Position eines Kontrollpunkts im Gitter.
///
/// `row` indexiert die Höhen-Achse (t-Richtung), `col` die Breiten-Achse (s-Richtung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    /// Zeile (Höhe)
    pub row: usize,
    /// Spalte (Breite)
    pub col: usize,
}

impl GridIndex {
    /// Erstellt einen neuen Gitter-Index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Zeilenweise gespeichertes 2D-Gitter aus 3D-Kontrollpunkten.
///
/// Die Abmessungen sind nach der Konstruktion fix, einzelne Punkte dürfen
/// jederzeit überschrieben werden.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGrid {
    height: usize,
    width: usize,
    points: Vec<Vec3>,
}

impl ControlGrid {
    /// Erstellt ein Gitter aus zeilenweise angeordneten Punkten.
    ///
    /// # Panics
    /// Wenn eine Abmessung 0 ist oder `points.len() != height * width`.
    pub fn new(height: usize, width: usize, points: Vec<Vec3>) -> Self {
        assert!(
            height > 0 && width > 0,
            "Kontrollgitter braucht positive Abmessungen, erhalten: {height}x{width}"
        );
        assert_eq!(
            points.len(),
            height * width,
            "Kontrollgitter {height}x{width} erwartet {} Punkte, erhalten: {}",
            height * width,
            points.len()
        );
        Self {
            height,
            width,
            points,
        }
    }

    /// Erstellt ein Gitter, dessen Punkte per Closure `(row, col) -> Vec3` erzeugt werden.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> Vec3) -> Self {
        let mut points = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                points.push(f(row, col));
            }
        }
        Self::new(height, width, points)
    }

    /// Erstellt ein Gitter aus einzelnen Zeilen.
    ///
    /// # Panics
    /// Wenn die Zeilen unterschiedlich lang sind oder keine Zeilen vorhanden sind.
    pub fn from_rows(rows: Vec<Vec<Vec3>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "Kontrollgitter-Zeilen müssen gleich lang sein"
        );
        Self::new(height, width, rows.into_iter().flatten().collect())
    }

    /// Anzahl der Zeilen (Höhen-Achse).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Anzahl der Spalten (Breiten-Achse).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Prüft, ob der Index innerhalb des Gitters liegt.
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row < self.height && index.col < self.width
    }

    /// Liest einen Kontrollpunkt.
    ///
    /// # Panics
    /// Bei Index außerhalb des Gitters.
    pub fn get(&self, row: usize, col: usize) -> Vec3 {
        self.points[self.offset(row, col)]
    }

    /// Überschreibt einen Kontrollpunkt. Die Gitter-Abmessungen bleiben unverändert.
    ///
    /// # Panics
    /// Bei Index außerhalb des Gitters.
    pub fn set(&mut self, row: usize, col: usize, position: Vec3) {
        let offset = self.offset(row, col);
        self.points[offset] = position;
    }

    /// Alle Punkte in Zeilen-Reihenfolge.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }

    /// Iterator über `(GridIndex, Position)` in Zeilen-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (GridIndex, Vec3)> + '_ {
        let width = self.width;
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (GridIndex::new(i / width, i % width), *p))
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "Kontrollpunkt ({row}, {col}) liegt außerhalb des Gitters {}x{}",
            self.height,
            self.width
        );
        row * self.width + col
    }
}

impl Index<GridIndex> for ControlGrid {
    type Output = Vec3;

    fn index(&self, index: GridIndex) -> &Vec3 {
        &self.points[self.offset(index.row, index.col)]
    }
}
