//! Abgeleitete Tessellierungs-Geometrie eines Patches: Segment-/Vertex-Anzahl und Index-Buffer.

use super::GridIndex;
use std::ops::RangeInclusive;

/// Minimale Kontrollpunkt-Anzahl pro Achse (ein 4×4-Fenster).
pub const MIN_GRID_SIZE: usize = 4;

/// Unveränderliche Abmessungen eines tessellierten Patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLayout {
    /// Unterteilungen pro Segment und Achse
    pub tessellation: usize,
    /// Anzahl überlappender 4er-Fenster entlang der Höhe (`height - 3`)
    pub segments_height: usize,
    /// Anzahl überlappender 4er-Fenster entlang der Breite (`width - 3`)
    pub segments_width: usize,
    /// Sample-Zeilen inklusive Endrand (`segments_height * tessellation + 1`)
    pub vertices_height: usize,
    /// Sample-Spalten inklusive Endrand (`segments_width * tessellation + 1`)
    pub vertices_width: usize,
}

/// Rechteckiger Bereich im Sample-Gitter (inklusive Grenzen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexRegion {
    /// Betroffene Sample-Zeilen
    pub rows: RangeInclusive<usize>,
    /// Betroffene Sample-Spalten
    pub cols: RangeInclusive<usize>,
}

impl VertexRegion {
    /// Prüft, ob das Sample `(row, col)` im Bereich liegt.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

impl PatchLayout {
    /// Leitet das Layout aus Gitter-Abmessungen und Tessellierung ab.
    ///
    /// # Panics
    /// Wenn `grid_height` oder `grid_width` kleiner als 4 ist, `tessellation < 1`,
    /// oder die Vertex-Anzahl nicht in einen `u32`-Index passt.
    pub fn new(grid_height: usize, grid_width: usize, tessellation: usize) -> Self {
        assert!(
            grid_height >= MIN_GRID_SIZE && grid_width >= MIN_GRID_SIZE,
            "Patch braucht mindestens {MIN_GRID_SIZE}x{MIN_GRID_SIZE} Kontrollpunkte, erhalten: {grid_height}x{grid_width}"
        );
        assert!(
            tessellation >= 1,
            "Tessellierung muss >= 1 sein, erhalten: {tessellation}"
        );

        let segments_height = grid_height - 3;
        let segments_width = grid_width - 3;
        let vertices_height = segments_height * tessellation + 1;
        let vertices_width = segments_width * tessellation + 1;

        assert!(
            vertices_height
                .checked_mul(vertices_width)
                .is_some_and(|n| u32::try_from(n).is_ok()),
            "Vertex-Anzahl {vertices_height}x{vertices_width} überschreitet den u32-Indexbereich"
        );

        Self {
            tessellation,
            segments_height,
            segments_width,
            vertices_height,
            vertices_width,
        }
    }

    /// Gesamtzahl der Samples (`vertices_height * vertices_width`).
    pub fn vertex_count(&self) -> usize {
        self.vertices_height * self.vertices_width
    }

    /// Länge des Index-Buffers (zwei Dreiecke pro Quad).
    pub fn index_count(&self) -> usize {
        6 * (self.vertices_height - 1) * (self.vertices_width - 1)
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    /// Position des Samples `(row, col)` im Vertex-Buffer.
    pub fn vertex_index(&self, row: usize, col: usize) -> usize {
        row * self.vertices_width + col
    }

    /// Baut den Index-Buffer. Hängt nur von den Vertex-Abmessungen ab.
    pub fn build_indices(&self) -> Vec<u32> {
        let w = self.vertices_width as u32;
        let mut indices = Vec::with_capacity(self.index_count());

        for i in 0..(self.vertices_height as u32 - 1) {
            for j in 0..(w - 1) {
                indices.push(i * w + j);
                indices.push((i + 1) * w + j + 1);
                indices.push(i * w + j + 1);

                indices.push(i * w + j);
                indices.push((i + 1) * w + j);
                indices.push((i + 1) * w + j + 1);
            }
        }

        indices
    }

    /// Sample-Bereich, dessen Positionen vom Kontrollpunkt `index` abhängen können.
    ///
    /// Umfasst alle Zellen, deren 4×4-Fenster den Punkt enthalten,
    /// inklusive der gemeinsamen Randsamples.
    pub fn influence_region(&self, index: GridIndex) -> VertexRegion {
        let (row_lo, row_hi) = Self::cell_span(index.row, self.segments_height);
        let (col_lo, col_hi) = Self::cell_span(index.col, self.segments_width);
        let tess = self.tessellation;

        VertexRegion {
            rows: row_lo * tess..=(row_hi + 1) * tess,
            cols: col_lo * tess..=(col_hi + 1) * tess,
        }
    }

    /// Erste und letzte Zelle, deren Fenster den Punkt an `point` enthält.
    fn cell_span(point: usize, segments: usize) -> (usize, usize) {
        assert!(
            point < segments + 3,
            "Kontrollpunkt-Index {point} außerhalb von 0..{}",
            segments + 3
        );
        (point.saturating_sub(3), point.min(segments - 1))
    }
}
