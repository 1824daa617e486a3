//! Mesh-Generierung: Abtastung des Patches in Vertex-/UV-Buffer und Auswertung der Buffer.

use super::{ControlGrid, MeshError, PatchLayout, SurfaceBasis};
use crate::shared::SurfaceVertex;
use glam::{Vec2, Vec3};

/// Tastet die Fläche vollständig ab und überschreibt `vertices` und `uvs`.
///
/// Reihenfolge: Zeilen-Major über das `vertices_height × vertices_width`-Gitter.
/// Innerhalb einer Zelle sind die Intervalle halboffen, der Endrand jeder Zeile,
/// die letzte Zeile und die Ecke werden explizit mit `t = 1` bzw. `s = 1` angehängt.
/// Die UV eines Samples ist das tatsächlich verwendete `(t, s)`.
pub(crate) fn sample_surface(
    basis: &dyn SurfaceBasis,
    grid: &ControlGrid,
    layout: &PatchLayout,
    vertices: &mut Vec<Vec3>,
    uvs: &mut Vec<Vec2>,
) {
    vertices.clear();
    uvs.clear();
    vertices.reserve(layout.vertex_count());
    uvs.reserve(layout.vertex_count());

    let tess = layout.tessellation;
    let step = 1.0 / tess as f32;
    let last_cell_row = layout.segments_height - 1;
    let last_cell_col = layout.segments_width - 1;

    let mut push = |cell_row: usize, cell_col: usize, t: f32, s: f32| {
        vertices.push(basis.evaluate_position(grid, cell_row, cell_col, t, s));
        uvs.push(Vec2::new(t, s));
    };

    for cell_row in 0..layout.segments_height {
        for i in 0..tess {
            let t = i as f32 * step;
            for cell_col in 0..layout.segments_width {
                for j in 0..tess {
                    push(cell_row, cell_col, t, j as f32 * step);
                }
            }
            // Endrand der Zeile
            push(cell_row, last_cell_col, t, 1.0);
        }
    }

    // letzte Zeile
    for cell_col in 0..layout.segments_width {
        for j in 0..tess {
            push(last_cell_row, cell_col, 1.0, j as f32 * step);
        }
    }

    // letzte Ecke
    push(last_cell_row, last_cell_col, 1.0, 1.0);

    assert_eq!(
        vertices.len(),
        layout.vertex_count(),
        "Abtastung erzeugte {} statt {} Samples",
        vertices.len(),
        layout.vertex_count()
    );
}

/// Read-only Sicht auf die aktuellen Buffer eines Patches.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceMesh<'a> {
    /// Positionen, Zeilen-Major
    pub vertices: &'a [Vec3],
    /// Parametrische Koordinaten `(t, s)`, parallel zu `vertices`
    pub uvs: &'a [Vec2],
    /// Dreiecks-Indizes in `vertices`
    pub indices: &'a [u32],
}

impl SurfaceMesh<'_> {
    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Prüft, ob die Buffer für eine Per-Vertex-Normalenberechnung taugen.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() != self.uvs.len() {
            return Err(MeshError::BufferLengthMismatch {
                vertices: self.vertices.len(),
                uvs: self.uvs.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle(self.indices.len()));
        }

        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.indices.chunks_exact(3).enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::DegenerateTriangle { triangle });
            }
        }

        Ok(())
    }

    /// Glatte Vertex-Normalen: flächengewichtete Summe der angrenzenden Dreiecksnormalen.
    ///
    /// Vertices ohne auswertbare Fläche erhalten `Vec3::Y`.
    pub fn smooth_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (Some(a), Some(b), Some(c)) = (
                self.vertices.get(i0),
                self.vertices.get(i1),
                self.vertices.get(i2),
            ) else {
                continue;
            };

            let face = (*b - *a).cross(*c - *a);
            normals[i0] += face;
            normals[i1] += face;
            normals[i2] += face;
        }

        for n in &mut normals {
            *n = n.try_normalize().unwrap_or(Vec3::Y);
        }

        normals
    }

    /// Verschränkte Vertex-Daten (Position, Normale, UV) für einen GPU-Upload.
    pub fn interleaved(&self) -> Vec<SurfaceVertex> {
        self.smooth_normals()
            .into_iter()
            .zip(self.vertices.iter().zip(self.uvs))
            .map(|(normal, (position, uv))| SurfaceVertex::new(*position, normal, *uv))
            .collect()
    }

    /// Kopiert die Buffer in einen eigenständigen Besitz.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            vertices: self.vertices.to_vec(),
            uvs: self.uvs.to_vec(),
            indices: self.indices.to_vec(),
        }
    }
}

/// Eigenständige Kopie der drei Patch-Buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Positionen
    pub vertices: Vec<Vec3>,
    /// Parametrische Koordinaten
    pub uvs: Vec<Vec2>,
    /// Dreiecks-Indizes
    pub indices: Vec<u32>,
}
