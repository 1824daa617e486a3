//! GPU-taugliches Vertex-Format für Patch-Flächen.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex einer Patch-Fläche (Position, Normale, UV), verschränkt.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// Normierte Vertex-Normale
    pub normal: [f32; 3],
    /// Parametrische Koordinate `(t, s)`
    pub uv: [f32; 2],
}

impl SurfaceVertex {
    /// Byte-Abstand zweier Vertices im Buffer.
    pub const STRIDE: usize = std::mem::size_of::<SurfaceVertex>();

    /// Erstellt einen neuen SurfaceVertex.
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    /// Rohbytes eines Vertex-Slices für den Upload.
    pub fn as_bytes(vertices: &[SurfaceVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
