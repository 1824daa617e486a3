//! Core-Domänentypen: Kontrollgitter, Basisfunktionen, Patch-Modell und Mesh-Buffer.

pub mod basis;
pub mod control_grid;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod patch;
pub mod picking;
pub mod visual;

pub use basis::{BasisKind, CatmullRomGrid, SurfaceBasis};
pub use control_grid::{ControlGrid, GridIndex};
pub use error::{MeshError, PatchError};
pub use layout::{PatchLayout, VertexRegion, MIN_GRID_SIZE};
pub use mesh::{MeshBuffers, SurfaceMesh};
pub use patch::SurfacePatch;
pub use picking::{nearest_control_point, PickHit, PickRay};
pub use visual::{PatchPresenter, VisualHandle};
