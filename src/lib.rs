//! Patch Surface Editor Library.
//! Catmull-Rom-Flächenpatches, Mesh-Generierung und Editier-Sitzung als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, PreviewMesh};
pub use core::{
    BasisKind, ControlGrid, GridIndex, MeshBuffers, PatchError, PatchLayout, PatchPresenter,
    PickRay, SurfaceBasis, SurfaceMesh, SurfacePatch,
};
pub use shared::{EditorOptions, SurfaceVertex};
