//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält Typen und Funktionen, die sowohl vom `core` als auch vom `app`-Layer
//! genutzt werden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod options;
pub mod spline_geometry;
mod surface_vertex;

pub use options::EditorOptions;
pub use surface_vertex::SurfaceVertex;
