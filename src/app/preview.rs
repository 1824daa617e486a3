//! In-Process-Darstellung des Patches: hält die zuletzt hochgeladenen Buffer.
//!
//! Steht stellvertretend für einen Viewport-Renderer. Der Patch besitzt den
//! `PreviewPresenter`, die Sitzung liest über `SharedPreview` mit.

use crate::core::{PatchPresenter, SurfaceMesh};
use crate::shared::SurfaceVertex;
use std::cell::RefCell;
use std::rc::Rc;

/// Gemeinsamer Zugriff auf das Vorschau-Mesh (Single-Thread).
pub type SharedPreview = Rc<RefCell<PreviewMesh>>;

/// Upload-fertige Mesh-Daten der aktuellen Darstellung.
#[derive(Debug, Clone, Default)]
pub struct PreviewMesh {
    /// Verschränkte Vertices mit glatten Normalen
    pub vertices: Vec<SurfaceVertex>,
    /// Dreiecks-Indizes
    pub indices: Vec<u32>,
    /// Anzahl der bisherigen Uploads
    pub uploads: u64,
    /// Ob gerade ein Patch dargestellt wird
    pub live: bool,
}

impl PreviewMesh {
    /// Rohbytes des Vertex-Buffers.
    pub fn vertex_bytes(&self) -> &[u8] {
        SurfaceVertex::as_bytes(&self.vertices)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.live = false;
    }
}

/// Presenter, der in ein `SharedPreview` schreibt.
pub struct PreviewPresenter {
    target: SharedPreview,
}

impl PreviewPresenter {
    /// Erstellt einen Presenter für das gegebene Vorschau-Mesh.
    pub fn new(target: SharedPreview) -> Self {
        Self { target }
    }
}

impl PatchPresenter for PreviewPresenter {
    fn on_regenerate_requested(&mut self, mesh: &SurfaceMesh<'_>) {
        if let Err(e) = mesh.validate() {
            log::error!("Patch-Mesh ungültig, Upload übersprungen: {}", e);
            return;
        }

        let mut preview = self.target.borrow_mut();
        preview.vertices = mesh.interleaved();
        preview.indices.clear();
        preview.indices.extend_from_slice(mesh.indices);
        preview.uploads += 1;
        preview.live = true;
    }

    fn on_patch_destroyed(&mut self) {
        self.target.borrow_mut().clear();
        log::debug!("Vorschau-Mesh freigegeben");
    }
}
