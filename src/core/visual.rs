//! Schnittstelle zur externen Darstellung eines Patches.
//!
//! Der Patch besitzt höchstens ein `VisualHandle`. Wird es ersetzt oder der
//! Patch verworfen, gibt `Drop` den Presenter sofort frei.

use super::SurfaceMesh;

/// Kollaborator, der die Mesh-Daten eines Patches darstellt (z.B. Viewport, GPU-Upload).
pub trait PatchPresenter {
    /// Neue Buffer liegen vor und sollen übernommen werden.
    fn on_regenerate_requested(&mut self, mesh: &SurfaceMesh<'_>);

    /// Der Patch wird verworfen, alle zugehörigen Ressourcen freigeben.
    fn on_patch_destroyed(&mut self);
}

/// Exklusiver Besitz einer Darstellung mit deterministischer Freigabe.
pub struct VisualHandle {
    presenter: Box<dyn PatchPresenter>,
}

impl VisualHandle {
    /// Übernimmt einen Presenter.
    pub fn new(presenter: Box<dyn PatchPresenter>) -> Self {
        Self { presenter }
    }

    /// Reicht aktuelle Buffer an den Presenter weiter.
    pub fn present(&mut self, mesh: &SurfaceMesh<'_>) {
        self.presenter.on_regenerate_requested(mesh);
    }
}

impl Drop for VisualHandle {
    fn drop(&mut self) {
        self.presenter.on_patch_destroyed();
    }
}

impl std::fmt::Debug for VisualHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualHandle").finish_non_exhaustive()
    }
}
