//! Das Patch-Modell: Kontrollgitter, Basis, Tessellierung und die daraus erzeugten Buffer.

use super::mesh::sample_surface;
use super::{
    BasisKind, CatmullRomGrid, ControlGrid, GridIndex, PatchError, PatchLayout, PatchPresenter,
    SurfaceBasis, SurfaceMesh, VisualHandle,
};
use glam::{Vec2, Vec3};

/// Patch-Fläche über einem Kontrollgitter.
///
/// Gitter-Abmessungen, Tessellierung und Index-Buffer stehen ab der Konstruktion fest.
/// Vertex- und UV-Buffer werden bei jeder Punktänderung vollständig neu berechnet.
pub struct SurfacePatch {
    basis: Box<dyn SurfaceBasis>,
    grid: ControlGrid,
    layout: PatchLayout,
    indices: Vec<u32>,
    vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    visual: Option<VisualHandle>,
}

impl SurfacePatch {
    /// Erstellt einen Catmull-Rom-Gitter-Patch und berechnet sofort die Buffer.
    ///
    /// # Panics
    /// Wenn das Gitter kleiner als 4×4 ist oder `tessellation < 1`.
    pub fn new(grid: ControlGrid, tessellation: usize) -> Self {
        Self::from_basis(Box::new(CatmullRomGrid), grid, tessellation)
    }

    /// Erstellt einen Patch für die gewählte Basis-Variante.
    ///
    /// Nicht implementierte Varianten liefern `PatchError::UnsupportedBasis`,
    /// ungültige Abmessungen lösen wie bei [`SurfacePatch::new`] einen Panic aus.
    pub fn with_basis(
        kind: BasisKind,
        grid: ControlGrid,
        tessellation: usize,
    ) -> Result<Self, PatchError> {
        Ok(Self::from_basis(kind.create()?, grid, tessellation))
    }

    /// Erstellt einen Patch mit einer beliebigen Basis-Implementierung.
    pub fn from_basis(basis: Box<dyn SurfaceBasis>, grid: ControlGrid, tessellation: usize) -> Self {
        let layout = PatchLayout::new(grid.height(), grid.width(), tessellation);
        let indices = layout.build_indices();

        let mut patch = Self {
            basis,
            grid,
            layout,
            indices,
            vertices: Vec::with_capacity(layout.vertex_count()),
            uvs: Vec::with_capacity(layout.vertex_count()),
            visual: None,
        };
        patch.resample();

        log::debug!(
            "Patch erstellt: {}x{} Kontrollpunkte, Tessellierung {}, {} Vertices, {} Dreiecke",
            patch.grid.height(),
            patch.grid.width(),
            tessellation,
            layout.vertex_count(),
            layout.triangle_count()
        );

        patch
    }

    /// Basis-Variante des Patches.
    pub fn basis_kind(&self) -> BasisKind {
        self.basis.kind()
    }

    /// Abgeleitete Abmessungen.
    pub fn layout(&self) -> &PatchLayout {
        &self.layout
    }

    /// Tessellierungsfaktor.
    pub fn tessellation(&self) -> usize {
        self.layout.tessellation
    }

    /// Read-only Zugriff auf das Kontrollgitter.
    pub fn control_points(&self) -> &ControlGrid {
        &self.grid
    }

    /// Einzelner Kontrollpunkt.
    pub fn control_point(&self, index: GridIndex) -> Vec3 {
        self.grid[index]
    }

    /// Überschreibt einen Kontrollpunkt und regeneriert das Mesh.
    ///
    /// # Panics
    /// Bei Index außerhalb des Gitters.
    pub fn set_control_point(&mut self, index: GridIndex, position: Vec3) {
        self.grid.set(index.row, index.col, position);
        self.regenerate();
    }

    /// Wertet die Fläche in Zelle `(cell_row, cell_col)` bei `(t, s)` aus.
    pub fn evaluate_position(&self, cell_row: usize, cell_col: usize, t: f32, s: f32) -> Vec3 {
        assert!(
            cell_row < self.layout.segments_height && cell_col < self.layout.segments_width,
            "Zelle ({cell_row}, {cell_col}) außerhalb von {}x{} Zellen",
            self.layout.segments_height,
            self.layout.segments_width
        );
        self.basis
            .evaluate_position(&self.grid, cell_row, cell_col, t, s)
    }

    /// Berechnet Vertex- und UV-Buffer neu und reicht sie an die Darstellung weiter.
    pub fn regenerate(&mut self) {
        self.resample();
        log::debug!(
            "Patch regeneriert: {} Vertices, {} Indizes",
            self.vertices.len(),
            self.indices.len()
        );

        let mesh = SurfaceMesh {
            vertices: &self.vertices,
            uvs: &self.uvs,
            indices: &self.indices,
        };
        if let Some(visual) = self.visual.as_mut() {
            visual.present(&mesh);
        }
    }

    /// Aktuelle Buffer.
    pub fn mesh(&self) -> SurfaceMesh<'_> {
        SurfaceMesh {
            vertices: &self.vertices,
            uvs: &self.uvs,
            indices: &self.indices,
        }
    }

    /// Positionen in Zeilen-Major-Reihenfolge.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// UV-Koordinaten parallel zu [`SurfacePatch::vertices`].
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Dreiecks-Indizes (fix seit der Konstruktion).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Setzt eine neue Darstellung. Eine vorhandene wird zuvor freigegeben.
    pub fn attach_visual(&mut self, presenter: Box<dyn PatchPresenter>) {
        self.visual = None;
        let mut handle = VisualHandle::new(presenter);
        handle.present(&self.mesh());
        self.visual = Some(handle);
    }

    /// Gibt die aktuelle Darstellung frei (falls vorhanden).
    pub fn release_visual(&mut self) {
        self.visual = None;
    }

    /// Gibt zurück, ob eine Darstellung angehängt ist.
    pub fn has_visual(&self) -> bool {
        self.visual.is_some()
    }

    /// Verwirft den Patch und gibt seine Darstellung sofort frei.
    pub fn destroy(mut self) {
        self.release_visual();
        log::debug!("Patch verworfen");
    }

    fn resample(&mut self) {
        sample_surface(
            self.basis.as_ref(),
            &self.grid,
            &self.layout,
            &mut self.vertices,
            &mut self.uvs,
        );
    }
}

impl std::fmt::Debug for SurfacePatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfacePatch")
            .field("basis", &self.basis.kind())
            .field("layout", &self.layout)
            .field("has_visual", &self.visual.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Events {
        presented: usize,
        destroyed: usize,
        last_vertex_count: usize,
    }

    struct Recorder(Rc<RefCell<Events>>);

    impl PatchPresenter for Recorder {
        fn on_regenerate_requested(&mut self, mesh: &SurfaceMesh<'_>) {
            let mut ev = self.0.borrow_mut();
            ev.presented += 1;
            ev.last_vertex_count = mesh.vertices.len();
        }

        fn on_patch_destroyed(&mut self) {
            self.0.borrow_mut().destroyed += 1;
        }
    }

    fn bumpy_grid(height: usize, width: usize) -> ControlGrid {
        ControlGrid::from_fn(height, width, |r, c| {
            Vec3::new(c as f32, ((r * 3 + c * 5) % 7) as f32 * 0.25, r as f32)
        })
    }

    #[test]
    fn construction_fills_buffers() {
        let patch = SurfacePatch::new(bumpy_grid(6, 6), 4);

        assert_eq!(patch.vertices().len(), 169);
        assert_eq!(patch.uvs().len(), 169);
        assert_eq!(patch.indices().len(), 864);
        assert_eq!(patch.basis_kind(), BasisKind::CatmullRomGrid);
    }

    #[test]
    fn tube_basis_is_rejected_distinctly() {
        let result = SurfacePatch::with_basis(BasisKind::CatmullRomTube, bumpy_grid(4, 4), 1);

        assert!(matches!(
            result,
            Err(PatchError::UnsupportedBasis(BasisKind::CatmullRomTube))
        ));
    }

    #[test]
    fn set_control_point_regenerates_and_keeps_topology() {
        let mut patch = SurfacePatch::new(bumpy_grid(5, 5), 2);
        let indices_before = patch.indices().to_vec();
        let uvs_before = patch.uvs().to_vec();
        let vertices_before = patch.vertices().to_vec();

        patch.set_control_point(GridIndex::new(2, 2), Vec3::new(2.0, 10.0, 2.0));

        assert_eq!(patch.indices(), indices_before.as_slice());
        assert_eq!(patch.uvs(), uvs_before.as_slice());
        assert_ne!(patch.vertices(), vertices_before.as_slice());
        assert_eq!(patch.control_point(GridIndex::new(2, 2)).y, 10.0);
    }

    #[test]
    fn evaluate_position_matches_buffer_samples() {
        let patch = SurfacePatch::new(bumpy_grid(6, 7), 4);
        let layout = *patch.layout();

        // Sample (5, 6): Zelle (1, 1), t = 1/4, s = 2/4
        let expected = patch.evaluate_position(1, 1, 0.25, 0.5);
        assert_eq!(patch.vertices()[layout.vertex_index(5, 6)], expected);
    }

    #[test]
    #[should_panic(expected = "außerhalb von")]
    fn evaluate_position_rejects_out_of_range_cell() {
        let patch = SurfacePatch::new(bumpy_grid(4, 4), 1);
        let _ = patch.evaluate_position(0, 1, 0.0, 0.0);
    }

    #[test]
    fn attached_visual_receives_every_regeneration() {
        let events = Rc::new(RefCell::new(Events::default()));
        let mut patch = SurfacePatch::new(bumpy_grid(4, 4), 3);

        patch.attach_visual(Box::new(Recorder(events.clone())));
        patch.regenerate();
        patch.set_control_point(GridIndex::new(0, 0), Vec3::ONE);

        let ev = events.borrow();
        assert_eq!(ev.presented, 3);
        assert_eq!(ev.last_vertex_count, 16);
        assert_eq!(ev.destroyed, 0);
    }

    #[test]
    fn replacing_visual_releases_previous_one() {
        let first = Rc::new(RefCell::new(Events::default()));
        let second = Rc::new(RefCell::new(Events::default()));
        let mut patch = SurfacePatch::new(bumpy_grid(4, 4), 1);

        patch.attach_visual(Box::new(Recorder(first.clone())));
        patch.attach_visual(Box::new(Recorder(second.clone())));

        assert_eq!(first.borrow().destroyed, 1);
        assert_eq!(second.borrow().destroyed, 0);
        assert!(patch.has_visual());
    }

    #[test]
    fn destroy_and_drop_release_visual_exactly_once() {
        let destroyed = Rc::new(RefCell::new(Events::default()));
        let mut patch = SurfacePatch::new(bumpy_grid(4, 4), 1);
        patch.attach_visual(Box::new(Recorder(destroyed.clone())));
        patch.destroy();
        assert_eq!(destroyed.borrow().destroyed, 1);

        let dropped = Rc::new(RefCell::new(Events::default()));
        {
            let mut patch = SurfacePatch::new(bumpy_grid(4, 4), 1);
            patch.attach_visual(Box::new(Recorder(dropped.clone())));
        }
        assert_eq!(dropped.borrow().destroyed, 1);
    }
}
