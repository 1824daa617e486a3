//! Auswahl des nächstgelegenen Kontrollpunkts entlang eines Pick-Strahls.

use super::{ControlGrid, GridIndex};
use glam::Vec3;

/// Strahl in Weltkoordinaten (z.B. aus Kamera und Mausposition).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    /// Startpunkt
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl PickRay {
    /// Erstellt einen Strahl. Die Richtung wird normiert, ein Nullvektor ergibt `None`.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction.try_normalize().map(|direction| Self { origin, direction })
    }

    /// Kürzester Abstand eines Punkts zum Strahl (hinter dem Ursprung: Abstand zum Ursprung).
    pub fn distance_to(&self, point: Vec3) -> f32 {
        let along = (point - self.origin).dot(self.direction).max(0.0);
        point.distance(self.origin + self.direction * along)
    }
}

/// Treffer eines Picks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Getroffener Kontrollpunkt
    pub index: GridIndex,
    /// Abstand zum Strahl
    pub distance: f32,
}

/// Liefert den Kontrollpunkt mit dem kleinsten Strahlabstand innerhalb von `max_distance`.
///
/// Bei Gleichstand gewinnt der zuerst (Zeilen-Major) gefundene Punkt.
pub fn nearest_control_point(grid: &ControlGrid, ray: &PickRay, max_distance: f32) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for (index, point) in grid.iter() {
        let distance = ray.distance_to(point);
        if distance >= max_distance {
            continue;
        }
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(PickHit { index, distance });
        }
    }

    best
}
