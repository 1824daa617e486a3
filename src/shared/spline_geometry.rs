//! Reine Geometrie-Funktionen für die uniforme Catmull-Rom-Basis.
//!
//! Layer-neutral: wird vom `core`-Patch-Modell und von Tests gleichermaßen
//! genutzt. Alle Funktionen sind komponentenweise und funktionieren für
//! `Vec2` wie für `Vec3`.

use std::ops::{Add, Mul};

/// Gewichte der vier Kontrollpunkte für Parameter `t ∈ [0, 1]`.
///
/// Der Faktor 0.5 ist bereits eingerechnet, damit gilt:
/// `weights(0) == [0, 1, 0, 0]` und `weights(1) == [0, 0, 1, 0]`.
pub fn catmull_rom_weights(t: f32) -> [f32; 4] {
    let t1 = t;
    let t2 = t * t;
    let t3 = t2 * t;

    let a = -t3 + 2.0 * t2 - t1;
    let b = 3.0 * t3 - 5.0 * t2 + 2.0;
    let c = -3.0 * t3 + 4.0 * t2 + t1;
    let d = t3 - t2;

    [0.5 * a, 0.5 * b, 0.5 * c, 0.5 * d]
}

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 (t = 0) nach p2 (t = 1).
pub fn catmull_rom_point<P>(p0: P, p1: P, p2: P, p3: P, t: f32) -> P
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    let [w0, w1, w2, w3] = catmull_rom_weights(t);
    p0 * w0 + p1 * w1 + p2 * w2 + p3 * w3
}

/// Wertet ein Fenster aus genau vier Kontrollpunkten aus.
///
/// # Panics
/// Wenn `window` nicht exakt vier Punkte enthält.
pub fn catmull_rom_window<P>(window: &[P], t: f32) -> P
where
    P: Copy + Add<Output = P> + Mul<f32, Output = P>,
{
    assert_eq!(
        window.len(),
        4,
        "Catmull-Rom benötigt genau 4 Kontrollpunkte, erhalten: {}",
        window.len()
    );
    catmull_rom_point(window[0], window[1], window[2], window[3], t)
}
