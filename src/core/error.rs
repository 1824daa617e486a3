//! Fehlertypen des Patch-Kerns.
//!
//! Vorbedingungs-Verletzungen (falsche Abmessungen, Index außerhalb) sind
//! Programmierfehler und lösen `panic!` aus. Hier stehen nur die Fehler,
//! die ein Aufrufer sinnvoll unterscheiden und behandeln kann.

use super::BasisKind;
use thiserror::Error;

/// Fehler beim Erzeugen eines Patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatchError {
    /// Die angeforderte Basis-Variante existiert noch nicht.
    #[error("Basis-Variante {0:?} ist nicht implementiert")]
    UnsupportedBasis(BasisKind),
}

/// Topologie-Defekte, die eine Normalenberechnung unmöglich machen würden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Vertex- und UV-Buffer sind unterschiedlich lang.
    #[error("Buffer-Längen passen nicht: {vertices} Vertices, {uvs} UVs")]
    BufferLengthMismatch { vertices: usize, uvs: usize },
    /// Index-Buffer-Länge ist kein Vielfaches von 3.
    #[error("Index-Buffer-Länge {0} ist kein Vielfaches von 3")]
    IncompleteTriangle(usize),
    /// Ein Index zeigt hinter das Ende des Vertex-Buffers.
    #[error("Index {index} außerhalb von {vertex_count} Vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// Ein Dreieck referenziert denselben Vertex mehrfach.
    #[error("Dreieck {triangle} ist degeneriert")]
    DegenerateTriangle { triangle: usize },
}
