//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod plane;
pub mod selection;
