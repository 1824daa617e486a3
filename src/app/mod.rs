//! Application-Layer: Controller, State, Events und Use-Cases der Editier-Sitzung.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod preview;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Patch, Selektion, Drag, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandOutcome, LogEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use preview::{PreviewMesh, PreviewPresenter, SharedPreview};
pub use state::{AppState, ControlPointDrag, SelectionState};
