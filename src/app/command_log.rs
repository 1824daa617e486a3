//! Sitzungsprotokoll: ausgeführte Commands samt Wirkung auf das Patch-Mesh.

use super::AppCommand;
use std::collections::VecDeque;

/// Wirkung eines ausgeführten Commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Zustand geändert, Mesh unverändert (Selektion, Optionen, Drag-Puffer)
    Applied,
    /// Mesh wurde neu berechnet und an die Darstellung übergeben
    Regenerated,
    /// Command wurde mit Fehler abgelehnt
    Failed,
}

/// Ein Protokolleintrag.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Ausgeführter Command
    pub command: AppCommand,
    /// Wirkung der Ausführung
    pub outcome: CommandOutcome,
}

/// Begrenztes Protokoll; zählt Regenerierungen über die gesamte Sitzung.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LogEntry>,
    regenerations: u64,
    failures: u64,
}

impl CommandLog {
    /// Maximale Anzahl gehaltener Einträge; ältere fallen einzeln heraus.
    pub const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command mit seiner Wirkung an.
    pub fn record(&mut self, command: AppCommand, outcome: CommandOutcome) {
        match outcome {
            CommandOutcome::Regenerated => self.regenerations += 1,
            CommandOutcome::Failed => self.failures += 1,
            CommandOutcome::Applied => {}
        }
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { command, outcome });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt protokollierter Eintrag.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Einträge in Ausführungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Commands seit Sitzungsbeginn, die eine Regenerierung ausgelöst haben.
    ///
    /// Zählt auch Einträge, die bereits aus dem Protokoll gefallen sind.
    pub fn regeneration_count(&self) -> u64 {
        self.regenerations
    }

    /// Abgelehnte Commands seit Sitzungsbeginn.
    pub fn failure_count(&self) -> u64 {
        self.failures
    }
}
