//! Zentrale Konfiguration für den Patch-Surface-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::BasisKind;
use serde::{Deserialize, Serialize};

// ── Tessellierung ───────────────────────────────────────────────────

/// Standard-Unterteilungen pro Segment und Achse.
pub const TESSELLATION: u32 = 4;

// ── Ebene ───────────────────────────────────────────────────────────

/// Standard-Ausdehnung der generierten Ebene entlang der Breite (X).
pub const PLANE_WIDTH: f32 = 10.0;
/// Standard-Ausdehnung der generierten Ebene entlang der Höhe (Z).
pub const PLANE_HEIGHT: f32 = 10.0;
/// Standard-Anzahl Kontrollpunkte entlang der Breite.
pub const NUM_WIDTH: u32 = 6;
/// Standard-Anzahl Kontrollpunkte entlang der Höhe.
pub const NUM_HEIGHT: u32 = 6;
/// Maximale zufällige Erhebung (Y) eines generierten Kontrollpunkts.
pub const ELEVATION_JITTER: f32 = 2.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Welteinheiten.
pub const SELECTION_RADIUS: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `patch_surface_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Patch ───────────────────────────────────────────────────
    /// Unterteilungen pro Segment und Achse (>= 1)
    pub tessellation: u32,
    /// Basis-Variante neuer Patches
    #[serde(default)]
    pub basis: BasisKind,

    // ── Ebene ───────────────────────────────────────────────────
    /// Ausdehnung entlang der Breite
    pub plane_width: f32,
    /// Ausdehnung entlang der Höhe
    pub plane_height: f32,
    /// Kontrollpunkte entlang der Breite (>= 4)
    pub num_width: u32,
    /// Kontrollpunkte entlang der Höhe (>= 4)
    pub num_height: u32,
    /// Maximale zufällige Erhebung
    pub elevation_jitter: f32,
    /// Fester Seed für reproduzierbare Ebenen (None = zufällig)
    #[serde(default)]
    pub seed: Option<u64>,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius in Welteinheiten
    pub selection_radius: f32,

    // ── Editing ─────────────────────────────────────────────────
    /// Mesh bei jedem Drag-Update neu berechnen (false = erst beim Loslassen)
    #[serde(default = "default_live_regeneration")]
    pub live_regeneration: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tessellation: TESSELLATION,
            basis: BasisKind::default(),

            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            num_width: NUM_WIDTH,
            num_height: NUM_HEIGHT,
            elevation_jitter: ELEVATION_JITTER,
            seed: None,

            selection_radius: SELECTION_RADIUS,

            live_regeneration: true,
        }
    }
}

/// Serde-Default für `live_regeneration` (Abwärtskompatibilität).
fn default_live_regeneration() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("patch_surface_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("patch_surface_editor.toml")
    }

    /// Vertex-Anzahl des Patches einer generierten Ebene.
    ///
    /// `None`, wenn das Gitter kleiner als 4x4 ist oder die Anzahl nicht in einen
    /// `u32`-Index passt.
    pub fn plane_vertex_count(&self) -> Option<u32> {
        let axis = |count: u32| {
            count
                .checked_sub(3)
                .filter(|&segments| segments >= 1)?
                .checked_mul(self.tessellation)?
                .checked_add(1)
        };
        axis(self.num_height)?.checked_mul(axis(self.num_width)?)
    }

    /// Prüft die Ebenen- und Patch-Parameter. Ungültige Werte werden abgelehnt, nicht korrigiert.
    pub fn validate_plane(&self) -> anyhow::Result<()> {
        use crate::core::MIN_GRID_SIZE;

        if (self.num_width as usize) < MIN_GRID_SIZE || (self.num_height as usize) < MIN_GRID_SIZE
        {
            anyhow::bail!(
                "Ebene braucht mindestens {MIN_GRID_SIZE}x{MIN_GRID_SIZE} Kontrollpunkte, angegeben: {}x{}",
                self.num_height,
                self.num_width
            );
        }
        if self.tessellation < 1 {
            anyhow::bail!("Tessellierung muss >= 1 sein, angegeben: {}", self.tessellation);
        }
        if self.plane_vertex_count().is_none() {
            anyhow::bail!(
                "Tessellierung {} ergibt bei {}x{} Kontrollpunkten zu viele Vertices für u32-Indizes",
                self.tessellation,
                self.num_height,
                self.num_width
            );
        }
        if !self.plane_width.is_finite()
            || !self.plane_height.is_finite()
            || self.plane_width <= 0.0
            || self.plane_height <= 0.0
        {
            anyhow::bail!(
                "Ebenen-Ausdehnung muss positiv sein, angegeben: {}x{}",
                self.plane_height,
                self.plane_width
            );
        }
        if !self.elevation_jitter.is_finite() || self.elevation_jitter < 0.0 {
            anyhow::bail!(
                "Erhebungs-Jitter darf nicht negativ sein, angegeben: {}",
                self.elevation_jitter
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tool_defaults() {
        let options = EditorOptions::default();

        assert_eq!(options.tessellation, 4);
        assert_eq!(options.num_width, 6);
        assert_eq!(options.num_height, 6);
        assert_eq!(options.basis, BasisKind::CatmullRomGrid);
        assert!(options.validate_plane().is_ok());
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let options = EditorOptions {
            tessellation: 7,
            seed: Some(42),
            live_regeneration: false,
            ..EditorOptions::default()
        };

        let text = toml::to_string_pretty(&options).expect("TOML-Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("TOML-Parsing");

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            tessellation = 2
            plane_width = 4.0
            plane_height = 6.0
            num_width = 5
            num_height = 4
            elevation_jitter = 0.0
            selection_radius = 1.0
        "#;

        let parsed: EditorOptions = toml::from_str(text).expect("TOML-Parsing");

        assert_eq!(parsed.basis, BasisKind::CatmullRomGrid);
        assert_eq!(parsed.seed, None);
        assert!(parsed.live_regeneration);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("patch_surface_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_then_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "patch_surface_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            num_width: 9,
            ..EditorOptions::default()
        };

        options.save_to_file(&path).expect("Speichern muss gelingen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn too_small_plane_is_rejected() {
        let options = EditorOptions {
            num_height: 3,
            ..EditorOptions::default()
        };

        let err = options.validate_plane().unwrap_err();
        assert!(err.to_string().contains("mindestens 4x4"));
    }

    #[test]
    fn default_plane_vertex_count() {
        assert_eq!(EditorOptions::default().plane_vertex_count(), Some(169));
    }

    #[test]
    fn oversized_tessellation_is_rejected() {
        let options = EditorOptions {
            tessellation: 100_000,
            ..EditorOptions::default()
        };

        assert_eq!(options.plane_vertex_count(), None);
        let err = options.validate_plane().unwrap_err();
        assert!(err.to_string().contains("zu viele Vertices"));
    }

    #[test]
    fn largest_fitting_tessellation_is_accepted() {
        // 4x4-Gitter: (t + 1)^2 Vertices, 65535^2 < 2^32
        let options = EditorOptions {
            num_width: 4,
            num_height: 4,
            tessellation: 65_534,
            ..EditorOptions::default()
        };

        assert_eq!(options.plane_vertex_count(), Some(65_535 * 65_535));
        assert!(options.validate_plane().is_ok());
    }

    #[test]
    fn zero_tessellation_is_rejected() {
        let options = EditorOptions {
            tessellation: 0,
            ..EditorOptions::default()
        };

        assert!(options.validate_plane().is_err());
    }
}
