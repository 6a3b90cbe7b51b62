//! Zentrale Konfiguration für den Pfad-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Gesten ──────────────────────────────────────────────────────────

pub use crate::core::DRAG_TOLERANCE;

// ── Abtastung ───────────────────────────────────────────────────────

/// Maximaler Punktabstand beim Abtasten von Kurven zu Polylinien (Welteinheiten).
pub const FLATTEN_MAX_SEGMENT_LENGTH: f32 = 4.0;

// ── Griffe ──────────────────────────────────────────────────────────

/// Kantenlänge der Anker-Griffe in Pixeln.
pub const ANCHOR_HANDLE_SIZE: f32 = 14.0;
/// Kantenlänge der Kontrollpunkt-Griffe in Pixeln.
pub const CONTROL_HANDLE_SIZE: f32 = 14.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vector_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Drag-Toleranz: Bewegungen bis einschließlich dieser Distanz sind Klicks
    #[serde(default = "default_drag_tolerance")]
    pub drag_tolerance: f32,
    /// Maximaler Punktabstand beim Abtasten von Kurven
    #[serde(default = "default_flatten_max_segment_length")]
    pub flatten_max_segment_length: f32,
    /// Größe der Anker-Griffe (Pixel)
    #[serde(default = "default_anchor_handle_size")]
    pub anchor_handle_size: f32,
    /// Größe der Kontrollpunkt-Griffe (Pixel)
    #[serde(default = "default_control_handle_size")]
    pub control_handle_size: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_tolerance: DRAG_TOLERANCE,
            flatten_max_segment_length: FLATTEN_MAX_SEGMENT_LENGTH,
            anchor_handle_size: ANCHOR_HANDLE_SIZE,
            control_handle_size: CONTROL_HANDLE_SIZE,
        }
    }
}

/// Serde-Default für `drag_tolerance` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_drag_tolerance() -> f32 {
    DRAG_TOLERANCE
}

fn default_flatten_max_segment_length() -> f32 {
    FLATTEN_MAX_SEGMENT_LENGTH
}

fn default_anchor_handle_size() -> f32 {
    ANCHOR_HANDLE_SIZE
}

fn default_control_handle_size() -> f32 {
    CONTROL_HANDLE_SIZE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::load_from_str(&content) {
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

    /// Parst Optionen aus einem TOML-String. Fehlende Felder erhalten Standardwerte.
    ///
    /// Ungültige Werte (siehe [`EditorOptions::validate`]) sind ein Fehler.
    pub fn load_from_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft die Werte auf Plausibilität.
    ///
    /// Drag-Toleranz: endlich und nicht negativ (sonst wäre jeder Klick ein Drag).
    /// Abtastabstand und Griffgrößen: endlich und positiv.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.drag_tolerance.is_finite() || self.drag_tolerance < 0.0 {
            anyhow::bail!("Ungültige Drag-Toleranz: {}", self.drag_tolerance);
        }
        let positive = [
            ("flatten_max_segment_length", self.flatten_max_segment_length),
            ("anchor_handle_size", self.anchor_handle_size),
            ("control_handle_size", self.control_handle_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("Ungültiger Wert für {}: {}", name, value);
            }
        }
        Ok(())
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
            .unwrap_or_else(|_| std::path::PathBuf::from("vector_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vector_path_editor.toml")
    }
}
