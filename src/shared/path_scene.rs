//! Pfad-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der (externe) Renderer sie konsumiert.

use super::options::EditorOptions;
use crate::core::{flatten_segments, Anchor, AnchorId, ControlPair, Segment};
use glam::Vec2;

/// Griff-Daten eines Ankers für die Widget-Schicht.
///
/// Die `id` bleibt über Re-Renders stabil; Widgets binden ihren Drag-Zustand daran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorHandle {
    /// Stabile Anker-ID
    pub id: AnchorId,
    /// Position des Anker-Griffs
    pub point: Vec2,
    /// Kontrollpunkt-Griffe (nur bei Ankern mit Offset)
    pub control_pair: Option<ControlPair>,
    /// Anker stammt aus der Live-Vorschau (noch nicht committet)
    pub is_preview: bool,
}

impl AnchorHandle {
    /// Baut die Griff-Daten für einen Anker
    pub fn from_anchor(anchor: &Anchor, is_preview: bool) -> Self {
        Self {
            id: anchor.id,
            point: anchor.point,
            control_pair: anchor.control_pair(),
            is_preview,
        }
    }

    /// Hilfslinie incoming → Anker → outgoing (leer bei Eckpunkten)
    pub fn guide_line(&self) -> Option<[Vec2; 3]> {
        self.control_pair
            .map(|pair| [pair.incoming, self.point, pair.outgoing])
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct PathScene {
    /// Zeichenbefehle für den Pfad-Strich (inkl. Vorschau)
    pub segments: Vec<Segment>,
    /// Griffe aller Anker in Pfad-Reihenfolge (inkl. Vorschau)
    pub handles: Vec<AnchorHandle>,
    /// ID des Vorschau-Ankers, falls eine Geste läuft
    pub preview_anchor: Option<AnchorId>,
    /// Laufzeit-Optionen für Griffgrößen und Abtastung
    pub options: EditorOptions,
}

impl PathScene {
    /// Gibt zurück, ob etwas zu zeichnen ist.
    pub fn has_path(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Gibt zurück, ob eine Live-Vorschau aktiv ist.
    pub fn has_preview(&self) -> bool {
        self.preview_anchor.is_some()
    }

    /// Pfad als Polylinie, abgetastet mit `options.flatten_max_segment_length`.
    pub fn polyline(&self) -> Vec<Vec2> {
        flatten_segments(&self.segments, self.options.flatten_max_segment_length)
    }
}
