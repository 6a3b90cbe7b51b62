//! Gesten-Logik: entscheidet, welcher Anker aus einer Zeiger-Geste entsteht.
//!
//! Während der Zeiger gedrückt ist, wird der Kandidat nur als Vorschau an
//! eine Kopie der Ankerfolge gehängt (`preview`). Erst beim Loslassen landet
//! er dauerhaft im Pfad (`commit`).

use super::geometry::{distance, is_drag, mirror, DRAG_TOLERANCE};
use super::{Anchor, AnchorId, AnchorPath};
use glam::Vec2;

/// Ein Abtastwert einer laufenden oder beendeten Zeiger-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureValue {
    /// Position beim Drücken
    pub start_location: Vec2,
    /// Aktuelle Zeiger-Position
    pub current_location: Vec2,
}

impl GestureValue {
    /// Erstellt einen neuen Gesten-Abtastwert
    pub fn new(start_location: Vec2, current_location: Vec2) -> Self {
        Self {
            start_location,
            current_location,
        }
    }

    /// Klick ohne Bewegung an `location`
    pub fn tap(location: Vec2) -> Self {
        Self::new(location, location)
    }

    /// Zurückgelegte Distanz seit dem Drücken
    pub fn distance(&self) -> f32 {
        distance(self.start_location, self.current_location)
    }

    /// Drag statt Klick? Strikt größer als `tolerance`.
    pub fn is_drag(&self, tolerance: f32) -> bool {
        is_drag(self.start_location, self.current_location, tolerance)
    }
}

/// Anker, der aus einer Geste entstehen würde (noch ohne ID).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorCandidate {
    /// Position des neuen Ankers
    pub point: Vec2,
    /// Optionaler Kontrollpunkt
    pub control_offset: Option<Vec2>,
}

impl AnchorCandidate {
    /// Materialisiert den Kandidaten mit gegebener ID
    pub fn with_id(self, id: AnchorId) -> Anchor {
        Anchor::new(id, self.point, self.control_offset)
    }
}

/// Übersetzt Gesten in Vorschau oder dauerhaftes Anhängen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureReducer {
    /// Drag-Toleranz in Welteinheiten
    pub drag_tolerance: f32,
}

impl GestureReducer {
    /// Erstellt einen Reducer mit gegebener Drag-Toleranz
    pub fn new(drag_tolerance: f32) -> Self {
        Self { drag_tolerance }
    }

    /// Berechnet den Kandidaten für `gesture` auf Basis des committeten Pfads.
    ///
    /// Der erste Anker ist immer ein reiner Startpunkt. Danach erzeugt ein Drag
    /// einen symmetrischen Griff (Offset = Zeiger gespiegelt am Startpunkt),
    /// ein Klick einen Eckpunkt.
    pub fn candidate(&self, path: &AnchorPath, gesture: &GestureValue) -> AnchorCandidate {
        let control_offset = if !path.is_empty() && gesture.is_drag(self.drag_tolerance) {
            Some(mirror(gesture.current_location, gesture.start_location))
        } else {
            None
        };
        AnchorCandidate {
            point: gesture.start_location,
            control_offset,
        }
    }

    /// Vorschau-Anker mit der ID, die ein Commit vergeben würde.
    pub fn preview_anchor(&self, path: &AnchorPath, gesture: &GestureValue) -> Anchor {
        self.candidate(path, gesture).with_id(path.next_id())
    }

    /// Flüchtige Ankerfolge = committete Anker + Vorschau-Anker.
    ///
    /// Der Pfad selbst wird nicht verändert.
    pub fn preview(&self, path: &AnchorPath, gesture: &GestureValue) -> Vec<Anchor> {
        let mut anchors = Vec::with_capacity(path.len() + 1);
        anchors.extend(path.iter().copied());
        anchors.push(self.preview_anchor(path, gesture));
        anchors
    }

    /// Hängt den Kandidaten dauerhaft an und liefert seine ID.
    pub fn commit(&self, path: &mut AnchorPath, gesture: &GestureValue) -> AnchorId {
        let candidate = self.candidate(path, gesture);
        path.append(candidate.point, candidate.control_offset)
    }
}

impl Default for GestureReducer {
    fn default() -> Self {
        Self::new(DRAG_TOLERANCE)
    }
}
