//! Repräsentiert einen Anker des Pfads mit optionalem Kontrollpunkt.

use super::geometry::mirror;
use glam::Vec2;
use std::fmt;

/// Stabile Identität eines Ankers.
///
/// Wird beim Anlegen vergeben und nie aus dem Inhalt abgeleitet, da sich
/// Position und Kontrollpunkt während eines Drags laufend ändern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Abgeleitetes Kontrollpunkt-Paar eines Ankers (absolute Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Am Anker gespiegelter Offset
    pub incoming: Vec2,
    /// Gespeicherter Offset
    pub outgoing: Vec2,
}

/// Ein Punkt, durch den der Pfad verläuft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Stabile Anker-ID
    pub id: AnchorId,
    /// Position des Ankers
    pub point: Vec2,
    /// Optionaler Kontrollpunkt (absolut). `None` = Eckpunkt.
    pub control_offset: Option<Vec2>,
}

impl Anchor {
    /// Erstellt einen neuen Anker
    pub fn new(id: AnchorId, point: Vec2, control_offset: Option<Vec2>) -> Self {
        Self {
            id,
            point,
            control_offset,
        }
    }

    /// Kontrollpunkt-Paar, nur definiert wenn ein Offset gesetzt ist.
    pub fn control_pair(&self) -> Option<ControlPair> {
        self.control_offset.map(|outgoing| ControlPair {
            incoming: mirror(outgoing, self.point),
            outgoing,
        })
    }

    /// Gespiegelter Offset oder `None` bei Eckpunkten.
    pub fn mirrored_control(&self) -> Option<Vec2> {
        self.control_pair().map(|pair| pair.incoming)
    }

    /// Setzt die Position; ein vorhandener Offset wandert um dasselbe Delta mit.
    pub(crate) fn move_to(&mut self, to: Vec2) {
        let delta = to - self.point;
        self.point = to;
        self.control_offset = self.control_offset.map(|offset| offset + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_pair_requires_offset() {
        let anchor = Anchor::new(AnchorId(1), Vec2::new(5.0, 5.0), None);
        assert!(anchor.control_pair().is_none());
        assert!(anchor.mirrored_control().is_none());
    }

    #[test]
    fn test_control_pair_mirrors_offset_through_point() {
        let anchor = Anchor::new(AnchorId(1), Vec2::new(50.0, 0.0), Some(Vec2::new(20.0, -20.0)));
        let pair = anchor.control_pair().expect("Paar erwartet");
        assert_eq!(pair.outgoing, Vec2::new(20.0, -20.0));
        assert_eq!(pair.incoming, Vec2::new(80.0, 20.0));
    }

    #[test]
    fn test_move_to_translates_offset() {
        let mut anchor = Anchor::new(AnchorId(7), Vec2::new(0.0, 0.0), Some(Vec2::new(3.0, 4.0)));
        anchor.move_to(Vec2::new(10.0, -2.0));
        assert_eq!(anchor.point, Vec2::new(10.0, -2.0));
        assert_eq!(anchor.control_offset, Some(Vec2::new(13.0, 2.0)));
        assert_eq!(anchor.mirrored_control(), Some(Vec2::new(7.0, -6.0)));
    }

    #[test]
    fn test_display_id() {
        assert_eq!(AnchorId(42).to_string(), "#42");
    }
}
