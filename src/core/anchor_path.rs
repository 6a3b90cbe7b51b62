//! Die zentrale Pfad-Datenstruktur: geordnete Anker mit stabilen IDs.

use super::geometry::mirror;
use super::{Anchor, AnchorId, PathEditError};
use glam::Vec2;
use indexmap::IndexMap;

/// Geordnete Folge von Ankern.
///
/// Einfügereihenfolge = Durchlaufreihenfolge = Render-Reihenfolge.
/// Anker werden nur angehängt oder an Ort und Stelle verändert, nie
/// umsortiert oder entfernt.
#[derive(Debug, Clone)]
pub struct AnchorPath {
    /// Alle Anker in Pfad-Reihenfolge, indexiert nach ihrer ID
    anchors: IndexMap<AnchorId, Anchor>,
    /// Nächste freie Anker-ID
    next_id: u64,
}

impl AnchorPath {
    /// Erstellt einen leeren Pfad
    pub fn new() -> Self {
        Self {
            anchors: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Hängt einen neuen Anker mit frischer ID an
    pub fn append(&mut self, point: Vec2, control_offset: Option<Vec2>) -> AnchorId {
        let id = self.next_id();
        self.next_id = id.0 + 1;
        self.anchors.insert(id, Anchor::new(id, point, control_offset));
        id
    }

    /// ID, die der nächste `append` vergeben wird
    pub fn next_id(&self) -> AnchorId {
        AnchorId(self.next_id)
    }

    /// Setzt die Position eines Ankers; der Offset wandert um dasselbe Delta mit
    pub fn move_point(&mut self, id: AnchorId, to: Vec2) -> Result<(), PathEditError> {
        self.anchor_mut(id)?.move_to(to);
        Ok(())
    }

    /// Setzt den Offset über den gespiegelten Griff: `offset = mirror(incoming, point)`
    pub fn move_control_via_incoming(
        &mut self,
        id: AnchorId,
        incoming: Vec2,
    ) -> Result<(), PathEditError> {
        let anchor = self.anchor_mut(id)?;
        anchor.control_offset = Some(mirror(incoming, anchor.point));
        Ok(())
    }

    /// Setzt den Offset direkt
    pub fn move_control_direct(
        &mut self,
        id: AnchorId,
        outgoing: Vec2,
    ) -> Result<(), PathEditError> {
        self.anchor_mut(id)?.control_offset = Some(outgoing);
        Ok(())
    }

    /// Findet einen Anker per ID — O(1)
    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    /// Position eines Ankers in der Pfad-Reihenfolge
    pub fn index_of(&self, id: AnchorId) -> Option<usize> {
        self.anchors.get_index_of(&id)
    }

    /// Erster Anker (Startpunkt des Pfads)
    pub fn first(&self) -> Option<&Anchor> {
        self.anchors.first().map(|(_, anchor)| anchor)
    }

    /// Letzter Anker
    pub fn last(&self) -> Option<&Anchor> {
        self.anchors.last().map(|(_, anchor)| anchor)
    }

    /// Iterator über alle Anker in Pfad-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.values()
    }

    /// Kopie aller Anker als Vec (z.B. als Basis einer Vorschau)
    pub fn anchors(&self) -> Vec<Anchor> {
        self.anchors.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    fn anchor_mut(&mut self, id: AnchorId) -> Result<&mut Anchor, PathEditError> {
        self.anchors
            .get_mut(&id)
            .ok_or(PathEditError::AnchorNotFound(id))
    }
}

impl Default for AnchorPath {
    fn default() -> Self {
        Self::new()
    }
}
