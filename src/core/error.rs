//! Fehlertypen des Pfad-Kerns.

use super::AnchorId;

/// Fehler bei Mutationen am Anker-Pfad.
///
/// Operationen, die einen Fehler liefern, lassen den Pfad unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathEditError {
    /// Die referenzierte Anker-ID existiert nicht (mehr) im Pfad
    #[error("Anker {0} nicht gefunden")]
    AnchorNotFound(AnchorId),
}
