//! Fehler-Taxonomie der Engine.
//!
//! Alle Mutations- und Codec-Fehler sind lokal und synchron: das Modell
//! bleibt unverändert, es wird kein Undo-Command gepusht, der Fehler geht
//! an den Aufrufer zurück (z.B. für einen Dialog-Reprompt).

use thiserror::Error;

/// Fehlerarten der Mutations-Engine und des Codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Referenzierte Entity/Dot/Draft-ID existiert nicht.
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation ist für die Entity-Art bzw. Phase nicht zulässig
    /// (z.B. Dot-Insert in einen Point, Finalize unter Minimum).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Ungültige Eingabe oder ungültiger persistierter Datensatz
    /// (leerer Name, negativer Radius, Kardinalitätsverletzung).
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Engine-weiter Result-Alias.
pub type Result<T> = std::result::Result<T, EngineError>;
