//! Fehlerarten der Pfeil-Werkzeuge.

use thiserror::Error;

/// Typisierte Fehler für Template-Store, Geometrie-Engine und Host-Brücke.
///
/// Keine Variante ist für den Prozess fatal: Fehler brechen nur den aktuellen
/// Schritt ab und werden gemeldet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrowError {
    /// Für die Kategorie existiert kein Template in der Bibliothek
    #[error("Template nicht gefunden: '{name}'")]
    TemplateNotFound {
        /// Name des gesuchten Template-Elements
        name: String,
    },

    /// Template-Quelle konnte nicht gelesen oder geparst werden
    #[error("Template-Bibliothek fehlerhaft: {message}")]
    TemplateParseError {
        /// Beschreibung des Parse-Fehlers
        message: String,
    },

    /// Deklarierte Segmentanzahl weicht von den gelesenen Datensätzen ab (nicht fatal)
    #[error("Template '{name}': {declared} Segmente deklariert, {found} gelesen")]
    TemplateDataMismatch {
        name: String,
        declared: usize,
        found: usize,
    },

    /// Geometrie konnte aus den Ankern nicht konstruiert werden
    #[error("Geometrie nicht konstruierbar: {message}")]
    GeometryConstructionError { message: String },

    /// Required-Scales-Datei enthält eine nicht-ganzzahlige Zeile
    #[error("Ungültige Maßstabsliste: Zeile {line} ('{value}') ist keine Ganzzahl")]
    RequiredScalesFileInvalid {
        /// 1-basierte Zeilennummer
        line: usize,
        value: String,
    },

    /// Host hat eine Edit-Operation abgelehnt
    #[error("Host-Operation '{operation}' fehlgeschlagen: {message}")]
    HostOperationFailed { operation: String, message: String },
}

impl ArrowError {
    /// Kurzform für `GeometryConstructionError`.
    pub fn geometry(message: impl Into<String>) -> Self {
        Self::GeometryConstructionError {
            message: message.into(),
        }
    }

    /// Kurzform für `TemplateParseError`.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::TemplateParseError {
            message: message.into(),
        }
    }

    /// Verpackt einen Host-Fehler (anyhow) mit dem Namen der Operation.
    pub fn host(operation: &str, error: &anyhow::Error) -> Self {
        Self::HostOperationFailed {
            operation: operation.to_string(),
            message: format!("{error:#}"),
        }
    }
}

/// Ergebnis-Alias für die Domänen-Operationen.
pub type ArrowResult<T> = Result<T, ArrowError>;
