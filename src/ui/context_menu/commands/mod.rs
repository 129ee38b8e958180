//! Validiertes Kontextmenü: Einträge, Preconditions und Kataloge.
//!
//! Architektur:
//! - `MenuAction`: Identifikation jedes Menü-Befehls (app::events)
//! - `Precondition`: Enum mit Vorbedingungen (preconditions.rs)
//! - `MenuCatalog`: Katalog pro `MenuSet` (catalogs.rs)
//! - `validate_entries()`: Filtert nur gültige Commands (validation.rs)
//!
//! Garantie: Nur Commands mit erfüllten Preconditions werden angeboten.

mod catalogs;
pub mod preconditions;
mod validation;

pub use preconditions::{Precondition, PreconditionContext};
pub use validation::{validate_entries, ValidatedEntry};

use crate::app::{ArrowIntent, MenuAction};

/// Ein einzelner Eintrag im Menü-Katalog.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    /// Überschrift / Label
    Label(String),
    /// Trennlinie
    Separator,
    /// Befehl mit optionalen Vorbedingungen
    Command {
        action: MenuAction,
        label: String,
        preconditions: Vec<Precondition>,
        /// Häkchen für Schalter und aktuelle Auswahl
        checked: bool,
    },
}

impl MenuEntry {
    /// Befehl ohne Häkchen.
    pub fn command(action: MenuAction, label: &str, preconditions: Vec<Precondition>) -> Self {
        Self::Command {
            action,
            label: label.to_string(),
            preconditions,
            checked: false,
        }
    }

    /// Schalter-Befehl mit Häkchen-Zustand.
    pub fn toggle(
        action: MenuAction,
        label: &str,
        checked: bool,
        preconditions: Vec<Precondition>,
    ) -> Self {
        Self::Command {
            action,
            label: label.to_string(),
            preconditions,
            checked,
        }
    }
}

/// Katalog für ein `MenuSet`: definiert Reihenfolge und Preconditions.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    pub entries: Vec<MenuEntry>,
}

impl MenuAction {
    /// Intent, den der Menüeintrag auslöst.
    pub fn to_intent(self) -> ArrowIntent {
        ArrowIntent::MenuActionChosen { action: self }
    }
}
