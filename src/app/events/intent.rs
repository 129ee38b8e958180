use super::MenuAction;
use crate::core::{ArrowDescriptor, ArrowStyle};
use crate::shared::ArrowOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Eingaben aus UI-Shell und Host ohne eigene Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowIntent {
    /// Konstruktions-Werkzeug aktiviert
    ToolActivated { descriptor: ArrowDescriptor },
    /// Werkzeug deaktiviert (laufende Form wird verworfen)
    ToolDeactivated,
    /// Anker per Klick gesetzt (Kartenkoordinaten)
    AnchorPlaced { point: DVec2 },
    /// Menüeintrag oder Shortcut ausgelöst
    MenuActionChosen { action: MenuAction },
    /// Rückfrage zum Stilwechsel mit "Ja" beantwortet
    StyleChangeConfirmed { style: ArrowStyle },
    /// Host hat den Kartenmaßstab am ersten Anker gemeldet
    MapScaleResolved { map_scale: f64 },
    /// Host-Selektion hat sich geändert
    HostSelectionChanged { selected_count: usize },
    /// Pflicht-Maßstäbe als Textzeilen geliefert
    RequiredScalesProvided { lines: Vec<String> },
    /// Pflicht-Maßstäbe aus Datei laden
    RequiredScalesFileSelected { path: PathBuf },
    /// Pflicht-Maßstäbe entfernen (alle Maßstäbe anbieten)
    RequiredScalesCleared,
    /// Optionen geändert (gelten ab der nächsten Aktivierung)
    OptionsChanged { options: ArrowOptions },
}

impl ArrowIntent {
    /// Intents, die die laufende Form verwerfen.
    pub fn is_reset(&self) -> bool {
        matches!(
            self,
            Self::ToolDeactivated
                | Self::MenuActionChosen {
                    action: MenuAction::Cancel
                }
        )
    }

    /// Intents, deren Wirkung ein nachfolgender Reset überflüssig macht.
    pub fn is_superseded_by_reset(&self) -> bool {
        match self {
            Self::AnchorPlaced { .. } => true,
            Self::MenuActionChosen { action } => action.affects_geometry(),
            _ => false,
        }
    }
}
