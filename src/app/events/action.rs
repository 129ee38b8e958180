//! Benannte Aktionen aus Kontextmenü und Tastatur.

use crate::core::{ArrowCategory, ArrowStyle};
use serde::{Deserialize, Serialize};

/// Geschlossene Menge der Menü-/Tastatur-Aktionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuAction {
    /// Maßstab × 0.9
    Shorter,
    /// Maßstab × 1.2
    Longer,
    /// Maßstab direkt aus der Maßstabsleiter setzen
    SetScale { menu_value: u32 },
    /// Zickzack-Breite − 1 (min. 1)
    Narrower,
    /// Zickzack-Breite + 1
    Wider,
    /// Zickzack-Position − 2.5 (min. 1)
    SlideTowardStart,
    /// Zickzack-Position + 2.5 (max. 19)
    SlideTowardEnd,
    CurveLess,
    CurveMore,
    /// Zickzack-Parameter auf 5/5/10
    ZigzagDefaults,
    ToggleFlip,
    ToggleSwitchArrowheads,
    ToggleSelectNewArrows,
    ToggleUpdateEndPoint,
    ToggleUpdateOffset,
    /// Stil des Einzelpfeils wechseln (mit Rückfrage bei laufender Form)
    ChangeStyle { style: ArrowStyle },
    /// Bemaßungs-Variante (Anzahl Querstriche) wechseln
    SelectDimensionVariant { category: ArrowCategory },
    /// Form abschließen, Features bleiben erhalten
    Finish,
    /// Form verwerfen, erzeugte Features löschen
    Cancel,
}

impl MenuAction {
    /// `true` wenn die Aktion die Form verändert und eine Neuberechnung auslöst.
    pub fn affects_geometry(&self) -> bool {
        matches!(
            self,
            Self::Shorter
                | Self::Longer
                | Self::SetScale { .. }
                | Self::Narrower
                | Self::Wider
                | Self::SlideTowardStart
                | Self::SlideTowardEnd
                | Self::CurveLess
                | Self::CurveMore
                | Self::ZigzagDefaults
                | Self::ToggleFlip
                | Self::ToggleSwitchArrowheads
                | Self::SelectDimensionVariant { .. }
        )
    }
}
