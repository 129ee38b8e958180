use super::MenuAction;
use crate::core::{ArrowCategory, ArrowDescriptor, ArrowStyle};
use crate::shared::ArrowOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowCommand {
    /// Neue Konstruktions-Sitzung starten
    ActivateTool { descriptor: ArrowDescriptor },
    /// Sitzung verwerfen und beenden
    DeactivateTool,
    /// Anker klassifizieren und Geometrie erzeugen/ändern
    PlaceAnchor { point: DVec2 },
    /// Formparameter oder Modus ändern
    ApplyMenuAction { action: MenuAction },
    /// Bemaßungs-Variante wechseln
    SelectDimensionVariant { category: ArrowCategory },
    /// Stilwechsel anfragen (Rückfrage bei laufender Form)
    RequestStyleChange { style: ArrowStyle },
    /// Stilwechsel durchführen
    ChangeStyle { style: ArrowStyle },
    /// Form abschließen
    FinishShape,
    /// Form verwerfen
    CancelShape,
    /// Pfeilmaßstab aus Kartenmaßstab setzen
    ApplyMapScale { map_scale: f64 },
    /// Selektions-Ledger mit Host-Selektion abgleichen
    SyncLedger { selected_count: usize },
    LoadRequiredScales { lines: Vec<String> },
    LoadRequiredScalesFile { path: PathBuf },
    ClearRequiredScales,
    ApplyOptions { options: ArrowOptions },
}
