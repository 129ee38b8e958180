//! Host-Brücke: Anfragen an die GIS-Umgebung und deren serielle Ausführung.
//!
//! Der Controller arbeitet synchron und legt Host-Wirkungen als
//! [`HostRequest`] in die Outbox. Der [`ArrowRunner`] führt sie der Reihe
//! nach gegen einen [`ArrowHost`] aus.

mod memory;
mod runner;

pub use memory::{HostEvent, MemoryHost, StoredFeature};
pub use runner::{intent_channel, supersede_before_reset, ArrowHandle, ArrowRunner};

use crate::app::ArrowIntent;
use crate::core::{ArrowDescriptor, ArrowError, ArrowSlot, FeatureId, Polyline};
use glam::DVec2;

/// Eine Host-Wirkung, wie sie ein Handler angefordert hat.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    /// Neues Feature anlegen; das Handle landet im Slot
    Create {
        slot: ArrowSlot,
        descriptor: ArrowDescriptor,
        geometry: Polyline,
    },
    /// Geometrie des Slot-Features ersetzen (Handle wird bei Ausführung aufgelöst)
    Modify { slot: ArrowSlot, geometry: Polyline },
    /// Feature löschen
    Delete { slot: ArrowSlot, feature: FeatureId },
    /// Host-Selektion aus Ledger bzw. Option "neue Pfeile selektieren" setzen
    SyncSelection,
    /// Kartenmaßstab am Punkt erfragen
    ResolveMapScale { at: DVec2 },
    /// Ja/Nein-Rückfrage; bei "Ja" wird `on_confirm` sofort verarbeitet
    Confirm {
        message: String,
        on_confirm: ArrowIntent,
    },
    ShowDiagnosticPoint { at: DVec2 },
    ClearDiagnosticPoints,
}

/// Schnittstelle zur GIS-Umgebung.
///
/// Alle Edit-Operationen sind asynchron; der Runner wartet jede einzelne ab,
/// bevor er die nächste startet.
#[allow(async_fn_in_trait)]
pub trait ArrowHost {
    /// Legt ein Pfeil-Feature an und liefert dessen Handle.
    async fn create_feature(
        &mut self,
        descriptor: &ArrowDescriptor,
        geometry: &Polyline,
    ) -> anyhow::Result<FeatureId>;

    async fn modify_feature(&mut self, feature: FeatureId, geometry: &Polyline)
        -> anyhow::Result<()>;

    async fn delete_feature(&mut self, feature: FeatureId) -> anyhow::Result<()>;

    /// Ersetzt die Host-Selektion durch genau diese Features.
    async fn set_selection(&mut self, features: &[FeatureId]) -> anyhow::Result<()>;

    async fn clear_selection(&mut self) -> anyhow::Result<()>;

    /// Ja/Nein-Rückfrage an den Benutzer.
    async fn confirm(&mut self, message: &str) -> bool;

    /// Kartenmaßstab am Punkt; `None` wenn der Host keinen kennt.
    async fn map_scale_at(&mut self, _at: DVec2) -> anyhow::Result<Option<f64>> {
        Ok(None)
    }

    async fn show_diagnostic_point(&mut self, _at: DVec2) -> anyhow::Result<()> {
        Ok(())
    }

    async fn clear_diagnostic_points(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Meldet einen Fehler an den Benutzer.
    fn report_error(&mut self, error: &ArrowError) {
        log::warn!("{}", error);
    }
}
