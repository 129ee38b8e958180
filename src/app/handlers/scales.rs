//! Handler für Kartenmaßstab und Pflicht-Maßstäbe.

use crate::app::ArrowToolState;
use crate::core::ArrowResult;
use crate::shared::RequiredScales;
use std::path::Path;

/// Setzt den Pfeilmaßstab aus dem gemeldeten Kartenmaßstab.
pub fn apply_map_scale(state: &mut ArrowToolState, map_scale: f64) {
    let scale = state.options.arrow_scale_for_map_scale(map_scale);
    let Some(session) = state.session.as_mut() else {
        return;
    };

    if scale.is_finite() && scale > 0.0 {
        session.scale = scale;
        log::debug!("Pfeilmaßstab aus Karte 1:{} → {}", map_scale, scale);
    } else {
        log::warn!("Kartenmaßstab {} unbrauchbar, Maßstab bleibt {}", map_scale, session.scale);
    }
}

/// Übernimmt Pflicht-Maßstäbe aus Textzeilen. Bei Fehler bleibt die Liste unverändert.
pub fn load_required_scales(state: &mut ArrowToolState, lines: &[String]) -> ArrowResult<()> {
    let required = RequiredScales::parse_lines(lines)?;
    log::info!("{} Pflicht-Maßstäbe übernommen", required.values().len());
    state.required_scales = Some(required);
    Ok(())
}

/// Lädt Pflicht-Maßstäbe aus einer Datei; fehlende Datei = alle Maßstäbe anbieten.
pub fn load_required_scales_file(state: &mut ArrowToolState, path: &Path) -> ArrowResult<()> {
    state.required_scales = RequiredScales::load_from_file(path)?;
    Ok(())
}

pub fn clear_required_scales(state: &mut ArrowToolState) {
    state.required_scales = None;
}
