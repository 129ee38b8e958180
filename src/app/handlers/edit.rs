//! Gemeinsame Edit-Schritte: Geometrie neu erzeugen, Form zurücksetzen.

use crate::app::geometry::build_arrow_geometry;
use crate::app::host::HostRequest;
use crate::app::{ArrowToolState, ConstructionSession};
use crate::core::ArrowResult;

/// Baut die Geometrie der laufenden Form und fordert Create/Modify an.
///
/// Slots mit Feature werden geändert, leere Slots neu angelegt. Schlägt die
/// Konstruktion fehl, wird keine Host-Anfrage erzeugt.
pub fn emit_geometry(state: &mut ArrowToolState) -> ArrowResult<()> {
    let Some(session) = state.session.as_ref() else {
        return Ok(());
    };

    let descriptor = session.descriptor();
    let object_ids = session.object_ids;
    let geometry = build_arrow_geometry(
        &descriptor,
        session.anchors(),
        &session.params(),
        &state.templates,
    )?;

    for (slot, line) in geometry.slots() {
        let request = if object_ids.get(slot).is_some() {
            HostRequest::Modify {
                slot,
                geometry: line.clone(),
            }
        } else {
            HostRequest::Create {
                slot,
                descriptor,
                geometry: line.clone(),
            }
        };
        state.push_request(request);
    }

    state.push_request(HostRequest::SyncSelection);
    if state.options.show_diagnostic_points {
        state.push_request(HostRequest::ClearDiagnosticPoints);
    }
    Ok(())
}

/// Wie [`emit_geometry`], setzt die Sitzung bei einem Fehler aber auf `before` zurück.
///
/// Die Form bleibt damit bei der zuletzt erfolgreich gebauten Geometrie.
pub fn emit_geometry_or_restore(
    state: &mut ArrowToolState,
    before: ConstructionSession,
) -> ArrowResult<()> {
    let result = emit_geometry(state);
    if let Err(e) = &result {
        log::warn!("Schritt verworfen, Form bleibt beim letzten Stand: {}", e);
        state.session = Some(before);
    }
    result
}

/// Verwirft die laufende Form: erzeugte Features löschen, Anker leeren.
pub fn reset_shape(state: &mut ArrowToolState) {
    let Some(session) = state.session.as_mut() else {
        return;
    };

    let occupied: Vec<_> = session.object_ids.occupied().collect();
    session.clear_shape();

    for (slot, feature) in occupied {
        state.push_request(HostRequest::Delete { slot, feature });
    }
    if state.options.show_diagnostic_points {
        state.push_request(HostRequest::ClearDiagnosticPoints);
    }
}
