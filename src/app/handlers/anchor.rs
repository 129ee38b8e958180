//! Handler für gesetzte Anker.

use super::edit::emit_geometry_or_restore;
use crate::app::geometry::signed_offset;
use crate::app::host::HostRequest;
use crate::app::{AnchorPlacement, ArrowToolState, ConstructionSession};
use crate::core::{ArrowResult, OffsetRefinement};
use glam::DVec2;

/// Klassifiziert den Klick, übernimmt ihn und erzeugt bzw. ändert die Geometrie.
pub fn place_anchor(state: &mut ArrowToolState, point: DVec2) -> ArrowResult<()> {
    let Some(session) = state.session.as_mut() else {
        return Ok(());
    };

    let placement = session.classify_anchor();
    if placement == AnchorPlacement::Ignore {
        log::debug!(
            "Klick ignoriert: {} von {} Ankern gesetzt",
            session.anchor_count(),
            session.anchor_cap()
        );
        return Ok(());
    }

    let before = session.clone();
    session.apply_placement(placement, point);
    let count = session.anchor_count();
    log::debug!("Anker {:?} → {:?} ({} gesetzt)", point, placement, count);

    let mut enters_offset_mode = false;
    match placement {
        AnchorPlacement::Append if count == 1 => {
            session.object_ids.clear();
            // Jede neue Form startet beim Standardmaßstab, der Host kann ihn überschreiben
            session.scale = state.options.default_scale;
            state.push_request(HostRequest::ResolveMapScale { at: point });
            push_diagnostic_point(state, point);
            return Ok(());
        }
        AnchorPlacement::Append if count == 2 => {
            enters_offset_mode =
                session.profile().offset_refinement == OffsetRefinement::Automatic;
        }
        _ => refresh_offset(session),
    }

    push_diagnostic_point(state, point);
    emit_geometry_or_restore(state, before)?;

    // Offset-Modus erst nach der ersten gültigen Form
    if enters_offset_mode {
        if let Some(session) = state.session.as_mut() {
            session.enter_offset_mode();
        }
    }
    Ok(())
}

/// Übernimmt den Abstand des Offset-Ankers, sobald dieser gesetzt ist.
fn refresh_offset(session: &mut ConstructionSession) {
    if !session.profile().supports_offset() {
        return;
    }
    if let &[a, b, p] = session.anchors() {
        session.offset = signed_offset(a, b, p);
    }
}

fn push_diagnostic_point(state: &mut ArrowToolState, at: DVec2) {
    if state.options.show_diagnostic_points {
        state.push_request(HostRequest::ShowDiagnosticPoint { at });
    }
}
