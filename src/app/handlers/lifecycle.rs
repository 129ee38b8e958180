//! Handler für den Lebenszyklus von Werkzeug und Form.

use super::edit::reset_shape;
use crate::app::host::HostRequest;
use crate::app::{ArrowIntent, ArrowToolState, ConstructionSession};
use crate::core::{ArrowDescriptor, ArrowResult, ArrowStyle};
use crate::shared::{ArrowOptions, RequiredScales};
use crate::xml::TemplateStore;

/// Startet eine neue Konstruktions-Sitzung; eine laufende Form wird verworfen.
pub fn activate_tool(state: &mut ArrowToolState, descriptor: ArrowDescriptor) {
    reset_shape(state);

    if let Some(path) = state.options.required_scales_file.clone() {
        match RequiredScales::load_from_file(&path) {
            Ok(required) => state.required_scales = required,
            Err(e) => log::warn!("Pflicht-Maßstäbe nicht geladen ({}): {}", path.display(), e),
        }
    }

    state.session = Some(ConstructionSession::new(descriptor, &state.options));
    log::info!(
        "Werkzeug aktiviert: {:?} / {}",
        descriptor.category,
        descriptor.style.display_name()
    );
}

/// Verwirft die laufende Form und beendet die Sitzung.
pub fn deactivate_tool(state: &mut ArrowToolState) {
    reset_shape(state);
    if state.session.take().is_some() {
        log::info!("Werkzeug deaktiviert");
    }
}

/// Schließt die Form ab: Features bleiben, die nächste Form beginnt leer.
pub fn finish_shape(state: &mut ArrowToolState) {
    if let Some(session) = state.session.as_mut() {
        let kept = session.object_ids.occupied().count();
        session.clear_shape();
        log::info!("Form abgeschlossen, {} Features behalten", kept);
    }
}

/// Verwirft die Form und löscht deren Features.
pub fn cancel_shape(state: &mut ArrowToolState) {
    reset_shape(state);
    log::info!("Form verworfen");
}

/// Stilwechsel: bei laufender Form erst nachfragen.
pub fn request_style_change(state: &mut ArrowToolState, style: ArrowStyle) -> ArrowResult<()> {
    let Some(session) = state.session.as_ref() else {
        return Ok(());
    };

    if session.has_anchors() {
        state.push_request(HostRequest::Confirm {
            message: format!(
                "Die laufende Form wird verworfen. Zu '{}' wechseln?",
                style.display_name()
            ),
            on_confirm: ArrowIntent::StyleChangeConfirmed { style },
        });
    } else {
        change_style(state, style);
    }
    Ok(())
}

/// Verwirft die Form und ersetzt den Deskriptor durch den Einzelpfeil-Stil.
pub fn change_style(state: &mut ArrowToolState, style: ArrowStyle) {
    reset_shape(state);
    if let Some(session) = state.session.as_mut() {
        session.replace_descriptor(ArrowDescriptor::single(style));
        log::info!("Stil gewechselt: {}", style.display_name());
    }
}

/// Übernimmt neue Optionen; Template-Quelle wird neu gebunden.
pub fn apply_options(state: &mut ArrowToolState, options: ArrowOptions) {
    if options.template_file != state.options.template_file {
        state.templates = match &options.template_file {
            Some(path) => TemplateStore::from_file(path),
            None => TemplateStore::embedded(),
        };
    }
    state.options = options;
    log::info!("Optionen übernommen");
}
