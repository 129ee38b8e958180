//! Kontextmenü der Pfeil-Werkzeuge.
//!
//! Struktur:
//! - `mod.rs`: Router, baut das Menü aus dem Werkzeug-Zustand
//! - `commands/`: Einträge, Preconditions, Kataloge und Validierung

pub mod commands;

pub use commands::{
    validate_entries, MenuCatalog, MenuEntry, Precondition, PreconditionContext, ValidatedEntry,
};

use crate::app::ArrowToolState;

/// Baut die sichtbaren Menüeinträge für die laufende Sitzung.
///
/// Ohne aktives Werkzeug ist das Menü leer.
pub fn build_context_menu(state: &ArrowToolState) -> Vec<ValidatedEntry> {
    let Some(session) = state.session.as_ref() else {
        return Vec::new();
    };

    let catalog = MenuCatalog::for_session(session);
    let ctx = PreconditionContext {
        anchor_count: session.anchor_count(),
        anchor_cap: session.anchor_cap(),
        style: session.descriptor().style,
        required_scales: state.required_scales.as_ref(),
    };
    validate_entries(&catalog, &ctx)
}
