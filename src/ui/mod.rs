//! UI-Anbindung ohne Toolkit: Kontextmenü-Modell und Tastatur-Shortcuts.
//!
//! Eine UI-Shell rendert die validierten Einträge und leitet Klicks
//! und Tasten als `ArrowIntent` an den Runner weiter.

pub mod context_menu;
pub mod keyboard;

pub use context_menu::{build_context_menu, ValidatedEntry};
pub use keyboard::{key_intent, ArrowKey};
