//! Feature-Handler für ArrowCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod anchor;
pub mod edit;
pub mod lifecycle;
pub mod menu;
pub mod scales;
pub mod selection;
