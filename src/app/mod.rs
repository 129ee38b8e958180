//! Application-Layer: Controller, State, Events, Geometrie und Host-Brücke.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod host;
mod intent_mapping;
/// Werkzeug-Zustand
///
/// Konstruktions-Sitzung, Selektions-Ledger und Host-Outbox.
pub mod state;

pub use command_log::CommandLog;
pub use controller::ArrowController;
pub use events::{ArrowCommand, ArrowIntent, MenuAction};
pub use geometry::{build_arrow_geometry, ArrowGeometry, ArrowParams};
pub use host::{intent_channel, ArrowHandle, ArrowHost, ArrowRunner, HostRequest, MemoryHost};
pub use state::{AnchorPlacement, ArrowToolState, ConstructionSession, SessionSelectionLedger};
