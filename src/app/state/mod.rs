//! Zustand der Pfeil-Werkzeuge: Sitzung, Selektions-Ledger, Werkzeug-Zustand.

mod selection;
mod session;
mod tool_state;

pub use selection::SessionSelectionLedger;
pub use session::{AnchorPlacement, ConstructionSession};
pub use tool_state::ArrowToolState;
