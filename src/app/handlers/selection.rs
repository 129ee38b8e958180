//! Handler für den Abgleich des Selektions-Ledgers mit dem Host.

use crate::app::ArrowToolState;

/// Leert das Ledger, wenn der Host nichts mehr selektiert hat
/// oder neue Pfeile nicht selektiert werden sollen.
pub fn sync_ledger(state: &mut ArrowToolState, selected_count: usize) {
    let select_new = state
        .session
        .as_ref()
        .map_or(state.options.select_new_arrows, |s| s.select_new_arrows);

    if selected_count == 0 || !select_new {
        if !state.ledger.is_empty() {
            log::debug!("Selektions-Ledger geleert ({} Einträge)", state.ledger.len());
        }
        state.ledger.clear();
    }
}
