//! Selektions-Ledger: alle in dieser Editier-Sitzung erzeugten Pfeile.

use crate::core::FeatureId;
use indexmap::IndexSet;

/// Geordnete Menge der Handles über abgeschlossene Formen hinweg.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSelectionLedger {
    ids: IndexSet<FeatureId>,
}

impl SessionSelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt Handles hinzu; vorhandene behalten ihre Position.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = FeatureId>) {
        self.ids.extend(ids);
    }

    pub fn remove(&mut self, id: FeatureId) {
        self.ids.shift_remove(&id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<FeatureId> {
        self.ids.iter().copied().collect()
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
