//! Host-Feature-Handles und die beiden Objekt-ID-Slots einer Konstruktion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vom Host vergebenes Handle eines erzeugten Pfeil-Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot einer Polylinie: linker Pfeil (1) oder gespiegelter rechter Pfeil (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowSlot {
    First,
    Second,
}

impl ArrowSlot {
    /// Beide Slots in fester Reihenfolge.
    pub const ALL: [ArrowSlot; 2] = [ArrowSlot::First, ArrowSlot::Second];

    /// 1-basierte Slot-Nummer.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Handles der bisher erzeugten Features (Slot 1 und 2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectIdSlots {
    first: Option<FeatureId>,
    second: Option<FeatureId>,
}

impl ObjectIdSlots {
    pub fn get(&self, slot: ArrowSlot) -> Option<FeatureId> {
        match slot {
            ArrowSlot::First => self.first,
            ArrowSlot::Second => self.second,
        }
    }

    pub fn set(&mut self, slot: ArrowSlot, id: Option<FeatureId>) {
        match slot {
            ArrowSlot::First => self.first = id,
            ArrowSlot::Second => self.second = id,
        }
    }

    /// Setzt beide Slots auf "kein Feature".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Belegte Slots mit ihrem Handle, in Slot-Reihenfolge.
    pub fn occupied(&self) -> impl Iterator<Item = (ArrowSlot, FeatureId)> + '_ {
        ArrowSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}
