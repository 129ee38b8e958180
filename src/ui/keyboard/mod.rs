//! Tastatur-Shortcuts der Pfeil-Werkzeuge.
//!
//! Mappt Taste + Shift auf `ArrowIntent`s, abhängig vom aktiven Deskriptor.

use crate::app::{ArrowIntent, MenuAction};
use crate::core::{ArrowCategory, ArrowDescriptor, ArrowStyle};
use serde::{Deserialize, Serialize};

/// Tasten, die die Werkzeuge auswerten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKey {
    Space,
    F,
    L,
    M,
    S,
    W,
    /// Ziffer 0–9 (Hauptfeld oder Ziffernblock)
    Digit(u8),
}

/// Liefert den Intent zu einem Tastendruck oder `None`, wenn die Taste hier nichts bewirkt.
pub fn key_intent(
    key: ArrowKey,
    shift: bool,
    descriptor: &ArrowDescriptor,
) -> Option<ArrowIntent> {
    let profile = descriptor.profile();
    let zigzag = descriptor.style == ArrowStyle::Zigzag;

    let action = match (key, shift) {
        (ArrowKey::Space, false) if profile.allows_resize => MenuAction::Shorter,
        (ArrowKey::Space, true) if profile.allows_resize => MenuAction::Longer,
        (ArrowKey::F, true) if profile.allows_flip => MenuAction::ToggleFlip,
        (ArrowKey::L, true) if zigzag => MenuAction::CurveLess,
        (ArrowKey::M, true) if zigzag => MenuAction::CurveMore,
        (ArrowKey::S, true) => MenuAction::ToggleSwitchArrowheads,
        (ArrowKey::W, true) => MenuAction::Finish,
        (ArrowKey::Digit(digit), false) if descriptor.category.is_dimension() => {
            let category = *ArrowCategory::DIMENSION_VARIANTS.get(usize::from(digit))?;
            MenuAction::SelectDimensionVariant { category }
        }
        _ => return None,
    };

    Some(action.to_intent())
}
