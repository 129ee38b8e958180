//! Precondition-System für Kontextmenü-Befehle.
//!
//! Prüfbare Vorbedingungen als Enum (kein dyn Trait).

use crate::core::ArrowStyle;
use crate::shared::RequiredScales;

/// Prüfbare Vorbedingung für einen Kontextmenü-Befehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precondition {
    /// Mindestens so viele Anker gesetzt
    AnchorsAtLeast(usize),
    /// Höchstens so viele Anker gesetzt
    AnchorsAtMost(usize),
    /// Anker-Obergrenze der Form erreicht
    AtAnchorCap,
    /// Menü-Maßstab ist im Projekt erlaubt
    ScaleAllowed(u32),
    /// Einzelpfeil hat diesen Stil
    StyleIs(ArrowStyle),
}

/// Kontext für die Precondition-Auswertung, abgeleitet aus der Sitzung.
pub struct PreconditionContext<'a> {
    pub anchor_count: usize,
    pub anchor_cap: usize,
    pub style: ArrowStyle,
    pub required_scales: Option<&'a RequiredScales>,
}

impl Precondition {
    /// Prüft ob die Vorbedingung im gegebenen Kontext erfüllt ist.
    pub fn is_valid(&self, ctx: &PreconditionContext) -> bool {
        match self {
            Self::AnchorsAtLeast(n) => ctx.anchor_count >= *n,
            Self::AnchorsAtMost(n) => ctx.anchor_count <= *n,
            Self::AtAnchorCap => ctx.anchor_count == ctx.anchor_cap,
            Self::ScaleAllowed(value) => ctx.required_scales.is_none_or(|r| r.contains(*value)),
            Self::StyleIs(style) => ctx.style == *style,
        }
    }
}
