//! Geometrie-Engine: passt Templates, Zickzack und Einzelpfeile an die Anker an.
//!
//! Alle Funktionen sind rein: sie lesen Anker und Parameter und liefern
//! neue Polylinien, ohne Sitzungszustand zu verändern.

mod offset;
mod single;
mod template_fit;
mod zigzag;

pub use offset::signed_offset;
pub use template_fit::fit_template;
pub use zigzag::{build_zigzag, zigzag_template};

use crate::core::{ArrowCategory, ArrowDescriptor, ArrowError, ArrowResult, ArrowSlot, Polyline};
use crate::xml::TemplateStore;
use glam::DVec2;

/// Unterhalb dieser Länge gilt eine Referenzstrecke als entartet.
pub(crate) const DEGENERATE_LENGTH: f64 = 1e-9;

/// Formparameter, die in die Geometrie einfließen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParams {
    pub scale: f64,
    /// Vorzeichenbehafteter Abstand des Offset-Ankers (links positiv)
    pub offset: f64,
    pub zigzag_width: f64,
    pub zigzag_curve: f64,
    pub zigzag_position: f64,
    pub flip_arrows: bool,
    pub switch_arrowheads: bool,
}

/// Ergebnis einer Konstruktion: eine oder zwei Polylinien.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGeometry {
    pub first: Polyline,
    pub second: Option<Polyline>,
}

impl ArrowGeometry {
    pub fn single(first: Polyline) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Polylinie eines Slots, falls vorhanden.
    pub fn get(&self, slot: ArrowSlot) -> Option<&Polyline> {
        match slot {
            ArrowSlot::First => Some(&self.first),
            ArrowSlot::Second => self.second.as_ref(),
        }
    }

    /// Alle vorhandenen Polylinien mit ihrem Slot.
    pub fn slots(&self) -> impl Iterator<Item = (ArrowSlot, &Polyline)> {
        ArrowSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|line| (slot, line)))
    }
}

/// Richtungswinkel von `from` nach `to` (Radiant, `atan2(dy, dx)`).
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Konstruiert die Geometrie für Deskriptor und Anker.
///
/// Template-Kategorien lesen ihr Template bei jedem Aufruf aus dem Store.
pub fn build_arrow_geometry(
    descriptor: &ArrowDescriptor,
    anchors: &[DVec2],
    params: &ArrowParams,
    store: &TemplateStore,
) -> ArrowResult<ArrowGeometry> {
    use crate::core::ArrowStyle;

    match descriptor.category {
        ArrowCategory::SingleArrow => match descriptor.style {
            ArrowStyle::Zigzag => build_zigzag(anchors, params).map(ArrowGeometry::single),
            ArrowStyle::Straight | ArrowStyle::Leader => {
                single::build_single(descriptor.style, anchors, params).map(ArrowGeometry::single)
            }
            other => Err(ArrowError::geometry(format!(
                "Stil {other:?} ist für Einzelpfeile nicht konstruierbar"
            ))),
        },
        category => {
            let template = store.load_template(category, params.flip_arrows)?;
            fit_template(category, &template, anchors, params)
        }
    }
}

/// Prüft die gemeinsame Vorbedingung aller Konstruktionen: zwei verschiedene Anker.
pub(crate) fn reference_pair(anchors: &[DVec2]) -> ArrowResult<(DVec2, DVec2)> {
    let (Some(&a), Some(&b)) = (anchors.first(), anchors.get(1)) else {
        return Err(ArrowError::geometry(format!(
            "Mindestens 2 Anker erforderlich, vorhanden: {}",
            anchors.len()
        )));
    };
    if a.distance(b) < DEGENERATE_LENGTH {
        return Err(ArrowError::geometry(
            "Referenzstrecke hat Länge 0 (Start- und Endanker identisch)",
        ));
    }
    Ok((a, b))
}

#[cfg(test)]
mod tests;
