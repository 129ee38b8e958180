//! Pfeil-Deskriptor: Kategorie, Stil und die daraus abgeleitete Konstruktions-Tabelle.

use serde::{Deserialize, Serialize};

/// Pfeil-Kategorie (bestimmt Template und Anker-Verhalten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowCategory {
    /// Gerader Doppelpfeil
    Straight,
    /// Landhaken-Symbol
    LandHook,
    /// Bemaßungspfeil ohne Querstriche
    NoDashes,
    /// Bemaßungspfeil mit einem Querstrich
    OneDash,
    /// Bemaßungspfeil mit zwei Querstrichen
    TwoDashes,
    /// Bemaßungspfeil mit drei Querstrichen
    ThreeDashes,
    /// Bemaßungspfeil mit vier Querstrichen
    FourDashes,
    /// Einzelpfeil (Stil bestimmt die Geometrie)
    SingleArrow,
    /// Straßen-Tic (nur eine Polylinie)
    RoadTic,
}

impl ArrowCategory {
    /// Alle Bemaßungs-Varianten in Reihenfolge der Ziffern-Shortcuts 0–4.
    pub const DIMENSION_VARIANTS: [ArrowCategory; 5] = [
        ArrowCategory::NoDashes,
        ArrowCategory::OneDash,
        ArrowCategory::TwoDashes,
        ArrowCategory::ThreeDashes,
        ArrowCategory::FourDashes,
    ];

    /// `true` für die fünf Bemaßungs-Kategorien.
    pub fn is_dimension(self) -> bool {
        Self::DIMENSION_VARIANTS.contains(&self)
    }

    /// Name des Template-Elements in der XML-Bibliothek.
    ///
    /// `None` für Kategorien ohne Datei-Template (Einzelpfeile).
    pub fn template_name(self, flipped: bool) -> Option<&'static str> {
        match self {
            Self::Straight => Some("straight"),
            Self::LandHook if flipped => Some("landHookFlipped"),
            Self::LandHook => Some("landHook"),
            Self::NoDashes => Some("curved0"),
            Self::OneDash => Some("curved1"),
            Self::TwoDashes => Some("curved2"),
            Self::ThreeDashes => Some("curved3"),
            Self::FourDashes => Some("curved4"),
            Self::RoadTic => Some("roadTic"),
            Self::SingleArrow => None,
        }
    }
}

/// Zeichenstil eines Pfeils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArrowStyle {
    /// Gerade Linie zwischen den Ankern
    Straight,
    /// Führungslinie mit optionalem Knick (3. Anker)
    Leader,
    /// Zickzack mit Bézier-Übergang
    Zigzag,
    /// Straßen-Tic
    RoadTic,
    /// Kein Stil (Template-Kategorien)
    #[default]
    NotSet,
}

impl ArrowStyle {
    /// Anzeigename für Menüs und Logs.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Straight => "Gerade",
            Self::Leader => "Führungslinie",
            Self::Zigzag => "Zickzack",
            Self::RoadTic => "Straßen-Tic",
            Self::NotSet => "—",
        }
    }
}

/// Offset-Verfeinerung über einen dritten Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetRefinement {
    /// Kein Offset-Anker
    None,
    /// Nur wenn der Bediener den Offset-Modus einschaltet
    OnRequest,
    /// Offset-Modus wird beim zweiten Anker automatisch aktiviert
    Automatic,
}

/// Kontextmenü-Variante einer Kategorie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSet {
    /// Bemaßungspfeile (Offset, Maßstab)
    Dimension,
    /// Gerader Doppelpfeil und Landhaken
    TwoArrow,
    /// Einzelpfeile mit Stil-Auswahl
    SingleArrow,
}

/// Konstruktions-Tabelle pro Kategorie/Stil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Anker bis zur ersten Geometrie
    pub base_anchors: usize,
    pub offset_refinement: OffsetRefinement,
    /// Dritter Anker als Knickpunkt (Führungslinie)
    pub leader_bend: bool,
    /// Zweite, gespiegelte Polylinie am Endanker
    pub two_polylines: bool,
    pub allows_flip: bool,
    /// Kürzer/Länger per Tastatur
    pub allows_resize: bool,
    pub menu_set: MenuSet,
}

impl CategoryProfile {
    /// Maximale Ankerzahl; im Offset-Modus kommt der Offset-Anker hinzu.
    pub fn max_anchors(&self, offset_mode: bool) -> usize {
        let offset_anchor = match self.offset_refinement {
            OffsetRefinement::None => false,
            OffsetRefinement::OnRequest => offset_mode,
            OffsetRefinement::Automatic => true,
        };
        if offset_anchor || self.leader_bend {
            self.base_anchors + 1
        } else {
            self.base_anchors
        }
    }

    /// `true` wenn die Kategorie einen Offset-Anker kennt.
    pub fn supports_offset(&self) -> bool {
        self.offset_refinement != OffsetRefinement::None
    }
}

/// Unveränderlicher Deskriptor des aktuell konstruierten Pfeils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrowDescriptor {
    pub category: ArrowCategory,
    pub style: ArrowStyle,
}

impl ArrowDescriptor {
    /// Template-Kategorie ohne Stil.
    pub fn template(category: ArrowCategory) -> Self {
        if category == ArrowCategory::SingleArrow {
            return Self::single(ArrowStyle::Straight);
        }
        Self {
            category,
            style: ArrowStyle::NotSet,
        }
    }

    /// Einzelpfeil mit Stil. `RoadTic` führt auf die Road-Tic-Kategorie.
    pub fn single(style: ArrowStyle) -> Self {
        match style {
            ArrowStyle::RoadTic => Self {
                category: ArrowCategory::RoadTic,
                style: ArrowStyle::RoadTic,
            },
            ArrowStyle::NotSet => Self {
                category: ArrowCategory::SingleArrow,
                style: ArrowStyle::Straight,
            },
            style => Self {
                category: ArrowCategory::SingleArrow,
                style,
            },
        }
    }

    /// `true` für Pfeile, die aus der Template-Bibliothek entstehen.
    pub fn is_template_based(&self) -> bool {
        self.category.template_name(false).is_some()
    }

    /// Konstruktions-Tabelle für diesen Deskriptor.
    pub fn profile(&self) -> CategoryProfile {
        use ArrowCategory as C;
        match self.category {
            C::Straight | C::LandHook => CategoryProfile {
                base_anchors: 2,
                offset_refinement: OffsetRefinement::OnRequest,
                leader_bend: false,
                two_polylines: true,
                allows_flip: true,
                allows_resize: true,
                menu_set: MenuSet::TwoArrow,
            },
            C::NoDashes | C::OneDash | C::TwoDashes | C::ThreeDashes | C::FourDashes => {
                CategoryProfile {
                    base_anchors: 2,
                    offset_refinement: OffsetRefinement::Automatic,
                    leader_bend: false,
                    two_polylines: true,
                    allows_flip: false,
                    allows_resize: true,
                    menu_set: MenuSet::Dimension,
                }
            }
            C::RoadTic => CategoryProfile {
                base_anchors: 2,
                offset_refinement: OffsetRefinement::None,
                leader_bend: false,
                two_polylines: false,
                allows_flip: false,
                allows_resize: false,
                menu_set: MenuSet::SingleArrow,
            },
            C::SingleArrow => CategoryProfile {
                base_anchors: 2,
                offset_refinement: OffsetRefinement::None,
                leader_bend: self.style == ArrowStyle::Leader,
                two_polylines: false,
                allows_flip: self.style == ArrowStyle::Zigzag,
                allows_resize: false,
                menu_set: MenuSet::SingleArrow,
            },
        }
    }
}
