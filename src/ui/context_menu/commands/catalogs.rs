//! Menü-Kataloge pro MenuSet.
//!
//! Definiert welche Commands in welchem Konstruktions-Zustand erscheinen.

use super::preconditions::Precondition;
use super::{MenuCatalog, MenuEntry};
use crate::app::{ConstructionSession, MenuAction};
use crate::core::{ArrowStyle, MenuSet};
use crate::shared::SCALE_LADDER;

/// Toleranz für "aktueller Maßstab entspricht Leiter-Eintrag".
const SCALE_MATCH_EPSILON: f64 = 1e-9;

/// Auswählbare Stile des Einzelpfeil-Werkzeugs.
const SINGLE_ARROW_STYLES: [ArrowStyle; 4] = [
    ArrowStyle::Straight,
    ArrowStyle::Leader,
    ArrowStyle::Zigzag,
    ArrowStyle::RoadTic,
];

impl MenuCatalog {
    /// Katalog passend zum Menü-Set der Sitzung.
    pub fn for_session(session: &ConstructionSession) -> Self {
        match session.profile().menu_set {
            MenuSet::Dimension => Self::for_dimension(session),
            MenuSet::TwoArrow => Self::for_two_arrow(session),
            MenuSet::SingleArrow => Self::for_single_arrow(session),
        }
    }

    /// Bemaßungspfeile: Modi ab drei Ankern, Maßstab, Umschalter.
    pub fn for_dimension(session: &ConstructionSession) -> Self {
        let mut entries = vec![
            MenuEntry::toggle(
                MenuAction::ToggleUpdateEndPoint,
                "Endpunkt ändern",
                session.update_end_point(),
                vec![Precondition::AnchorsAtLeast(3)],
            ),
            MenuEntry::toggle(
                MenuAction::ToggleUpdateOffset,
                "Offset ändern",
                session.update_offset(),
                vec![Precondition::AnchorsAtLeast(3)],
            ),
            MenuEntry::command(
                MenuAction::Finish,
                "Fertigstellen",
                vec![Precondition::AnchorsAtLeast(3)],
            ),
            MenuEntry::Separator,
        ];
        entries.extend(resize_entries(3));
        entries.push(MenuEntry::Separator);
        entries.extend(scale_entries(session));
        entries.push(MenuEntry::Separator);
        entries.extend(common_entries(session));

        MenuCatalog { entries }
    }

    /// Gerader Doppelpfeil und Landhaken: Modi ab zwei Ankern, Spiegeln.
    pub fn for_two_arrow(session: &ConstructionSession) -> Self {
        let mut entries = vec![
            MenuEntry::toggle(
                MenuAction::ToggleUpdateEndPoint,
                "Endpunkt ändern",
                session.update_end_point(),
                vec![Precondition::AnchorsAtLeast(2)],
            ),
            MenuEntry::toggle(
                MenuAction::ToggleUpdateOffset,
                "Offset ändern",
                session.update_offset(),
                vec![Precondition::AnchorsAtLeast(2)],
            ),
            MenuEntry::command(
                MenuAction::Finish,
                "Fertigstellen",
                vec![Precondition::AnchorsAtLeast(2)],
            ),
            MenuEntry::Separator,
        ];
        entries.extend(resize_entries(3));
        entries.push(MenuEntry::toggle(
            MenuAction::ToggleFlip,
            "Spiegeln",
            session.flip_arrows,
            vec![Precondition::AnchorsAtLeast(2)],
        ));
        entries.push(MenuEntry::Separator);
        entries.extend(scale_entries(session));
        entries.push(MenuEntry::Separator);
        entries.extend(common_entries(session));

        MenuCatalog { entries }
    }

    /// Einzelpfeile: Stil-Auswahl, Zickzack-Feineinstellung.
    pub fn for_single_arrow(session: &ConstructionSession) -> Self {
        let current = session.descriptor().style;
        let mut entries = vec![
            MenuEntry::toggle(
                MenuAction::ToggleUpdateEndPoint,
                "Endpunkt ändern",
                session.update_end_point(),
                vec![Precondition::AtAnchorCap],
            ),
            MenuEntry::command(
                MenuAction::Finish,
                "Fertigstellen",
                vec![Precondition::AtAnchorCap],
            ),
            MenuEntry::Separator,
            MenuEntry::Label("Stil".into()),
        ];
        entries.extend(SINGLE_ARROW_STYLES.into_iter().map(|style| {
            MenuEntry::toggle(
                MenuAction::ChangeStyle { style },
                style.display_name(),
                style == current,
                vec![],
            )
        }));

        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Label("Zickzack".into()));
        let zigzag = || {
            vec![
                Precondition::StyleIs(ArrowStyle::Zigzag),
                Precondition::AnchorsAtLeast(2),
            ]
        };
        entries.extend([
            MenuEntry::command(MenuAction::SlideTowardStart, "Richtung Anfang", zigzag()),
            MenuEntry::command(MenuAction::SlideTowardEnd, "Richtung Ende", zigzag()),
            MenuEntry::command(MenuAction::Narrower, "Schmaler", zigzag()),
            MenuEntry::command(MenuAction::Wider, "Breiter", zigzag()),
            MenuEntry::command(MenuAction::CurveLess, "Weniger Bogen", zigzag()),
            MenuEntry::command(MenuAction::CurveMore, "Mehr Bogen", zigzag()),
            MenuEntry::command(MenuAction::ZigzagDefaults, "Standardwerte", zigzag()),
            MenuEntry::toggle(MenuAction::ToggleFlip, "Spiegeln", session.flip_arrows, zigzag()),
        ]);
        entries.push(MenuEntry::Separator);
        entries.extend(common_entries(session));

        MenuCatalog { entries }
    }
}

/// Kürzer/Länger ab zwei Ankern.
fn resize_entries(max_anchors: usize) -> Vec<MenuEntry> {
    let range = || {
        vec![
            Precondition::AnchorsAtLeast(2),
            Precondition::AnchorsAtMost(max_anchors),
        ]
    };
    vec![
        MenuEntry::command(MenuAction::Shorter, "Kürzer", range()),
        MenuEntry::command(MenuAction::Longer, "Länger", range()),
    ]
}

/// Maßstabsleiter; der aktuelle Maßstab ist abgehakt, sobald Anker existieren.
fn scale_entries(session: &ConstructionSession) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::Label("Maßstab".into())];
    entries.extend(
        SCALE_LADDER
            .iter()
            .filter(|step| step.menu_value != 0)
            .map(|step| {
                let current = session.has_anchors()
                    && (session.scale - step.arrow_scale).abs() < SCALE_MATCH_EPSILON;
                MenuEntry::toggle(
                    MenuAction::SetScale {
                        menu_value: step.menu_value,
                    },
                    &step.label(),
                    current,
                    vec![
                        Precondition::AnchorsAtLeast(1),
                        Precondition::ScaleAllowed(step.menu_value),
                    ],
                )
            }),
    );
    entries
}

/// Umschalter und Abbrechen, in allen Menü-Sets gleich.
fn common_entries(session: &ConstructionSession) -> Vec<MenuEntry> {
    vec![
        MenuEntry::toggle(
            MenuAction::ToggleSwitchArrowheads,
            "Pfeilspitzen tauschen",
            session.switch_arrowheads,
            vec![],
        ),
        MenuEntry::toggle(
            MenuAction::ToggleSelectNewArrows,
            "Neue Pfeile selektieren",
            session.select_new_arrows,
            vec![],
        ),
        MenuEntry::Separator,
        MenuEntry::command(
            MenuAction::Cancel,
            "Abbrechen",
            vec![Precondition::AnchorsAtLeast(1)],
        ),
    ]
}
