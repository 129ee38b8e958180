//! Handler für Menü- und Tastatur-Aktionen auf der laufenden Form.

use super::edit::emit_geometry_or_restore;
use crate::app::{ArrowToolState, MenuAction};
use crate::core::{ArrowCategory, ArrowDescriptor, ArrowResult};
use crate::shared::options::{
    LONGER_FACTOR, SHORTER_FACTOR, ZIGZAG_CURVE_DEFAULT, ZIGZAG_POSITION_DEFAULT,
    ZIGZAG_POSITION_MAX, ZIGZAG_POSITION_MIN, ZIGZAG_POSITION_STEP, ZIGZAG_WIDTH_DEFAULT,
    ZIGZAG_WIDTH_MIN,
};
use crate::shared::scale_step;

/// Wendet eine Parameter- oder Modus-Aktion an.
///
/// Geometrie-wirksame Aktionen ändern bestehende Features ab zwei Ankern.
pub fn apply_menu_action(state: &mut ArrowToolState, action: MenuAction) -> ArrowResult<()> {
    let Some(session) = state.session.as_mut() else {
        return Ok(());
    };
    let before = session.clone();

    match action {
        MenuAction::Shorter => session.scale *= SHORTER_FACTOR,
        MenuAction::Longer => session.scale *= LONGER_FACTOR,
        MenuAction::SetScale { menu_value } => match scale_step(menu_value) {
            Some(step) if step.arrow_scale > 0.0 => session.scale = step.arrow_scale,
            _ => {
                log::warn!("Menü-Maßstab {} nicht in der Maßstabsleiter", menu_value);
                return Ok(());
            }
        },
        MenuAction::Narrower => {
            session.zigzag_width = (session.zigzag_width - 1.0).max(ZIGZAG_WIDTH_MIN);
        }
        MenuAction::Wider => session.zigzag_width += 1.0,
        MenuAction::SlideTowardStart => {
            session.zigzag_position =
                (session.zigzag_position - ZIGZAG_POSITION_STEP).max(ZIGZAG_POSITION_MIN);
        }
        MenuAction::SlideTowardEnd => {
            session.zigzag_position =
                (session.zigzag_position + ZIGZAG_POSITION_STEP).min(ZIGZAG_POSITION_MAX);
        }
        MenuAction::CurveLess => session.zigzag_curve -= 1.0,
        MenuAction::CurveMore => session.zigzag_curve += 1.0,
        MenuAction::ZigzagDefaults => {
            session.zigzag_width = ZIGZAG_WIDTH_DEFAULT;
            session.zigzag_curve = ZIGZAG_CURVE_DEFAULT;
            session.zigzag_position = ZIGZAG_POSITION_DEFAULT;
        }
        MenuAction::ToggleFlip => session.flip_arrows = !session.flip_arrows,
        MenuAction::ToggleSwitchArrowheads => {
            session.switch_arrowheads = !session.switch_arrowheads;
        }
        MenuAction::ToggleSelectNewArrows => {
            session.select_new_arrows = !session.select_new_arrows;
        }
        MenuAction::ToggleUpdateEndPoint => session.toggle_update_end_point(),
        MenuAction::ToggleUpdateOffset => session.toggle_update_offset(),
        MenuAction::SelectDimensionVariant { category } => {
            return select_dimension_variant(state, category);
        }
        MenuAction::ChangeStyle { .. } | MenuAction::Finish | MenuAction::Cancel => {
            log::debug!("{:?} wird über eigene Commands verarbeitet", action);
            return Ok(());
        }
    }

    if action.affects_geometry() && session.has_geometry() {
        emit_geometry_or_restore(state, before)?;
    }
    Ok(())
}

/// Wechselt die Bemaßungs-Variante und ändert die bestehende Geometrie.
pub fn select_dimension_variant(
    state: &mut ArrowToolState,
    category: ArrowCategory,
) -> ArrowResult<()> {
    let Some(session) = state.session.as_mut() else {
        return Ok(());
    };
    if !category.is_dimension() || !session.descriptor().category.is_dimension() {
        log::debug!("Bemaßungs-Variante {:?} nicht anwendbar", category);
        return Ok(());
    }

    let before = session.clone();
    session.replace_descriptor(ArrowDescriptor::template(category));
    log::info!("Bemaßungs-Variante gewechselt: {:?}", category);

    if session.has_geometry() {
        emit_geometry_or_restore(state, before)?;
    }
    Ok(())
}
