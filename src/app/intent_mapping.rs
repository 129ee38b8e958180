//! Mapping von ArrowIntent auf ArrowCommand-Sequenzen.

use super::{ArrowCommand, ArrowIntent, ArrowToolState, MenuAction};

/// Übersetzt einen Intent in Commands.
///
/// Intents, die eine laufende Sitzung brauchen, werden ohne Sitzung verworfen.
pub fn map_intent_to_commands(state: &ArrowToolState, intent: ArrowIntent) -> Vec<ArrowCommand> {
    match intent {
        ArrowIntent::ToolActivated { descriptor } => vec![ArrowCommand::ActivateTool { descriptor }],
        ArrowIntent::ToolDeactivated => vec![ArrowCommand::DeactivateTool],
        ArrowIntent::OptionsChanged { options } => vec![ArrowCommand::ApplyOptions { options }],

        ArrowIntent::RequiredScalesProvided { lines } => {
            vec![ArrowCommand::LoadRequiredScales { lines }]
        }
        ArrowIntent::RequiredScalesFileSelected { path } => {
            vec![ArrowCommand::LoadRequiredScalesFile { path }]
        }
        ArrowIntent::RequiredScalesCleared => vec![ArrowCommand::ClearRequiredScales],
        ArrowIntent::HostSelectionChanged { selected_count } => {
            vec![ArrowCommand::SyncLedger { selected_count }]
        }

        intent if state.session.is_none() => {
            log::debug!("Kein aktives Werkzeug, Intent verworfen: {:?}", intent);
            vec![]
        }

        ArrowIntent::AnchorPlaced { point } => vec![ArrowCommand::PlaceAnchor { point }],
        ArrowIntent::StyleChangeConfirmed { style } => vec![ArrowCommand::ChangeStyle { style }],
        ArrowIntent::MapScaleResolved { map_scale } => {
            vec![ArrowCommand::ApplyMapScale { map_scale }]
        }
        ArrowIntent::MenuActionChosen { action } => map_menu_action(state, action),
    }
}

fn map_menu_action(state: &ArrowToolState, action: MenuAction) -> Vec<ArrowCommand> {
    match action {
        MenuAction::Finish => vec![ArrowCommand::FinishShape],
        MenuAction::Cancel => vec![ArrowCommand::CancelShape],
        MenuAction::ChangeStyle { style } => vec![ArrowCommand::RequestStyleChange { style }],
        MenuAction::SelectDimensionVariant { category } => {
            let current_is_dimension = state
                .session
                .as_ref()
                .is_some_and(|s| s.descriptor().category.is_dimension());
            if current_is_dimension && category.is_dimension() {
                vec![ArrowCommand::SelectDimensionVariant { category }]
            } else {
                log::debug!("Bemaßungs-Variante {:?} hier nicht verfügbar", category);
                vec![]
            }
        }
        action => vec![ArrowCommand::ApplyMenuAction { action }],
    }
}

#[cfg(test)]
mod tests;
