use crate::app::{ArrowCommand, ArrowIntent, ArrowToolState, ConstructionSession, MenuAction};
use crate::core::{ArrowCategory, ArrowDescriptor, ArrowStyle};
use glam::DVec2;

use super::map_intent_to_commands;

fn state_with(descriptor: ArrowDescriptor) -> ArrowToolState {
    let mut state = ArrowToolState::default();
    state.session = Some(ConstructionSession::new(descriptor, &state.options));
    state
}

#[test]
fn anchor_without_session_maps_to_nothing() {
    let state = ArrowToolState::default();

    let commands = map_intent_to_commands(
        &state,
        ArrowIntent::AnchorPlaced {
            point: DVec2::new(1.0, 2.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn tool_activated_maps_to_activate_tool() {
    let state = ArrowToolState::default();
    let descriptor = ArrowDescriptor::template(ArrowCategory::LandHook);

    let commands = map_intent_to_commands(&state, ArrowIntent::ToolActivated { descriptor });

    assert_eq!(commands, vec![ArrowCommand::ActivateTool { descriptor }]);
}

#[test]
fn finish_and_cancel_map_to_shape_commands() {
    let state = state_with(ArrowDescriptor::template(ArrowCategory::Straight));

    let finish = map_intent_to_commands(
        &state,
        ArrowIntent::MenuActionChosen {
            action: MenuAction::Finish,
        },
    );
    let cancel = map_intent_to_commands(
        &state,
        ArrowIntent::MenuActionChosen {
            action: MenuAction::Cancel,
        },
    );

    assert_eq!(finish, vec![ArrowCommand::FinishShape]);
    assert_eq!(cancel, vec![ArrowCommand::CancelShape]);
}

#[test]
fn style_change_maps_to_request_not_direct_change() {
    let state = state_with(ArrowDescriptor::single(ArrowStyle::Straight));

    let commands = map_intent_to_commands(
        &state,
        ArrowIntent::MenuActionChosen {
            action: MenuAction::ChangeStyle {
                style: ArrowStyle::Zigzag,
            },
        },
    );

    assert!(matches!(
        commands[0],
        ArrowCommand::RequestStyleChange {
            style: ArrowStyle::Zigzag
        }
    ));
}

#[test]
fn dimension_variant_only_for_dimension_sessions() {
    let action = MenuAction::SelectDimensionVariant {
        category: ArrowCategory::ThreeDashes,
    };

    let dimension = state_with(ArrowDescriptor::template(ArrowCategory::OneDash));
    let commands = map_intent_to_commands(&dimension, ArrowIntent::MenuActionChosen { action });
    assert_eq!(
        commands,
        vec![ArrowCommand::SelectDimensionVariant {
            category: ArrowCategory::ThreeDashes
        }]
    );

    let land_hook = state_with(ArrowDescriptor::template(ArrowCategory::LandHook));
    let commands = map_intent_to_commands(&land_hook, ArrowIntent::MenuActionChosen { action });
    assert!(commands.is_empty());
}

#[test]
fn selection_change_maps_without_session() {
    let state = ArrowToolState::default();

    let commands =
        map_intent_to_commands(&state, ArrowIntent::HostSelectionChanged { selected_count: 0 });

    assert_eq!(commands, vec![ArrowCommand::SyncLedger { selected_count: 0 }]);
}
