//! Controller für die zentrale Event-Verarbeitung der Pfeil-Werkzeuge.

use super::{ArrowCommand, ArrowIntent, ArrowToolState};
use crate::core::ArrowResult;

/// Orchestriert Intents und Handler auf dem `ArrowToolState`.
///
/// Synchron und zustandslos: Host-Wirkungen landen als `HostRequest`s in der
/// Outbox des Zustands.
#[derive(Debug, Default)]
pub struct ArrowController;

impl ArrowController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut ArrowToolState,
        intent: ArrowIntent,
    ) -> ArrowResult<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ArrowToolState,
        command: ArrowCommand,
    ) -> ArrowResult<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Lebenszyklus ===
            ArrowCommand::ActivateTool { descriptor } => {
                handlers::lifecycle::activate_tool(state, descriptor)
            }
            ArrowCommand::DeactivateTool => handlers::lifecycle::deactivate_tool(state),
            ArrowCommand::FinishShape => handlers::lifecycle::finish_shape(state),
            ArrowCommand::CancelShape => handlers::lifecycle::cancel_shape(state),
            ArrowCommand::RequestStyleChange { style } => {
                handlers::lifecycle::request_style_change(state, style)?
            }
            ArrowCommand::ChangeStyle { style } => handlers::lifecycle::change_style(state, style),
            ArrowCommand::ApplyOptions { options } => {
                handlers::lifecycle::apply_options(state, options)
            }

            // === Anker & Parameter ===
            ArrowCommand::PlaceAnchor { point } => handlers::anchor::place_anchor(state, point)?,
            ArrowCommand::ApplyMenuAction { action } => {
                handlers::menu::apply_menu_action(state, action)?
            }
            ArrowCommand::SelectDimensionVariant { category } => {
                handlers::menu::select_dimension_variant(state, category)?
            }
            ArrowCommand::ApplyMapScale { map_scale } => {
                handlers::scales::apply_map_scale(state, map_scale)
            }

            // === Maßstäbe & Selektion ===
            ArrowCommand::LoadRequiredScales { lines } => {
                handlers::scales::load_required_scales(state, &lines)?
            }
            ArrowCommand::LoadRequiredScalesFile { path } => {
                handlers::scales::load_required_scales_file(state, &path)?
            }
            ArrowCommand::ClearRequiredScales => handlers::scales::clear_required_scales(state),
            ArrowCommand::SyncLedger { selected_count } => {
                handlers::selection::sync_ledger(state, selected_count)
            }
        }

        Ok(())
    }
}
