//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion & Klicks ===
            AppCommand::SelectNode { node, modifiers } => {
                handlers::selection::select(state, node, modifiers)
            }
            AppCommand::RegisterClick {
                node,
                modifiers,
                was_selected,
                now,
            } => handlers::selection::register_click(state, node, modifiers, was_selected, now),
            AppCommand::ResolvePendingClick { now } => {
                handlers::selection::resolve_pending_click(state, now)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ToggleExpanded { node } => {
                handlers::selection::toggle_expanded(state, node)
            }

            // === Drag-and-Drop ===
            AppCommand::BeginDrag { node } => handlers::reorder::begin_drag(state, node),
            AppCommand::UpdateDropIndicator { target, pointer_y } => {
                handlers::reorder::update_indicator(state, target, pointer_y)
            }
            AppCommand::ClearDropIndicator { node } => {
                handlers::reorder::clear_indicator(state, node)
            }
            AppCommand::DropDragged { target } => handlers::reorder::drop(state, target),
            AppCommand::EndDrag => handlers::reorder::end(state),
            AppCommand::ImportFiles {
                target,
                lower,
                paths,
            } => handlers::reorder::import_files(state, target, lower, &paths),

            // === Layer-Verwaltung ===
            AppCommand::AddOverlay => handlers::layers::add_overlay(state),
            AppCommand::RequestImportDialog { target } => {
                handlers::dialog::request_import_dialog(state, target)
            }
            AppCommand::RemoveSelected => handlers::layers::remove_selected(state),
            AppCommand::DuplicateLayer { node } => handlers::layers::duplicate(state, node),
            AppCommand::RequestReplaceSourceDialog { node } => {
                handlers::dialog::request_replace_source_dialog(state, node)
            }
            AppCommand::ReplaceLayerSource { node, path } => {
                handlers::layers::replace_source(state, node, &path)
            }
            AppCommand::BeginRename { node } => handlers::layers::begin_rename(state, node),
            AppCommand::CommitRename { node, name } => {
                handlers::layers::commit_rename(state, node, &name)
            }
            AppCommand::CancelRename { node } => handlers::layers::cancel_rename(state, node),
            AppCommand::SetChecked { node, checked } => {
                handlers::layers::set_checked(state, node, checked)
            }
            AppCommand::ZoomToSelection => handlers::layers::zoom_to_selection(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenStyleEditor { node, target } => {
                handlers::dialog::open_style_editor(state, node, target)
            }
            AppCommand::CloseStyleEditor => handlers::dialog::close_style_editor(state),
            AppCommand::DismissMessage => handlers::dialog::dismiss_message(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
