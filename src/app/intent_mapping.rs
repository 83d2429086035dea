//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, Modifiers};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NodeClicked {
            node,
            modifiers,
            now,
        } => {
            // Nur ein bereits allein selektierter Knoten kann per Einzelklick umbenannt werden
            let was_selected = state.selection.selected_item == Some(node)
                && state.selection.selected_items.len() <= 1;
            vec![
                AppCommand::SelectNode { node, modifiers },
                AppCommand::RegisterClick {
                    node,
                    modifiers,
                    was_selected,
                    now,
                },
            ]
        }
        AppIntent::EmptySpaceClicked => vec![AppCommand::ClearSelection],
        AppIntent::ClickTimerTick { now } => {
            if state.clicks.is_idle() {
                vec![]
            } else {
                vec![AppCommand::ResolvePendingClick { now }]
            }
        }
        AppIntent::NodeExpandToggled { node } => vec![AppCommand::ToggleExpanded { node }],
        AppIntent::NodeContextRequested { node } => {
            if state.selection.is_highlighted(node) {
                vec![]
            } else {
                vec![AppCommand::SelectNode {
                    node,
                    modifiers: Modifiers::NONE,
                }]
            }
        }

        AppIntent::DragStarted { node } => vec![AppCommand::BeginDrag { node }],
        AppIntent::DragOver { target, pointer_y } => {
            if state.drag.is_active() {
                vec![AppCommand::UpdateDropIndicator { target, pointer_y }]
            } else {
                vec![]
            }
        }
        AppIntent::DragLeft { node } => vec![AppCommand::ClearDropIndicator { node }],
        AppIntent::DropRequested { target } => {
            if state.drag.is_active() {
                vec![AppCommand::DropDragged { target }]
            } else {
                vec![AppCommand::EndDrag]
            }
        }
        AppIntent::DragCancelled => vec![AppCommand::EndDrag],
        AppIntent::FilesDropped {
            target,
            pointer_y,
            paths,
        } => {
            if paths.is_empty() {
                return vec![];
            }
            let lower = pointer_y > state.options.row_height_px / 2.0;
            vec![AppCommand::ImportFiles {
                target,
                lower,
                paths,
            }]
        }

        AppIntent::AddOverlayRequested => vec![AppCommand::AddOverlay],
        AppIntent::ImportLayersRequested { target } => {
            vec![AppCommand::RequestImportDialog { target }]
        }
        AppIntent::LayerFilesSelected { target, paths } => vec![AppCommand::ImportFiles {
            target,
            lower: false,
            paths,
        }],
        AppIntent::RemoveSelectedRequested => vec![AppCommand::RemoveSelected],
        AppIntent::DuplicateLayerRequested { node } => vec![AppCommand::DuplicateLayer { node }],
        AppIntent::ReplaceLayerSourceRequested { node } => {
            vec![AppCommand::RequestReplaceSourceDialog { node }]
        }
        AppIntent::ReplaceSourceSelected { node, path } => {
            vec![AppCommand::ReplaceLayerSource { node, path }]
        }
        AppIntent::RenameRequested { node } => vec![AppCommand::BeginRename { node }],
        AppIntent::RenameCommitted { node, name } => vec![AppCommand::CommitRename { node, name }],
        AppIntent::RenameCancelled { node } => vec![AppCommand::CancelRename { node }],
        AppIntent::CheckToggled { node, checked } => {
            vec![AppCommand::SetChecked { node, checked }]
        }
        AppIntent::ZoomToSelectionRequested => vec![AppCommand::ZoomToSelection],
        AppIntent::EditStyleRequested { node, target } => {
            vec![AppCommand::OpenStyleEditor { node, target }]
        }

        AppIntent::StyleEditorClosed => vec![AppCommand::CloseStyleEditor],
        AppIntent::MessageDismissed => vec![AppCommand::DismissMessage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
