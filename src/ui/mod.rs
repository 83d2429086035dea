//! UI-Komponenten: Menü, Layer-Liste, Kontextmenü, Dialoge und Status-Bar.

/// UI-Layer mit egui
///
/// Panels und Dialoge lesen den `AppState` und melden Benutzeraktionen als
/// `AppIntent`s zurück; mutiert wird ausschließlich im Controller.
pub mod context_menu;
pub mod dialogs;
mod keyboard;
pub mod layer_panel;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use dialogs::{handle_file_dialogs, show_message, show_style_editor};
pub use layer_panel::render_layer_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;

use crate::app::{AppIntent, AppState};
use keyboard::KeyboardContext;

/// Sammelt die Keyboard-Shortcuts für den aktuellen Zustand.
pub fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let renaming = state.tree.node_ids().any(|id| {
        state
            .tree
            .node(id)
            .is_some_and(|node| node.is_renaming)
    });
    keyboard::collect_keyboard_intents(
        ctx,
        KeyboardContext {
            selected_item: state.selection.selected_item,
            has_selection: !state.selection.highlighted().is_empty(),
            dragging: state.drag.is_active(),
            renaming,
        },
    )
}
