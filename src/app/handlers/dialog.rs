//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::state::FileDialogRequest;
use crate::app::use_cases;
use crate::core::tree::StyleTarget;
use crate::core::NodeId;
use crate::shared::EditorOptions;
use crate::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Fordert den Datei-Dialog für den Layer-Import an.
pub fn request_import_dialog(state: &mut AppState, target: Option<NodeId>) {
    state.ui.file_dialog = Some(FileDialogRequest::ImportLayers { target });
}

/// Fordert den Datei-Dialog für eine neue Datenquelle an.
pub fn request_replace_source_dialog(state: &mut AppState, node: NodeId) {
    state.ui.file_dialog = Some(FileDialogRequest::ReplaceSource { node });
}

/// Öffnet den Style-Editor für einen Knoten.
pub fn open_style_editor(state: &mut AppState, node: NodeId, target: StyleTarget) {
    use_cases::style_edit::open_style_editor(state, node, target);
}

/// Schließt den Style-Editor.
pub fn close_style_editor(state: &mut AppState) {
    use_cases::style_edit::close_style_editor(state);
}

/// Schließt die angezeigte Meldung.
pub fn dismiss_message(state: &mut AppState) {
    state.ui.message = None;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.apply_options(options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.apply_options(EditorOptions::default());
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
