use crate::app::state::FileDialogRequest;
use crate::app::{AppIntent, UiState};
use crate::core::import::{FEATURE_EXTENSIONS, RASTER_EXTENSIONS};

fn layer_file_dialog() -> rfd::FileDialog {
    let mut all: Vec<&str> = FEATURE_EXTENSIONS.to_vec();
    all.extend_from_slice(RASTER_EXTENSIONS);
    rfd::FileDialog::new()
        .add_filter("Layer-Dateien", all.as_slice())
        .add_filter("Vektordaten", FEATURE_EXTENSIONS)
        .add_filter("Rasterdaten", RASTER_EXTENSIONS)
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    match ui_state.file_dialog.take() {
        Some(FileDialogRequest::ImportLayers { target }) => {
            if let Some(paths) = layer_file_dialog().pick_files() {
                events.push(AppIntent::LayerFilesSelected { target, paths });
            }
        }
        Some(FileDialogRequest::ReplaceSource { node }) => {
            if let Some(path) = layer_file_dialog().pick_file() {
                events.push(AppIntent::ReplaceSourceSelected { node, path });
            }
        }
        None => {}
    }

    events
}
