//! Style-Editor-Fenster (Eigenschaften des gewählten Zeichen-Styles).

use crate::app::{AppIntent, AppState};
use crate::core::tree::StyleTarget;

/// Zeigt den Style-Editor, falls einer angefordert ist.
pub fn show_style_editor(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(request) = state.ui.style_editor.as_ref() else {
        return events;
    };
    let title_key = match request.target {
        StyleTarget::Drawing => "style_editor_title",
        StyleTarget::Text => "text_style_editor_title",
    };
    let layer_name = state
        .document
        .layer(request.layer_id)
        .map(|layer| layer.name.as_str())
        .unwrap_or_default();

    egui::Window::new(state.strings.get(title_key))
        .collapsible(false)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(format!("Layer: {}", layer_name));
            if let Some(style) = state.document.style(request.style_id) {
                egui::Grid::new("style_editor_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Name:");
                        ui.label(style.name.as_str());
                        ui.end_row();
                        ui.label("Art:");
                        ui.label(format!("{:?}", style.kind));
                        ui.end_row();
                    });
            }
            ui.add_space(8.0);
            if ui.button(state.strings.get("dialog_close")).clicked() {
                events.push(AppIntent::StyleEditorClosed);
            }
        });

    events
}
