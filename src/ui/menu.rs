//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let strings = &state.strings;
    let has_selection = !state.selection.highlighted().is_empty();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button(strings.get("menu_file"), |ui| {
                if ui.button(strings.get("menu_add_overlay")).clicked() {
                    events.push(AppIntent::AddOverlayRequested);
                    ui.close();
                }
                if ui.button(strings.get("menu_import_layers")).clicked() {
                    events.push(AppIntent::ImportLayersRequested {
                        target: state.selection.selected_item,
                    });
                    ui.close();
                }

                ui.separator();

                if ui.button(strings.get("menu_options")).clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button(strings.get("menu_exit")).clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button(strings.get("menu_edit"), |ui| {
                if ui
                    .add_enabled(
                        has_selection,
                        egui::Button::new(strings.get("menu_remove")),
                    )
                    .clicked()
                {
                    events.push(AppIntent::RemoveSelectedRequested);
                    ui.close();
                }
            });

            ui.menu_button(strings.get("menu_view"), |ui| {
                if ui
                    .add_enabled(
                        has_selection,
                        egui::Button::new(strings.get("menu_zoom_to_selection")),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ZoomToSelectionRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
