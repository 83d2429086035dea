use crate::app::{AppIntent, AppState};

/// Zeigt eine anstehende Meldung als modales Fenster.
pub fn show_message(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = state.ui.message.as_deref() else {
        return events;
    };

    egui::Window::new(state.strings.get("msg_title"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);
                if ui.button(state.strings.get("dialog_ok")).clicked() {
                    events.push(AppIntent::MessageDismissed);
                }
            });
        });

    events
}
