//! Optionen-Dialog für Klick-Timing, Zeilenmaße und Drag-Schutzzonen.

use crate::app::{AppIntent, AppState};

fn drag_value<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: std::ops::RangeInclusive<N>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new(state.strings.get("options_title"))
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.collapsing("Maus", |ui| {
                changed |= drag_value(
                    ui,
                    "Doppelklick (ms):",
                    &mut opts.double_click_interval_ms,
                    100..=2000,
                    5.0,
                );
            });

            ui.collapsing("Layer-Liste", |ui| {
                changed |= drag_value(ui, "Zeilenhöhe:", &mut opts.row_height_px, 16.0..=64.0, 0.5);
                changed |= drag_value(ui, "Einrückung:", &mut opts.indent_px, 4.0..=48.0, 0.5);
                changed |= drag_value(
                    ui,
                    "Drag-Schutz oben:",
                    &mut opts.drag_leave_guard_top_px,
                    0.0..=16.0,
                    0.1,
                );
                changed |= drag_value(
                    ui,
                    "Drag-Schutz unten:",
                    &mut opts.drag_leave_guard_bottom_px,
                    0.0..=64.0,
                    0.1,
                );
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(state.strings.get("options_reset")).clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button(state.strings.get("dialog_close")).clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}
