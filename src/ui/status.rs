//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let strings = &state.strings;
    let doc = &state.document;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {} | {}: {}",
                strings.get("status_overlays"),
                state.overlay_count(),
                strings.get("status_layers"),
                state.layer_count()
            ));

            ui.separator();

            let active_layer = doc
                .active_layer
                .and_then(|id| doc.layer(id))
                .map(|layer| layer.name.as_str())
                .unwrap_or(strings.get("status_none"));
            ui.label(format!(
                "{}: {}",
                strings.get("status_active_layer"),
                active_layer
            ));

            ui.separator();

            if let Some(extent) = doc.current_extent {
                ui.label(format!(
                    "{}: ({:.3}, {:.3}) - ({:.3}, {:.3})",
                    strings.get("status_extent"),
                    extent.min.x,
                    extent.min.y,
                    extent.max.x,
                    extent.max.y
                ));
            }

            let selected = state.selection.highlighted().len();
            if selected > 1 {
                ui.separator();
                ui.label(format!("{} ✓", selected));
            }
        });
    });
}
