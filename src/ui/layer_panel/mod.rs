//! Layer-Liste als linkes Seitenpanel.
//!
//! Zeilen werden rekursiv gerendert; Drag-and-Drop und Datei-Drops werden
//! nach dem Rendern anhand der gesammelten Zeilen-Rechtecke ausgewertet.

mod row;

use std::path::PathBuf;
use std::time::Instant;

use crate::app::{AppIntent, AppState, Modifiers};
use crate::core::NodeId;
use crate::ui::context_menu::render_context_menu;

/// Zeilen-Rechteck eines gerenderten Knotens
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowHit {
    pub node: NodeId,
    pub rect: egui::Rect,
}

/// Übersetzt die egui-Modifier in Selektions-Modifier (Cmd zählt auf macOS als Ctrl).
pub(crate) fn selection_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.command,
    }
}

/// Zeile unter dem Zeiger und Abstand des Zeigers von ihrer Oberkante.
pub(crate) fn row_under_pointer(rows: &[RowHit], pointer: egui::Pos2) -> Option<(NodeId, f32)> {
    rows.iter()
        .find(|row| row.rect.contains(pointer))
        .map(|row| (row.node, pointer.y - row.rect.top()))
}

/// Rendert die Layer-Liste und gibt erzeugte Events zurück.
pub fn render_layer_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut rows: Vec<RowHit> = Vec::new();

    egui::SidePanel::left("layer_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading(state.strings.get("layer_list_title"));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                let root = state.tree.root();
                row::render_subtree(ui, state, root, 0, &mut rows, &mut events);

                let remaining = ui.available_height().max(state.options.row_height_px);
                let (_, response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), remaining),
                    egui::Sense::click(),
                );
                if response.clicked() {
                    events.push(AppIntent::EmptySpaceClicked);
                }
                render_context_menu(&response, state, None, &mut events);
            });
        });

    collect_drag_events(ctx, state, &rows, &mut events);
    collect_file_drops(ctx, &rows, &mut events);
    events.push(AppIntent::ClickTimerTick {
        now: Instant::now(),
    });

    events
}

fn collect_drag_events(
    ctx: &egui::Context,
    state: &AppState,
    rows: &[RowHit],
    events: &mut Vec<AppIntent>,
) {
    if !state.drag.is_active() {
        return;
    }
    let (pointer, released) =
        ctx.input(|i| (i.pointer.interact_pos(), i.pointer.any_released()));
    let hovered = pointer.and_then(|pos| row_under_pointer(rows, pos));

    if let Some(previous) = state.drag.indicator_target {
        if hovered.map(|(node, _)| node) != Some(previous) {
            events.push(AppIntent::DragLeft { node: previous });
        }
    }

    if released {
        events.push(AppIntent::DropRequested {
            target: hovered.map(|(node, _)| node),
        });
        return;
    }

    let (target, pointer_y) = match hovered {
        Some((node, y)) => (Some(node), y),
        None => (None, 0.0),
    };
    events.push(AppIntent::DragOver { target, pointer_y });
}

fn collect_file_drops(ctx: &egui::Context, rows: &[RowHit], events: &mut Vec<AppIntent>) {
    let (dropped, pointer) = ctx.input(|i| {
        let paths: Vec<PathBuf> = i
            .raw
            .dropped_files
            .iter()
            .filter_map(|file| file.path.clone())
            .collect();
        (paths, i.pointer.hover_pos())
    });
    if dropped.is_empty() {
        return;
    }

    let hovered = pointer.and_then(|pos| row_under_pointer(rows, pos));
    let (target, pointer_y) = match hovered {
        Some((node, y)) => (Some(node), y),
        None => (None, 0.0),
    };
    log::info!("{} Dateien auf die Layer-Liste gezogen", dropped.len());
    events.push(AppIntent::FilesDropped {
        target,
        pointer_y,
        paths: dropped,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::build_tree;
    use crate::core::MapDocument;

    #[test]
    fn row_hit_reports_offset_from_row_top() {
        let tree = build_tree(&MapDocument::new("Karte"));
        let rows = [RowHit {
            node: tree.root(),
            rect: egui::Rect::from_min_size(egui::pos2(0.0, 100.0), egui::vec2(200.0, 36.0)),
        }];

        assert_eq!(
            row_under_pointer(&rows, egui::pos2(10.0, 130.0)),
            Some((tree.root(), 30.0))
        );
        assert_eq!(row_under_pointer(&rows, egui::pos2(10.0, 140.0)), None);
    }

    #[test]
    fn command_key_counts_as_ctrl() {
        let modifiers = selection_modifiers(egui::Modifiers::COMMAND);
        assert_eq!(modifiers, Modifiers::CTRL);
    }
}
