//! Einzelne Zeile der Layer-Liste (Aufklapper, Checkbox, Name, Einfügemarke).

use std::time::Instant;

use super::{selection_modifiers, RowHit};
use crate::app::{AppIntent, AppState};
use crate::core::{ConcreteObject, DropIndicator, NodeId, TreeNode};
use crate::ui::context_menu::render_context_menu;

const INDICATOR_STROKE: f32 = 2.0;

/// Rendert `node` und (falls aufgeklappt) seine Kinder.
pub(super) fn render_subtree(
    ui: &mut egui::Ui,
    state: &AppState,
    node: NodeId,
    depth: usize,
    rows: &mut Vec<RowHit>,
    events: &mut Vec<AppIntent>,
) {
    let Some(tree_node) = state.tree.node(node) else {
        return;
    };
    render_row(ui, state, node, tree_node, depth, rows, events);

    // Die Karten-Wurzel ist immer aufgeklappt
    let is_root = node == state.tree.root();
    if tree_node.is_expanded || is_root {
        let child_depth = if is_root { depth } else { depth + 1 };
        for child in tree_node.children() {
            render_subtree(ui, state, *child, child_depth, rows, events);
        }
    }
}

fn render_row(
    ui: &mut egui::Ui,
    state: &AppState,
    node: NodeId,
    tree_node: &TreeNode,
    depth: usize,
    rows: &mut Vec<RowHit>,
    events: &mut Vec<AppIntent>,
) {
    let is_root = node == state.tree.root();
    let row = ui.horizontal(|ui| {
        ui.set_min_height(state.options.row_height_px);
        ui.add_space(depth as f32 * state.options.indent_px);

        if !is_root && tree_node.is_expandable() {
            let arrow = if tree_node.is_expanded { "▼" } else { "▶" };
            if ui.small_button(arrow).clicked() {
                events.push(AppIntent::NodeExpandToggled { node });
            }
        } else {
            ui.add_space(ui.spacing().interact_size.y);
        }

        if has_checkbox(tree_node) {
            let mut checked = tree_node.is_checked;
            if ui.checkbox(&mut checked, "").changed() {
                events.push(AppIntent::CheckToggled { node, checked });
            }
        }

        if tree_node.is_renaming {
            render_rename_field(ui, node, tree_node, events);
        } else {
            render_label(ui, state, node, tree_node, events);
        }
    });

    let rect = row.response.rect;
    paint_drop_indicator(ui, rect, tree_node.drop_indicator);
    rows.push(RowHit { node, rect });
}

fn has_checkbox(tree_node: &TreeNode) -> bool {
    matches!(
        tree_node.object,
        Some(ConcreteObject::Overlay { .. } | ConcreteObject::Layer(_))
    )
}

fn render_label(
    ui: &mut egui::Ui,
    state: &AppState,
    node: NodeId,
    tree_node: &TreeNode,
    events: &mut Vec<AppIntent>,
) {
    let response = ui
        .selectable_label(tree_node.is_selected, tree_node.name.as_str())
        .interact(egui::Sense::click_and_drag());

    if response.clicked() {
        let modifiers = ui.input(|i| selection_modifiers(i.modifiers));
        events.push(AppIntent::NodeClicked {
            node,
            modifiers,
            now: Instant::now(),
        });
    }
    if response.secondary_clicked() && !tree_node.is_selected {
        events.push(AppIntent::NodeContextRequested { node });
    }
    if response.drag_started() {
        events.push(AppIntent::DragStarted { node });
    }
    render_context_menu(&response, state, Some(node), events);
}

fn render_rename_field(
    ui: &mut egui::Ui,
    node: NodeId,
    tree_node: &TreeNode,
    events: &mut Vec<AppIntent>,
) {
    let buffer_id = egui::Id::new(("rename_buffer", node.index()));
    let mut text = ui.data_mut(|d| {
        d.get_temp_mut_or_insert_with(buffer_id, || tree_node.name.clone())
            .clone()
    });

    let response = ui.text_edit_singleline(&mut text);
    if !response.has_focus() && !response.lost_focus() {
        response.request_focus();
    }
    ui.data_mut(|d| d.insert_temp(buffer_id, text.clone()));

    if response.lost_focus() {
        ui.data_mut(|d| d.remove::<String>(buffer_id));
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::RenameCancelled { node });
        } else {
            events.push(AppIntent::RenameCommitted { node, name: text });
        }
    }
}

fn paint_drop_indicator(ui: &egui::Ui, rect: egui::Rect, indicator: DropIndicator) {
    let y = match indicator {
        DropIndicator::None => return,
        DropIndicator::Upper => rect.top(),
        DropIndicator::Lower => rect.bottom(),
    };
    let stroke = egui::Stroke::new(INDICATOR_STROKE, ui.visuals().selection.stroke.color);
    ui.painter().hline(rect.x_range(), y, stroke);
}
