//! Use-Case: Knoten-Selektion per Klick mit Modifier-Tasten.

use crate::app::state::Modifiers;
use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

use super::helpers::{layer_kind, sync_active_objects, sync_highlight};

/// Selektiert einen Knoten gemäß den gedrückten Modifiern.
///
/// - ohne Modifier: nur dieser Knoten
/// - Shift (optional mit Ctrl): Geschwisterbereich ab dem Anker `selected_item`
/// - Ctrl: Knoten in der Mehrfachselektion umschalten
///
/// Knoten ohne Kartenobjekt und die Karten-Wurzel werden ignoriert.
pub fn select_node(state: &mut AppState, node: NodeId, modifiers: Modifiers) {
    match state.tree.object(node) {
        None => {
            log::debug!("Klick auf {:?} ohne Kartenobjekt ignoriert", node);
            return;
        }
        Some(ConcreteObject::Map) => return,
        Some(_) => {}
    }

    if modifiers.shift {
        select_range(state, node, modifiers.ctrl);
    } else if modifiers.ctrl {
        toggle(state, node);
    } else {
        state.selection.selected_items.clear();
        state.selection.selected_item = Some(node);
    }

    sync_highlight(state);
    sync_active_objects(state, node);
}

/// Bereichsselektion zwischen Anker und `node` unter demselben Elternknoten.
fn select_range(state: &mut AppState, node: NodeId, extend: bool) {
    let Some(anchor) = state
        .selection
        .selected_item
        .filter(|id| state.tree.contains(*id))
    else {
        state.selection.selected_items.clear();
        state.selection.selected_item = Some(node);
        return;
    };

    let tree = &state.tree;
    let anchor_kind = layer_kind(tree, anchor);
    let parent = tree.parent(anchor);
    if anchor_kind != layer_kind(tree, node) || parent.is_none() || parent != tree.parent(node) {
        log::debug!(
            "Bereichsselektion {:?}..{:?} abgelehnt (Art oder Elternknoten verschieden)",
            anchor,
            node
        );
        return;
    }

    let (Some(from), Some(to)) = (tree.index_in_parent(anchor), tree.index_in_parent(node)) else {
        return;
    };
    let (low, high) = (from.min(to), from.max(to));
    let range: Vec<NodeId> = parent
        .map(|p| tree.children(p)[low..=high].to_vec())
        .unwrap_or_default();

    let selection = &mut state.selection;
    if extend {
        let tree = &state.tree;
        selection
            .selected_items
            .retain(|id| layer_kind(tree, *id) == anchor_kind);
    } else {
        selection.selected_items.clear();
    }
    selection.selected_items.extend(range);
}

/// Schaltet `node` in der Mehrfachselektion um.
fn toggle(state: &mut AppState, node: NodeId) {
    let selection = &mut state.selection;
    if selection.selected_items.is_empty() {
        if let Some(item) = selection.selected_item {
            selection.selected_items.insert(item);
        }
    }

    if selection.selected_items.shift_remove(&node) {
        selection.selected_item = selection.selected_items.last().copied();
        return;
    }

    let tree = &state.tree;
    let kind = layer_kind(tree, node);
    selection
        .selected_items
        .retain(|id| layer_kind(tree, *id) == kind);
    selection.selected_items.insert(node);
    selection.selected_item = Some(node);
}
