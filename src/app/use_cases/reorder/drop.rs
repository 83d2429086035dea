//! Use-Case: Drop eines gezogenen Knotens.
//!
//! Vier Fälle in fester Reihenfolge, jeweils mit Spiegelung in die
//! zugehörige Sammlung des Dokuments:
//! 1. Zeichen-Styles desselben Composite-Styles tauschen
//! 2. gleicher Elternknoten (Layer eines Overlays oder Overlays der Karte)
//! 3. Layer in ein anderes LayerOverlay neben einen Ziel-Layer
//! 4. Layer direkt auf einen Overlay-Knoten (an den Anfang)

use super::drag::{drop_case, end_drag, is_drop_allowed, DropCase};
use super::index::{insert_index, reinsert_index};
use super::style_swap::swap_style_items;
use crate::core::tree::ensure_loaded;
use crate::core::{ConcreteObject, LayerTree, NodeId, OverlayKey, OverlayKind};
use crate::AppState;

/// Ergebnis eines Drops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Kein Fall passte; nichts wurde verändert
    Rejected,
    /// Umsortiert unter demselben Elternknoten
    SameParent,
    /// Layer in ein anderes Overlay neben den Ziel-Layer verschoben
    CrossOverlay,
    /// Layer an den Anfang eines Overlays verschoben
    OntoOverlay,
    /// Zwei Zeichen-Styles getauscht
    StyleSwap,
    /// Layer aus Dateien importiert (Anzahl)
    FilesImported(usize),
}

impl DropOutcome {
    /// Gibt `true` zurück, wenn der Drop etwas verändert hat.
    pub fn is_applied(&self) -> bool {
        !matches!(self, DropOutcome::Rejected | DropOutcome::FilesImported(0))
    }
}

/// Legt den gezogenen Knoten auf `target` ab und beendet die Geste.
pub fn drop_dragged(state: &mut AppState, target: Option<NodeId>) -> DropOutcome {
    let Some(dragged) = state.drag.dragged else {
        return DropOutcome::Rejected;
    };
    let lower = state.drag.show_lower_line;

    let outcome = match target {
        Some(target) if is_drop_allowed(&state.tree, dragged, Some(target)) => {
            apply_drop(state, dragged, target, lower)
        }
        _ => DropOutcome::Rejected,
    };

    end_drag(state);
    if outcome.is_applied() {
        state.document.begin_refresh_plugins();
        log::info!("Drop {:?} auf {:?}: {:?}", dragged, target, outcome);
    } else {
        log::debug!("Drop {:?} auf {:?} abgelehnt", dragged, target);
    }
    outcome
}

/// Führt den passenden Drop-Fall aus (ohne Drag-Zustand).
pub fn apply_drop(
    state: &mut AppState,
    dragged: NodeId,
    target: NodeId,
    lower: bool,
) -> DropOutcome {
    match drop_case(&state.tree, dragged, target) {
        Some(DropCase::StyleSwap) => {
            if swap_style_items(state, dragged, target) {
                DropOutcome::StyleSwap
            } else {
                DropOutcome::Rejected
            }
        }
        Some(DropCase::SameParent) => move_within_parent(state, dragged, target, lower),
        Some(DropCase::CrossOverlay) => move_across_overlays(state, dragged, target, lower),
        Some(DropCase::OntoOverlay) => move_onto_overlay(state, dragged, target),
        None => DropOutcome::Rejected,
    }
}

/// Schlüssel des Overlays, falls `node` ein LayerOverlay ist.
fn layer_overlay_key(tree: &LayerTree, node: NodeId) -> Option<OverlayKey> {
    match tree.object(node)? {
        ConcreteObject::Overlay {
            key,
            kind: OverlayKind::Layer,
        } => Some(key.clone()),
        _ => None,
    }
}

fn move_within_parent(
    state: &mut AppState,
    dragged: NodeId,
    target: NodeId,
    lower: bool,
) -> DropOutcome {
    let tree = &state.tree;
    let Some(parent) = tree.parent(dragged) else {
        return DropOutcome::Rejected;
    };
    let (Some(source_index), Some(target_index)) =
        (tree.index_in_parent(dragged), tree.index_in_parent(target))
    else {
        return DropOutcome::Rejected;
    };
    let (Some(parent_object), Some(dragged_object), Some(target_object)) = (
        tree.object(parent).cloned(),
        tree.object(dragged).cloned(),
        tree.object(target).cloned(),
    ) else {
        return DropOutcome::Rejected;
    };

    let doc = &mut state.document;
    match parent_object {
        ConcreteObject::Overlay {
            key,
            kind: OverlayKind::Layer,
        } => {
            let (Some(dragged_id), Some(target_id)) =
                (dragged_object.layer_id(), target_object.layer_id())
            else {
                return DropOutcome::Rejected;
            };
            let Some(overlay) = doc.overlay_mut(&key) else {
                return DropOutcome::Rejected;
            };
            let (Some(from), Some(to)) = (
                overlay.layers.index_of(dragged_id),
                overlay.layers.index_of(target_id),
            ) else {
                return DropOutcome::Rejected;
            };
            overlay
                .layers
                .move_to(dragged_id, reinsert_index(from, to, lower));
            overlay.invalidate();
            doc.refresh([key]);
        }
        ConcreteObject::Map => {
            let (Some(dragged_key), Some(target_key)) =
                (dragged_object.overlay_key(), target_object.overlay_key())
            else {
                return DropOutcome::Rejected;
            };
            let (Some(from), Some(to)) = (
                doc.overlays.get_index_of(dragged_key),
                doc.overlays.get_index_of(target_key),
            ) else {
                return DropOutcome::Rejected;
            };
            doc.overlays.move_index(from, reinsert_index(from, to, lower));
            doc.refresh_all();
        }
        _ => return DropOutcome::Rejected,
    }

    let tree = &mut state.tree;
    tree.detach(dragged);
    tree.attach(
        dragged,
        parent,
        reinsert_index(source_index, target_index, lower),
    );
    DropOutcome::SameParent
}

fn move_across_overlays(
    state: &mut AppState,
    dragged: NodeId,
    target: NodeId,
    lower: bool,
) -> DropOutcome {
    let tree = &state.tree;
    let (Some(old_parent), Some(new_parent)) = (tree.parent(dragged), tree.parent(target)) else {
        return DropOutcome::Rejected;
    };
    let (Some(old_key), Some(new_key)) = (
        layer_overlay_key(tree, old_parent),
        layer_overlay_key(tree, new_parent),
    ) else {
        return DropOutcome::Rejected;
    };
    let (Some(dragged_id), Some(target_id), Some(tree_target_index)) = (
        tree.object(dragged).and_then(ConcreteObject::layer_id),
        tree.object(target).and_then(ConcreteObject::layer_id),
        tree.index_in_parent(target),
    ) else {
        return DropOutcome::Rejected;
    };

    let doc = &mut state.document;
    let Some(collection_target_index) = doc
        .overlay(&new_key)
        .and_then(|overlay| overlay.layers.index_of(target_id))
    else {
        return DropOutcome::Rejected;
    };
    let Some(old_overlay) = doc.overlay_mut(&old_key) else {
        return DropOutcome::Rejected;
    };
    old_overlay.layers.remove(dragged_id);
    old_overlay.invalidate();
    if let Some(new_overlay) = doc.overlay_mut(&new_key) {
        new_overlay
            .layers
            .insert(insert_index(collection_target_index, lower), dragged_id);
        new_overlay.invalidate();
    }
    doc.refresh([old_key, new_key]);

    state.tree.move_node(
        dragged,
        new_parent,
        insert_index(tree_target_index, lower),
    );
    DropOutcome::CrossOverlay
}

fn move_onto_overlay(state: &mut AppState, dragged: NodeId, target: NodeId) -> DropOutcome {
    let tree = &state.tree;
    let Some(dragged_id) = tree.object(dragged).and_then(ConcreteObject::layer_id) else {
        return DropOutcome::Rejected;
    };
    let Some(new_key) = layer_overlay_key(tree, target) else {
        return DropOutcome::Rejected;
    };
    let Some(old_parent) = tree.parent(dragged) else {
        return DropOutcome::Rejected;
    };
    let Some(old_key) = tree
        .object(old_parent)
        .and_then(ConcreteObject::overlay_key)
        .cloned()
    else {
        return DropOutcome::Rejected;
    };
    if state.document.overlay(&old_key).is_none() || state.document.overlay(&new_key).is_none() {
        return DropOutcome::Rejected;
    }

    ensure_loaded(&mut state.tree, &state.document, target);
    let target_had_children = !state.tree.children(target).is_empty();
    let dragged_checked = state.tree.node(dragged).is_some_and(|n| n.is_checked);

    let doc = &mut state.document;
    if let Some(old_overlay) = doc.overlay(&old_key) {
        old_overlay.layers.remove(dragged_id);
    }
    if let Some(new_overlay) = doc.overlay(&new_key) {
        new_overlay.layers.insert(0, dragged_id);
    }
    state.tree.move_node(dragged, target, 0);

    if old_parent != target && state.tree.children(old_parent).is_empty() {
        if let Some(node) = state.tree.node_mut(old_parent) {
            node.is_checked = false;
        }
        if let Some(overlay) = doc.overlay_mut(&old_key) {
            overlay.is_visible = false;
        }
    }
    if !target_had_children {
        if let Some(node) = state.tree.node_mut(target) {
            node.is_checked = dragged_checked;
        }
        if let Some(overlay) = doc.overlay_mut(&new_key) {
            overlay.is_visible = dragged_checked;
        }
    }

    for key in [&old_key, &new_key] {
        if let Some(overlay) = doc.overlay_mut(key) {
            overlay.refresh_cache();
        }
    }
    doc.refresh([old_key, new_key]);
    DropOutcome::OntoOverlay
}
