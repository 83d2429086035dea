//! Use-Case: Layer duplizieren.

use crate::app::state::Modifiers;
use crate::app::use_cases::selection::select_node;
use crate::core::tree::layer_node;
use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

/// Kopiert den Layer hinter `node` und selektiert die Kopie.
pub fn duplicate_layer(state: &mut AppState, node: NodeId) -> Option<NodeId> {
    let layer_id = state.tree.object(node).and_then(ConcreteObject::layer_id)?;
    let parent = state.tree.parent(node)?;
    let index = state.tree.index_in_parent(node)?;

    let copy_id = state.document.duplicate_layer(layer_id)?;
    let copy = layer_node(&state.document, copy_id)?;
    let copy_node = state.tree.insert_child(parent, index + 1, copy)?;

    if let Some(key) = state.document.overlay_of_layer(copy_id) {
        state.document.refresh([key]);
    }
    state.document.begin_refresh_plugins();
    select_node(state, copy_node, Modifiers::NONE);
    log::info!("Layer {} dupliziert als {}", layer_id, copy_id);
    Some(copy_node)
}
