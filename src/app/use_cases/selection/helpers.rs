//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::core::{ConcreteObject, LayerTree, NodeId};
use crate::AppState;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    sync_highlight(state);
}

/// Überträgt die Selektion auf die `is_selected`-Flags der Baumknoten.
pub fn sync_highlight(state: &mut AppState) {
    let highlighted = state.selection.highlighted();
    state.tree.set_highlighted(&highlighted);
}

/// Layer-Art eines Knotens (None für Knoten ohne Kartenobjekt).
pub(super) fn layer_kind(tree: &LayerTree, id: NodeId) -> Option<bool> {
    tree.object(id).map(ConcreteObject::is_layer)
}

/// Überträgt den zuletzt aktivierten Knoten auf aktives Overlay bzw. aktiven Layer.
///
/// Maßgeblich ist der geklickte Knoten, solange er hervorgehoben ist, sonst
/// der verbleibende Einzelknoten der Selektion.
pub(super) fn sync_active_objects(state: &mut AppState, clicked: NodeId) {
    let source = if state.selection.is_highlighted(clicked) {
        Some(clicked)
    } else {
        state.selection.selected_item
    };
    let Some(object) = source.and_then(|id| state.tree.object(id)) else {
        return;
    };

    match object {
        ConcreteObject::Overlay { key, .. } => {
            log::debug!("Aktives Overlay: {}", key);
            state.document.active_overlay = Some(key.clone());
        }
        ConcreteObject::Layer(layer_id) => {
            log::debug!("Aktiver Layer: {}", layer_id);
            state.document.active_layer = Some(*layer_id);
        }
        _ => {}
    }
}
