//! Use-Case: Datenquelle eines Layers ersetzen.

use std::path::Path;

use crate::core::{replace_layer_source, ConcreteObject, NodeId};
use crate::AppState;

/// Ersetzt die Datei hinter dem Layer; Position und Styles bleiben erhalten.
///
/// Passt die Datei nicht zur Layer-Art, wird eine Meldung angezeigt.
pub fn replace_source(state: &mut AppState, node: NodeId, path: &Path) -> bool {
    let Some(layer_id) = state.tree.object(node).and_then(ConcreteObject::layer_id) else {
        return false;
    };

    if !replace_layer_source(&mut state.document, layer_id, path) {
        state.ui.message = Some(state.strings.get("msg_replace_source_failed").to_owned());
        return false;
    }

    if let Some(name) = state.document.layer(layer_id).map(|layer| layer.name.clone()) {
        if let Some(tree_node) = state.tree.node_mut(node) {
            tree_node.name = name;
        }
    }
    if let Some(key) = state.document.overlay_of_layer(layer_id) {
        if let Some(overlay) = state.document.overlay_mut(&key) {
            overlay.invalidate();
        }
        state.document.refresh([key]);
    }
    state.document.begin_refresh_plugins();
    log::info!("Datenquelle von Layer {} ersetzt: {}", layer_id, path.display());
    true
}
