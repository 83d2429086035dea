//! Gemeinsame Test-Fixtures für die Use-Case-Tests.

use crate::core::tree::{ensure_loaded, ensure_loaded_recursive};
use crate::core::{
    ConcreteObject, Layer, LayerSource, MapDocument, NodeId, OverlayKey, OverlayKind,
};
use crate::AppState;

/// Zustand mit einem Overlay "main" und seinen Layer-Knoten
pub(crate) struct Fixture {
    pub state: AppState,
    pub overlay: NodeId,
    pub layers: Vec<NodeId>,
}

/// Dokument mit den gegebenen Overlays (Schlüssel, Art, Layer-Namen).
pub(crate) fn document_with(overlays: &[(&str, OverlayKind, &[&str])]) -> MapDocument {
    let mut doc = MapDocument::new("Testkarte");
    for (key, kind, layer_names) in overlays {
        let key = OverlayKey::new(*key);
        doc.add_overlay(key.clone(), key.as_str(), *kind);
        for name in *layer_names {
            let id = doc.new_layer_id();
            doc.add_layer_to_overlay(&key, Layer::feature(id, *name, LayerSource::InMemory));
        }
    }
    doc
}

/// App-State mit vollständig geladenen Overlay-Knoten.
pub(crate) fn loaded_state(doc: MapDocument) -> AppState {
    let mut state = AppState::with_document(doc);
    let overlays: Vec<NodeId> = state.tree.children(state.tree.root()).to_vec();
    for overlay in overlays {
        ensure_loaded(&mut state.tree, &state.document, overlay);
    }
    state
}

/// Ein Overlay "main" (LayerOverlay) mit den gegebenen Layern.
pub(crate) fn layer_fixture(names: &[&str]) -> Fixture {
    let state = loaded_state(document_with(&[("main", OverlayKind::Layer, names)]));
    let overlay = overlay_node(&state, "main");
    let layers = state.tree.children(overlay).to_vec();
    Fixture {
        state,
        overlay,
        layers,
    }
}

/// Knoten des Overlays mit diesem Schlüssel.
pub(crate) fn overlay_node(state: &AppState, key: &str) -> NodeId {
    let key = OverlayKey::new(key);
    state
        .tree
        .children(state.tree.root())
        .iter()
        .copied()
        .find(|id| {
            state
                .tree
                .object(*id)
                .and_then(ConcreteObject::overlay_key)
                == Some(&key)
        })
        .expect("Overlay-Knoten existiert")
}

/// Layer-Namen in der Reihenfolge der Layer-Sammlung des Overlays.
pub(crate) fn collection_names(state: &AppState, key: &str) -> Vec<String> {
    state
        .document
        .overlay(&OverlayKey::new(key))
        .expect("Overlay existiert")
        .layers
        .snapshot()
        .into_iter()
        .filter_map(|id| state.document.layer(id).map(|layer| layer.name.clone()))
        .collect()
}

/// Namen der Kinder eines Knotens in Anzeigereihenfolge.
pub(crate) fn child_names(state: &AppState, node: NodeId) -> Vec<String> {
    state
        .tree
        .children(node)
        .iter()
        .filter_map(|id| state.tree.node(*id).map(|n| n.name.clone()))
        .collect()
}

/// Lädt den kompletten Baum (für Style-Tests).
pub(crate) fn load_everything(state: &mut AppState) {
    let root = state.tree.root();
    ensure_loaded_recursive(&mut state.tree, &state.document, root);
}
