//! Use-Case: Style-Editor für einen Knoten der Layer-Liste anfordern.

use crate::app::state::StyleEditorRequest;
use crate::core::tree::{find_first_style_node, owning_layer, StyleTarget};
use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

/// Öffnet den Style-Editor für den ersten passenden Zeichen-Style unter `node`.
///
/// Der Teilbaum wird dafür vollständig geladen. Findet sich kein passender
/// Style, erscheint stattdessen eine Meldung.
pub fn open_style_editor(state: &mut AppState, node: NodeId, target: StyleTarget) -> bool {
    match state.tree.object(node) {
        None | Some(ConcreteObject::Map) => return false,
        Some(_) => {}
    }

    let found = find_first_style_node(&mut state.tree, &state.document, node, target);
    let request = found.and_then(|style_node| {
        let style_id = state.tree.object(style_node)?.style_id()?;
        let layer_id = owning_layer(&state.tree, style_node)
            .and_then(|layer| state.tree.object(layer))
            .and_then(ConcreteObject::layer_id)?;
        Some(StyleEditorRequest {
            layer_id,
            style_id,
            node: style_node,
            target,
        })
    });

    match request {
        Some(request) => {
            log::info!("Style-Editor ({:?}) für {}", target, request.style_id);
            state.ui.style_editor = Some(request);
            true
        }
        None => {
            log::debug!("Kein {:?}-Style unter {:?}", target, node);
            state.ui.message = Some(state.strings.get("msg_no_style_to_edit").to_owned());
            false
        }
    }
}

/// Editor für einen Doppelklick: Beschriftungs-Styles öffnen den Text-Editor.
pub fn double_click_target(state: &AppState, node: NodeId) -> StyleTarget {
    let is_text_item = match state.tree.object(node) {
        Some(ConcreteObject::StyleItem(style_id)) => state
            .document
            .style(*style_id)
            .is_some_and(|style| style.kind.is_text()),
        _ => false,
    };
    if is_text_item {
        StyleTarget::Text
    } else {
        StyleTarget::Drawing
    }
}

/// Schließt den Style-Editor; geänderte Styles werden neu gezeichnet.
pub fn close_style_editor(state: &mut AppState) {
    let Some(request) = state.ui.style_editor.take() else {
        return;
    };
    if let Some(key) = state.document.overlay_of_layer(request.layer_id) {
        if let Some(overlay) = state.document.overlay_mut(&key) {
            overlay.refresh_preview();
            overlay.refresh_cache();
        }
        state.document.refresh([key]);
    }
}
