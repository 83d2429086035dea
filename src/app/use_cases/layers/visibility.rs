//! Use-Case: Sichtbarkeits-Checkboxen der Layer-Liste.

use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

/// Setzt die Checkbox eines Knotens und überträgt sie auf das Dokument.
///
/// Overlay-Checkboxen gelten für alle Layer des Overlays. Eine Layer-Checkbox
/// aktualisiert ihr Overlay: es bleibt sichtbar, solange ein Layer sichtbar ist.
pub fn set_checked(state: &mut AppState, node: NodeId, checked: bool) {
    let Some(object) = state.tree.object(node).cloned() else {
        return;
    };
    if let Some(tree_node) = state.tree.node_mut(node) {
        tree_node.is_checked = checked;
    }

    match object {
        ConcreteObject::Map => {
            let overlays = state.tree.children(node).to_vec();
            for overlay in overlays {
                set_checked(state, overlay, checked);
            }
        }
        ConcreteObject::Overlay { key, .. } => {
            let children = state.tree.children(node).to_vec();
            for child in children {
                if let Some(child_node) = state.tree.node_mut(child) {
                    child_node.is_checked = checked;
                }
            }
            let doc = &mut state.document;
            let layer_ids = doc
                .overlay(&key)
                .map(|overlay| overlay.layers.snapshot())
                .unwrap_or_default();
            for layer_id in layer_ids {
                if let Some(layer) = doc.layer_mut(layer_id) {
                    layer.is_visible = checked;
                }
            }
            if let Some(overlay) = doc.overlay_mut(&key) {
                overlay.is_visible = checked;
                overlay.invalidate();
            }
            doc.refresh([key]);
        }
        ConcreteObject::Layer(layer_id) => {
            if let Some(layer) = state.document.layer_mut(layer_id) {
                layer.is_visible = checked;
            }
            let Some(parent) = state.tree.parent(node) else {
                return;
            };
            let any_checked = state
                .tree
                .children(parent)
                .iter()
                .any(|child| state.tree.node(*child).is_some_and(|n| n.is_checked));
            if let Some(parent_node) = state.tree.node_mut(parent) {
                parent_node.is_checked = any_checked;
            }
            let Some(key) = state
                .tree
                .object(parent)
                .and_then(ConcreteObject::overlay_key)
                .cloned()
            else {
                return;
            };
            if let Some(overlay) = state.document.overlay_mut(&key) {
                overlay.is_visible = any_checked;
                overlay.invalidate();
            }
            state.document.refresh([key]);
        }
        ConcreteObject::Style(_) | ConcreteObject::StyleItem(_) => {
            log::debug!("Checkbox von Style-Knoten {:?} ohne Kartenwirkung", node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::test_support::{layer_fixture, Fixture};
    use crate::core::OverlayKey;

    fn overlay_visible(state: &AppState) -> Option<bool> {
        state
            .document
            .overlay(&OverlayKey::new("main"))
            .map(|o| o.is_visible)
    }

    #[test]
    fn overlay_checkbox_applies_to_all_layers() {
        let Fixture {
            mut state,
            overlay,
            layers,
        } = layer_fixture(&["A", "B"]);

        set_checked(&mut state, overlay, false);

        assert_eq!(overlay_visible(&state), Some(false));
        for layer in layers {
            assert!(state.tree.node(layer).is_some_and(|n| !n.is_checked));
            let id = state.tree.object(layer).and_then(ConcreteObject::layer_id);
            let visible = id.and_then(|id| state.document.layer(id)).map(|l| l.is_visible);
            assert_eq!(visible, Some(false));
        }
    }

    #[test]
    fn overlay_stays_checked_while_one_layer_is_visible() {
        let Fixture {
            mut state,
            overlay,
            layers,
        } = layer_fixture(&["A", "B"]);

        set_checked(&mut state, layers[0], false);
        assert!(state.tree.node(overlay).is_some_and(|n| n.is_checked));

        set_checked(&mut state, layers[1], false);
        assert!(state.tree.node(overlay).is_some_and(|n| !n.is_checked));
        assert_eq!(overlay_visible(&state), Some(false));

        set_checked(&mut state, layers[1], true);
        assert_eq!(overlay_visible(&state), Some(true));
    }
}
