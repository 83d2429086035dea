//! Use-Case: Inline-Umbenennung von Knoten der Layer-Liste.

use crate::core::tree::style_node;
use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

/// Startet die Umbenennung; eine andere laufende Umbenennung wird abgebrochen.
pub fn begin_rename(state: &mut AppState, node: NodeId) -> bool {
    match state.tree.object(node) {
        None | Some(ConcreteObject::Map) => return false,
        Some(_) => {}
    }

    let others: Vec<NodeId> = state
        .tree
        .node_ids()
        .filter(|id| *id != node && state.tree.node(*id).is_some_and(|n| n.is_renaming))
        .collect();
    for other in others {
        cancel_rename(state, other);
    }

    if let Some(tree_node) = state.tree.node_mut(node) {
        tree_node.is_renaming = true;
    }
    state.clicks.reset();
    true
}

/// Übernimmt den neuen Namen in Baum und Dokument.
///
/// Leere Namen werden verworfen; die Umbenennung endet in jedem Fall.
pub fn commit_rename(state: &mut AppState, node: NodeId, new_name: &str) -> bool {
    let is_renaming = state.tree.node(node).is_some_and(|n| n.is_renaming);
    if !is_renaming {
        return false;
    }
    cancel_rename(state, node);

    let name = new_name.trim();
    if name.is_empty() {
        log::debug!("Leerer Name für {:?} verworfen", node);
        return false;
    }
    let Some(object) = state.tree.object(node).cloned() else {
        return false;
    };

    let doc = &mut state.document;
    let label = match object {
        ConcreteObject::Overlay { key, .. } => {
            let Some(overlay) = doc.overlay_mut(&key) else {
                return false;
            };
            overlay.name = name.to_owned();
            name.to_owned()
        }
        ConcreteObject::Layer(layer_id) => {
            let Some(layer) = doc.layer_mut(layer_id) else {
                return false;
            };
            layer.name = name.to_owned();
            name.to_owned()
        }
        ConcreteObject::Style(style_id) | ConcreteObject::StyleItem(style_id) => {
            let Some(style) = doc.style_mut(style_id) else {
                return false;
            };
            style.name = name.to_owned();
            match object {
                ConcreteObject::Style(_) => style_node(doc, style_id)
                    .map(|n| n.name)
                    .unwrap_or_else(|| name.to_owned()),
                _ => name.to_owned(),
            }
        }
        ConcreteObject::Map => return false,
    };

    if let Some(tree_node) = state.tree.node_mut(node) {
        tree_node.name = label;
    }
    state.document.begin_refresh_plugins();
    log::info!("{:?} umbenannt in '{}'", node, name);
    true
}

/// Bricht die Umbenennung ab.
pub fn cancel_rename(state: &mut AppState, node: NodeId) {
    if let Some(tree_node) = state.tree.node_mut(node) {
        tree_node.is_renaming = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::test_support::{
        collection_names, document_with, load_everything, loaded_state, layer_fixture, Fixture,
    };
    use crate::core::{OverlayKey, OverlayKind, StyleKind, ZoomRange};

    #[test]
    fn rename_updates_layer_and_node() {
        let Fixture {
            mut state, layers, ..
        } = layer_fixture(&["A"]);

        assert!(begin_rename(&mut state, layers[0]));
        assert!(commit_rename(&mut state, layers[0], "  Autobahnen "));

        assert_eq!(collection_names(&state, "main"), ["Autobahnen"]);
        let node = state.tree.node(layers[0]).expect("Knoten existiert");
        assert_eq!(node.name, "Autobahnen");
        assert!(!node.is_renaming);
    }

    #[test]
    fn empty_name_is_rejected() {
        let Fixture {
            mut state, overlay, ..
        } = layer_fixture(&["A"]);

        begin_rename(&mut state, overlay);
        assert!(!commit_rename(&mut state, overlay, "   "));

        assert_eq!(
            state.document.overlay(&OverlayKey::new("main")).map(|o| o.name.as_str()),
            Some("main")
        );
        assert!(state.tree.node(overlay).is_some_and(|n| !n.is_renaming));
    }

    #[test]
    fn commit_without_begin_is_ignored() {
        let Fixture {
            mut state, layers, ..
        } = layer_fixture(&["A"]);
        assert!(!commit_rename(&mut state, layers[0], "B"));
    }

    #[test]
    fn composite_style_label_keeps_zoom_range() {
        let mut doc = document_with(&[("main", OverlayKind::Layer, &["Straßen"])]);
        let layer_id = doc
            .overlay(&OverlayKey::new("main"))
            .and_then(|o| o.layers.snapshot().first().copied())
            .expect("Layer vorhanden");
        let style_id = doc
            .add_composite_style(
                layer_id,
                "Alt",
                ZoomRange::new(2, 5),
                &[("Linie", StyleKind::Line)],
            )
            .expect("Feature-Layer");
        let mut state = loaded_state(doc);
        load_everything(&mut state);
        let node = state
            .tree
            .find_by_object(&ConcreteObject::Style(style_id))
            .expect("Style-Knoten");

        begin_rename(&mut state, node);
        assert!(commit_rename(&mut state, node, "Neu"));

        assert_eq!(state.document.style(style_id).map(|s| s.name.as_str()), Some("Neu"));
        assert_eq!(state.tree.node(node).map(|n| n.name.as_str()), Some("Neu (2-5)"));
    }
}
