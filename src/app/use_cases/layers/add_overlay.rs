//! Use-Case: Neues LayerOverlay am Ende der Karte anlegen.

use crate::app::state::Modifiers;
use crate::app::use_cases::selection::select_node;
use crate::core::tree::{ensure_loaded, overlay_node};
use crate::core::{NodeId, OverlayKind};
use crate::AppState;

/// Legt ein leeres LayerOverlay an und selektiert es.
pub fn add_overlay(state: &mut AppState) -> Option<NodeId> {
    let key = state.document.unique_overlay_key("overlay");
    let name = state.strings.get("new_overlay_name").to_owned();
    if !state
        .document
        .add_overlay(key.clone(), &name, OverlayKind::Layer)
    {
        return None;
    }

    let overlay = state.document.overlay(&key)?;
    let root = state.tree.root();
    let node = state.tree.add_child(root, overlay_node(overlay))?;
    ensure_loaded(&mut state.tree, &state.document, node);

    select_node(state, node, Modifiers::NONE);
    state.document.refresh([key.clone()]);
    state.document.begin_refresh_plugins();
    log::info!("Overlay '{}' angelegt", key);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::test_support::{layer_fixture, Fixture};
    use crate::core::OverlayKey;

    #[test]
    fn new_overlay_is_appended_and_selected() {
        let Fixture { mut state, .. } = layer_fixture(&["A"]);

        let node = add_overlay(&mut state).expect("Overlay angelegt");

        let root = state.tree.root();
        assert_eq!(state.tree.children(root).last(), Some(&node));
        assert_eq!(state.selection.selected_item, Some(node));
        assert_eq!(
            state.document.active_overlay,
            Some(OverlayKey::new("overlay1"))
        );
        assert_eq!(
            state.tree.node(node).map(|n| n.name.as_str()),
            Some("New Overlay")
        );
    }
}
