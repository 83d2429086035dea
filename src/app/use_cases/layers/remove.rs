//! Use-Case: Selektierte Layer oder Overlays entfernen.

use crate::app::use_cases::selection::clear_selection;
use crate::core::ConcreteObject;
use crate::AppState;

/// Entfernt alle hervorgehobenen Layer- bzw. Overlay-Knoten.
///
/// Style-Knoten werden übersprungen. Gibt die Anzahl entfernter Objekte zurück.
pub fn remove_selected(state: &mut AppState) -> usize {
    let targets = state.selection.highlighted();
    let mut affected = Vec::new();
    let mut removed = 0;

    for node in targets {
        let Some(object) = state.tree.object(node).cloned() else {
            continue;
        };
        match object {
            ConcreteObject::Layer(layer_id) => {
                if let Some(key) = state.document.overlay_of_layer(layer_id) {
                    affected.push(key);
                }
                state.document.remove_layer(layer_id);
            }
            ConcreteObject::Overlay { key, .. } => {
                state.document.remove_overlay(&key);
            }
            other => {
                log::debug!("{:?} kann nicht entfernt werden", other);
                continue;
            }
        }
        state.tree.remove_subtree(node);
        removed += 1;
    }

    clear_selection(state);
    if removed > 0 {
        state.document.refresh(affected);
        state.document.begin_refresh_plugins();
        log::info!("{} Objekte aus der Layer-Liste entfernt", removed);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Modifiers;
    use crate::app::use_cases::selection::select_node;
    use crate::app::use_cases::test_support::{child_names, collection_names, layer_fixture, Fixture};

    #[test]
    fn removes_selected_layers_from_tree_and_overlay() {
        let Fixture {
            mut state,
            overlay,
            layers,
        } = layer_fixture(&["A", "B", "C"]);
        select_node(&mut state, layers[0], Modifiers::NONE);
        select_node(&mut state, layers[2], Modifiers::CTRL);

        assert_eq!(remove_selected(&mut state), 2);

        assert_eq!(child_names(&state, overlay), ["B"]);
        assert_eq!(collection_names(&state, "main"), ["B"]);
        assert_eq!(state.document.layer_count(), 1);
        assert_eq!(state.selection.selected_item, None);
        assert!(!state.tree.contains(layers[0]));
    }

    #[test]
    fn removing_overlay_drops_its_layers() {
        let Fixture {
            mut state, overlay, ..
        } = layer_fixture(&["A", "B"]);
        select_node(&mut state, overlay, Modifiers::NONE);

        assert_eq!(remove_selected(&mut state), 1);
        assert!(state.document.overlays.is_empty());
        assert_eq!(state.document.layer_count(), 0);
        assert_eq!(state.tree.len(), 1);
    }
}
