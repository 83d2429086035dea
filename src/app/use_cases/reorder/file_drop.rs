//! Use-Case: Dateien aus dem Betriebssystem auf die Layer-Liste ziehen.
//!
//! Die Dateien werden zu Layern importiert und danach in das Ziel-Overlay
//! eingefügt. Ohne passendes Ziel entsteht ein neues LayerOverlay.

use std::path::PathBuf;

use super::drag::end_drag;
use super::index::insert_index;
use super::DropOutcome;
use crate::core::tree::{ensure_loaded, layer_node, overlay_node};
use crate::core::{import_layers, ConcreteObject, NodeId, OverlayKey, OverlayKind};
use crate::AppState;

/// Einfügeposition für importierte Layer
enum Destination {
    /// Bestehendes Overlay ab Sammlungs- bzw. Baumindex
    Existing {
        key: OverlayKey,
        node: NodeId,
        collection_index: usize,
        tree_index: usize,
    },
    /// Neues Overlay am Ende der Karte
    NewOverlay,
}

fn resolve_destination(state: &AppState, target: Option<NodeId>, lower: bool) -> Option<Destination> {
    let tree = &state.tree;
    let Some(target) = target else {
        return Some(Destination::NewOverlay);
    };

    match tree.object(target) {
        Some(ConcreteObject::Overlay { key, kind }) => match kind {
            OverlayKind::Layer => Some(Destination::Existing {
                key: key.clone(),
                node: target,
                collection_index: 0,
                tree_index: 0,
            }),
            OverlayKind::Dynamic | OverlayKind::Base => None,
        },
        Some(ConcreteObject::Layer(layer_id)) => {
            let parent = tree.parent(target)?;
            let Some(ConcreteObject::Overlay {
                key,
                kind: OverlayKind::Layer,
            }) = tree.object(parent)
            else {
                return None;
            };
            let collection_index = state.document.overlay(key)?.layers.index_of(*layer_id)?;
            let tree_index = tree.index_in_parent(target)?;
            Some(Destination::Existing {
                key: key.clone(),
                node: parent,
                collection_index: insert_index(collection_index, lower),
                tree_index: insert_index(tree_index, lower),
            })
        }
        _ => Some(Destination::NewOverlay),
    }
}

/// Importiert `paths` und fügt die neuen Layer beim Ziel ein.
///
/// - Overlay-Ziel: an den Anfang des Overlays
/// - Layer-Ziel: neben den Layer (`lower` = danach)
/// - kein Ziel oder Style-Knoten: in ein neues Overlay
///
/// Dynamische Overlays und Basiskarten lehnen den Drop ab.
pub fn drop_files(
    state: &mut AppState,
    target: Option<NodeId>,
    lower: bool,
    paths: &[PathBuf],
) -> DropOutcome {
    end_drag(state);

    let Some(destination) = resolve_destination(state, target, lower) else {
        log::debug!("Datei-Drop auf {:?} abgelehnt", target);
        return DropOutcome::Rejected;
    };

    let layer_ids = import_layers(&mut state.document, paths);
    if layer_ids.is_empty() {
        log::warn!("Keine der {} Dateien konnte importiert werden", paths.len());
        return DropOutcome::FilesImported(0);
    }

    let (key, node, collection_index, tree_index) = match destination {
        Destination::Existing {
            key,
            node,
            collection_index,
            tree_index,
        } => (key, node, collection_index, tree_index),
        Destination::NewOverlay => {
            let key = state.document.unique_overlay_key("overlay");
            let name = state.strings.get("new_overlay_name").to_owned();
            state
                .document
                .add_overlay(key.clone(), &name, OverlayKind::Layer);
            let Some(overlay) = state.document.overlay(&key) else {
                return DropOutcome::Rejected;
            };
            let root = state.tree.root();
            let Some(node) = state.tree.add_child(root, overlay_node(overlay)) else {
                return DropOutcome::Rejected;
            };
            (key, node, 0, 0)
        }
    };

    ensure_loaded(&mut state.tree, &state.document, node);

    for (offset, layer_id) in layer_ids.iter().copied().enumerate() {
        if let Some(previous) = state.document.overlay_of_layer(layer_id) {
            if let Some(overlay) = state.document.overlay_mut(&previous) {
                overlay.layers.remove(layer_id);
                overlay.invalidate();
            }
        }
        if let Some(overlay) = state.document.overlay(&key) {
            overlay.layers.insert(collection_index + offset, layer_id);
        }
        if let Some(child) = layer_node(&state.document, layer_id) {
            state.tree.insert_child(node, tree_index + offset, child);
        }
    }

    if let Some(overlay) = state.document.overlay_mut(&key) {
        overlay.invalidate();
    }
    state.document.refresh([key.clone()]);
    state.document.begin_refresh_plugins();
    log::info!("{} Layer in Overlay '{}' importiert", layer_ids.len(), key);
    DropOutcome::FilesImported(layer_ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::test_support::{
        child_names, collection_names, document_with, layer_fixture, loaded_state, overlay_node,
        Fixture,
    };

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn files_dropped_below_layer_land_after_it() {
        let Fixture {
            mut state,
            overlay,
            layers,
        } = layer_fixture(&["A", "B"]);

        let outcome = drop_files(
            &mut state,
            Some(layers[0]),
            true,
            &paths(&["/daten/flüsse.shp", "/daten/luftbild.tif"]),
        );

        assert_eq!(outcome, DropOutcome::FilesImported(2));
        assert_eq!(collection_names(&state, "main"), ["A", "flüsse", "luftbild", "B"]);
        assert_eq!(child_names(&state, overlay), ["A", "flüsse", "luftbild", "B"]);
        assert!(state.document.plugins_dirty);
    }

    #[test]
    fn files_dropped_on_overlay_go_to_front() {
        let Fixture {
            mut state, overlay, ..
        } = layer_fixture(&["A"]);

        drop_files(&mut state, Some(overlay), false, &paths(&["/daten/wald.geojson"]));

        assert_eq!(collection_names(&state, "main"), ["wald", "A"]);
        assert_eq!(child_names(&state, overlay), ["wald", "A"]);
    }

    #[test]
    fn files_dropped_on_empty_space_create_overlay() {
        let Fixture { mut state, .. } = layer_fixture(&["A"]);

        let outcome = drop_files(&mut state, None, false, &paths(&["/daten/wege.gpx"]));

        assert_eq!(outcome, DropOutcome::FilesImported(1));
        assert_eq!(state.document.overlays.len(), 2);
        assert_eq!(collection_names(&state, "overlay1"), ["wege"]);
        assert_eq!(state.tree.children(state.tree.root()).len(), 2);
    }

    #[test]
    fn dynamic_overlay_rejects_files() {
        let mut state = loaded_state(document_with(&[("live", OverlayKind::Dynamic, &[])]));
        let live = overlay_node(&state, "live");
        let layers_before = state.document.layer_count();

        let outcome = drop_files(&mut state, Some(live), false, &paths(&["/daten/a.shp"]));

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(state.document.layer_count(), layers_before);
    }

    #[test]
    fn unsupported_files_import_nothing() {
        let Fixture {
            mut state, overlay, ..
        } = layer_fixture(&["A"]);

        let outcome = drop_files(&mut state, Some(overlay), false, &paths(&["/daten/notiz.txt"]));

        assert_eq!(outcome, DropOutcome::FilesImported(0));
        assert!(!outcome.is_applied());
        assert_eq!(collection_names(&state, "main"), ["A"]);
    }
}
