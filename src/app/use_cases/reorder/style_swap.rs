//! Use-Case: Zeichen-Styles innerhalb eines Composite-Styles tauschen.
//!
//! Nach dem Tausch im Baum wird die neue Reihenfolge in den Composite-Style
//! zurückgeschrieben und in jeder Zoomstufe seines Bereichs nachgezogen.

use crate::core::tree::{owning_layer, owning_overlay};
use crate::core::{ConcreteObject, NodeId};
use crate::AppState;

/// Tauscht zwei Zeichen-Styles desselben Composite-Styles.
pub fn swap_style_items(state: &mut AppState, dragged: NodeId, target: NodeId) -> bool {
    let tree = &state.tree;
    let (
        Some(ConcreteObject::StyleItem(dragged_style)),
        Some(ConcreteObject::StyleItem(target_style)),
    ) = (tree.object(dragged).cloned(), tree.object(target).cloned())
    else {
        return false;
    };
    let Some(parent) = tree.parent(dragged).filter(|p| Some(*p) == tree.parent(target)) else {
        log::debug!("Styles {:?}/{:?} liegen in verschiedenen Composites", dragged, target);
        return false;
    };
    let Some(ConcreteObject::Style(composite_id)) = tree.object(parent).cloned() else {
        return false;
    };
    let (Some(a), Some(b)) = (tree.index_in_parent(dragged), tree.index_in_parent(target)) else {
        return false;
    };
    let layer_id = owning_layer(tree, parent)
        .and_then(|node| tree.object(node))
        .and_then(ConcreteObject::layer_id);
    let overlay_key = owning_overlay(tree, parent)
        .and_then(|node| tree.object(node))
        .and_then(ConcreteObject::overlay_key)
        .cloned();

    state.tree.swap_children(parent, a, b);

    let order: Vec<_> = state
        .tree
        .children(parent)
        .iter()
        .filter_map(|child| state.tree.object(*child).and_then(ConcreteObject::style_id))
        .collect();
    let doc = &mut state.document;
    let Some(composite) = doc.style_mut(composite_id) else {
        return false;
    };
    composite.children = order;
    let range = composite.zoom_range;

    if let Some(zoom_levels) = layer_id
        .and_then(|id| doc.layer_mut(id))
        .and_then(|layer| layer.zoom_levels_mut())
    {
        let rewritten = zoom_levels.swap_in_range(range, dragged_style, target_style);
        log::debug!(
            "Styles {} und {} in {} Zoomstufen ({}-{}) getauscht",
            dragged_style,
            target_style,
            rewritten,
            range.from,
            range.to
        );
    }

    if let Some(key) = overlay_key {
        if let Some(overlay) = doc.overlay_mut(&key) {
            overlay.refresh_preview();
            overlay.refresh_cache();
        }
        doc.refresh([key]);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::test_support::{document_with, load_everything, loaded_state};
    use crate::core::{LayerId, OverlayKey, OverlayKind, StyleId, StyleKind, ZoomRange};

    /// Layer "Straßen" mit Composite [S1, S2] auf Zoomstufen 3-6 und [S3] auf 7-9.
    fn style_state() -> (AppState, LayerId, StyleId, StyleId) {
        let mut doc = document_with(&[("main", OverlayKind::Layer, &["Straßen"])]);
        let layer_id = doc
            .overlay(&OverlayKey::new("main"))
            .and_then(|o| o.layers.snapshot().first().copied())
            .expect("Layer vorhanden");
        let main = doc
            .add_composite_style(
                layer_id,
                "Hauptstraßen",
                ZoomRange::new(3, 6),
                &[("S1", StyleKind::Line), ("S2", StyleKind::Area)],
            )
            .expect("Feature-Layer");
        let minor = doc
            .add_composite_style(
                layer_id,
                "Nebenstraßen",
                ZoomRange::new(7, 9),
                &[("S3", StyleKind::Line)],
            )
            .expect("Feature-Layer");
        let mut state = loaded_state(doc);
        load_everything(&mut state);
        (state, layer_id, main, minor)
    }

    fn item_nodes(state: &AppState, composite: StyleId) -> Vec<NodeId> {
        let node = state
            .tree
            .find_by_object(&ConcreteObject::Style(composite))
            .expect("Composite-Knoten geladen");
        state.tree.children(node).to_vec()
    }

    #[test]
    fn swapping_rewrites_composite_and_zoom_range_only() {
        let (mut state, layer_id, composite, _) = style_state();
        let items = item_nodes(&state, composite);
        let before = state
            .document
            .style(composite)
            .map(|s| s.children.clone())
            .expect("Composite vorhanden");
        let (s1, s2) = (before[0], before[1]);

        assert!(swap_style_items(&mut state, items[0], items[1]));

        assert_eq!(
            state.document.style(composite).map(|s| s.children.clone()),
            Some(vec![s2, s1])
        );
        assert_eq!(item_nodes(&state, composite), vec![items[1], items[0]]);
        let levels = state
            .document
            .layer(layer_id)
            .and_then(|l| l.zoom_levels())
            .expect("Feature-Layer");
        for level in 3..=6 {
            assert_eq!(
                levels.level(level).map(|z| z.custom_styles.clone()),
                Some(vec![s2, s1]),
                "Zoomstufe {level}"
            );
        }
        for level in [1, 2, 10, 20] {
            assert_eq!(
                levels.level(level).map(|z| z.custom_styles.is_empty()),
                Some(true),
                "Zoomstufe {level}"
            );
        }
        assert_eq!(levels.level(7).map(|z| z.custom_styles.len()), Some(1));
        let overlay = state.document.overlay(&OverlayKey::new("main"));
        assert!(overlay.is_some_and(|o| o.tile_cache.preview_dirty && o.tile_cache.apply_new_cache));
    }

    #[test]
    fn items_of_different_composites_are_not_swapped() {
        let (mut state, _, main, minor) = style_state();
        let first = item_nodes(&state, main)[0];
        let foreign = item_nodes(&state, minor)[0];

        assert!(!swap_style_items(&mut state, first, foreign));
        assert_eq!(item_nodes(&state, main)[0], first);
    }
}
