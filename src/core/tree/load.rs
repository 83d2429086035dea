//! Aufbau der Layer-Liste aus dem Kartendokument.
//!
//! Nur Wurzel und Overlays werden sofort erzeugt. Layer, Styles und
//! Zeichen-Styles entstehen erst, wenn ein Knoten aufgeklappt oder sein
//! Teilbaum durchsucht wird (`ensure_loaded`).

use super::{ConcreteObject, LayerTree, NodeId, TreeNode};
use crate::core::{LayerId, MapDocument, Overlay, OverlayKey, StyleId};

/// Noch ausstehende Erzeugung der Kinder eines Knotens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingLoad {
    /// Layer-Knoten eines Overlays
    OverlayLayers(OverlayKey),
    /// Composite-Style-Knoten eines Feature-Layers
    LayerStyles(LayerId),
    /// Zeichen-Style-Knoten eines Composite-Styles
    StyleItems(StyleId),
}

/// Baut die Layer-Liste für ein Kartendokument auf.
pub fn build_tree(doc: &MapDocument) -> LayerTree {
    let mut tree = LayerTree::new(doc.name.clone());
    let root = tree.root();
    for overlay in doc.overlays.values() {
        tree.add_child(root, overlay_node(overlay));
    }
    log::debug!(
        "Layer-Liste für '{}' aufgebaut ({} Overlays)",
        doc.name,
        doc.overlays.len()
    );
    tree
}

/// Knoten für ein Overlay (Layer werden verzögert erzeugt).
pub fn overlay_node(overlay: &Overlay) -> TreeNode {
    let node = TreeNode::new(
        overlay.name.clone(),
        Some(ConcreteObject::Overlay {
            key: overlay.key.clone(),
            kind: overlay.kind,
        }),
    )
    .with_checked(overlay.is_visible);

    if overlay.kind.owns_layers() {
        node.with_load(PendingLoad::OverlayLayers(overlay.key.clone()))
    } else {
        node
    }
}

/// Knoten für einen Layer (Styles werden verzögert erzeugt).
pub fn layer_node(doc: &MapDocument, id: LayerId) -> Option<TreeNode> {
    let layer = doc.layer(id)?;
    let node = TreeNode::new(layer.name.clone(), Some(ConcreteObject::Layer(id)))
        .with_checked(layer.is_visible);

    if layer.styles().is_empty() {
        Some(node)
    } else {
        Some(node.with_load(PendingLoad::LayerStyles(id)))
    }
}

/// Knoten für einen Composite-Style.
pub fn style_node(doc: &MapDocument, id: StyleId) -> Option<TreeNode> {
    let style = doc.style(id)?;
    let label = format!(
        "{} ({}-{})",
        style.name, style.zoom_range.from, style.zoom_range.to
    );
    let node = TreeNode::new(label, Some(ConcreteObject::Style(id)));

    if style.children.is_empty() {
        Some(node)
    } else {
        Some(node.with_load(PendingLoad::StyleItems(id)))
    }
}

/// Knoten für einen Zeichen-Style.
pub fn style_item_node(doc: &MapDocument, id: StyleId) -> Option<TreeNode> {
    let style = doc.style(id)?;
    Some(TreeNode::new(
        style.name.clone(),
        Some(ConcreteObject::StyleItem(id)),
    ))
}

/// Erzeugt die Kinder eines Knotens, falls das noch nicht geschehen ist.
///
/// Gibt `true` zurück, wenn dabei tatsächlich geladen wurde. Jeder weitere
/// Aufruf ist ein No-op, weil die ausstehende Ladeaktion entnommen wird.
pub fn ensure_loaded(tree: &mut LayerTree, doc: &MapDocument, id: NodeId) -> bool {
    let Some(load) = tree.node_mut(id).and_then(|node| node.load.take()) else {
        return false;
    };

    let children: Vec<TreeNode> = match &load {
        PendingLoad::OverlayLayers(key) => doc
            .overlay(key)
            .map(|overlay| overlay.layers.snapshot())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|layer_id| layer_node(doc, layer_id))
            .collect(),
        PendingLoad::LayerStyles(layer_id) => doc
            .layer(*layer_id)
            .map(|layer| layer.styles().to_vec())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|style_id| style_node(doc, style_id))
            .collect(),
        PendingLoad::StyleItems(style_id) => doc
            .style(*style_id)
            .map(|style| style.children.clone())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|child_id| style_item_node(doc, child_id))
            .collect(),
    };

    log::debug!("{:?}: {} Kinder erzeugt", load, children.len());
    for child in children {
        tree.add_child(id, child);
    }
    true
}

/// Lädt den kompletten Teilbaum unterhalb von `id`.
pub fn ensure_loaded_recursive(tree: &mut LayerTree, doc: &MapDocument, id: NodeId) {
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        ensure_loaded(tree, doc, current);
        stack.extend(tree.children(current).iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Layer, LayerSource, OverlayKind, StyleKind, ZoomRange};

    fn sample_doc() -> (MapDocument, OverlayKey, LayerId) {
        let mut doc = MapDocument::new("Karte");
        let key = OverlayKey::new("main");
        doc.add_overlay(key.clone(), "Main", OverlayKind::Layer);
        doc.add_overlay(OverlayKey::new("base"), "Basiskarte", OverlayKind::Base);
        let id = doc.new_layer_id();
        doc.add_layer_to_overlay(&key, Layer::feature(id, "Straßen", LayerSource::InMemory));
        doc.add_composite_style(
            id,
            "Standard",
            ZoomRange::all(),
            &[("Linie", StyleKind::Line), ("Text", StyleKind::IconText)],
        );
        (doc, key, id)
    }

    #[test]
    fn build_tree_creates_only_overlay_nodes() {
        let (doc, _, _) = sample_doc();
        let tree = build_tree(&doc);
        let overlays = tree.children(tree.root());

        assert_eq!(overlays.len(), 2);
        assert!(tree.children(overlays[0]).is_empty());
        assert!(tree.node(overlays[0]).is_some_and(|n| n.has_pending_load()));
        assert!(tree.node(overlays[1]).is_some_and(|n| !n.has_pending_load()));
    }

    #[test]
    fn ensure_loaded_is_idempotent() {
        let (doc, _, layer_id) = sample_doc();
        let mut tree = build_tree(&doc);
        let overlay = tree.children(tree.root())[0];

        assert!(ensure_loaded(&mut tree, &doc, overlay));
        let first: Vec<NodeId> = tree.children(overlay).to_vec();
        assert!(!ensure_loaded(&mut tree, &doc, overlay));

        assert_eq!(tree.children(overlay), first.as_slice());
        assert_eq!(first.len(), 1);
        assert_eq!(
            tree.object(first[0]),
            Some(&ConcreteObject::Layer(layer_id))
        );
    }

    #[test]
    fn ensure_loaded_recursive_materializes_style_items() {
        let (doc, _, _) = sample_doc();
        let mut tree = build_tree(&doc);
        let overlay = tree.children(tree.root())[0];

        ensure_loaded_recursive(&mut tree, &doc, overlay);

        let layer = tree.children(overlay)[0];
        let style = tree.children(layer)[0];
        let items = tree.children(style);
        assert_eq!(items.len(), 2);
        assert!(matches!(
            tree.object(items[1]),
            Some(ConcreteObject::StyleItem(_))
        ));
        assert_eq!(tree.len(), 1 + 2 + 1 + 1 + 2);
    }
}
