//! Suchfunktionen auf der Layer-Liste.

use super::{ensure_loaded_recursive, ConcreteObject, LayerTree, NodeId};
use crate::core::MapDocument;

/// Welcher Style-Editor geöffnet werden soll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// Flächen-, Linien- und Punkt-Styles
    Drawing,
    /// Beschriftungs-Styles (IconText, TextFilter)
    Text,
}

/// Nächster Knoten (inklusive `id`), dessen Objekt das Prädikat erfüllt.
fn self_or_ancestor(
    tree: &LayerTree,
    id: NodeId,
    predicate: impl Fn(&ConcreteObject) -> bool,
) -> Option<NodeId> {
    let mut current = Some(id);
    while let Some(node) = current {
        if tree.object(node).is_some_and(&predicate) {
            return Some(node);
        }
        current = tree.parent(node);
    }
    None
}

/// Overlay-Knoten, zu dem `id` gehört (oder `id` selbst).
pub fn owning_overlay(tree: &LayerTree, id: NodeId) -> Option<NodeId> {
    self_or_ancestor(tree, id, |object| {
        matches!(object, ConcreteObject::Overlay { .. })
    })
}

/// Layer-Knoten, zu dem `id` gehört (oder `id` selbst).
pub fn owning_layer(tree: &LayerTree, id: NodeId) -> Option<NodeId> {
    self_or_ancestor(tree, id, ConcreteObject::is_layer)
}

/// Sucht im Teilbaum von `start` den ersten Zeichen-Style passend zum Editor.
///
/// Der Teilbaum wird vorher vollständig geladen, damit die Suche nicht an
/// noch nicht erzeugten Knoten vorbeiläuft.
pub fn find_first_style_node(
    tree: &mut LayerTree,
    doc: &MapDocument,
    start: NodeId,
    target: StyleTarget,
) -> Option<NodeId> {
    ensure_loaded_recursive(tree, doc, start);

    tree.descendants_and_self(start).into_iter().find(|id| {
        let Some(ConcreteObject::StyleItem(style_id)) = tree.object(*id) else {
            return false;
        };
        doc.style(*style_id).is_some_and(|style| match target {
            StyleTarget::Text => style.kind.is_text(),
            StyleTarget::Drawing => !style.kind.is_text(),
        })
    })
}
