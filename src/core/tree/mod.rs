//! Layer-Liste als Baum über dem Kartendokument.
//!
//! Knoten liegen in einem Arena-Speicher und werden über `NodeId` adressiert;
//! der Elternverweis ist nur ein Index. Entfernte Knoten hinterlassen eine
//! leere Zelle, damit bestehende IDs nie auf einen fremden Knoten zeigen.
//!
//! - `node`: `TreeNode`, `ConcreteObject`, `DropIndicator`
//! - `load`: Aufbau aus dem `MapDocument` und verzögertes Laden der Kinder
//! - `query`: Suchfunktionen (Overlay eines Knotens, erster passender Style)

pub mod load;
pub mod node;
pub mod query;

pub use load::{
    build_tree, ensure_loaded, ensure_loaded_recursive, layer_node, overlay_node, style_item_node,
    style_node, PendingLoad,
};
pub use node::{ConcreteObject, DropIndicator, NodeId, TreeNode};
pub use query::{find_first_style_node, owning_layer, owning_overlay, StyleTarget};

/// Arena-basierter Baum der Layer-Liste
#[derive(Debug, Clone)]
pub struct LayerTree {
    nodes: Vec<Option<TreeNode>>,
    root: NodeId,
}

impl LayerTree {
    /// Erstellt einen Baum, der nur aus der Karten-Wurzel besteht.
    pub fn new(map_name: impl Into<String>) -> Self {
        let root = TreeNode::new(map_name, Some(ConcreteObject::Map));
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    /// Wurzelknoten (die Karte).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Knoten nach ID (None für entfernte Knoten).
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Mutabler Knoten nach ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Prüft ob der Knoten noch existiert.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Kartenobjekt eines Knotens.
    pub fn object(&self, id: NodeId) -> Option<&ConcreteObject> {
        self.node(id).and_then(|node| node.object.as_ref())
    }

    /// Elternknoten.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Kinder eines Knotens (leer für unbekannte Knoten).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Position des Knotens unter seinen Geschwistern.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|child| *child == id)
    }

    /// Anzahl der existierenden Knoten (inklusive Wurzel).
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Ein Baum enthält immer mindestens die Wurzel.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn alloc(&mut self, node: TreeNode) -> NodeId {
        self.nodes.push(Some(node));
        NodeId(self.nodes.len() - 1)
    }

    /// Hängt einen neuen Knoten an das Ende der Kinderliste.
    pub fn add_child(&mut self, parent: NodeId, node: TreeNode) -> Option<NodeId> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, node)
    }

    /// Fügt einen neuen Knoten an `index` ein (auf die Kinderzahl begrenzt).
    pub fn insert_child(&mut self, parent: NodeId, index: usize, node: TreeNode) -> Option<NodeId> {
        if !self.contains(parent) {
            return None;
        }
        let id = self.alloc(node);
        self.attach(id, parent, index);
        Some(id)
    }

    /// Löst einen Knoten aus der Kinderliste seines Elternknotens.
    ///
    /// Der Knoten bleibt samt Teilbaum erhalten und kann neu eingehängt werden.
    pub fn detach(&mut self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        let parent_node = self.node_mut(parent)?;
        let index = parent_node.children.iter().position(|child| *child == id)?;
        parent_node.children.remove(index);
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
        Some(index)
    }

    /// Hängt einen (losgelösten) Knoten an `index` unter `parent` ein.
    pub fn attach(&mut self, id: NodeId, parent: NodeId, index: usize) -> usize {
        let Some(parent_node) = self.node_mut(parent) else {
            return 0;
        };
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, id);
        if let Some(node) = self.node_mut(id) {
            node.parent = Some(parent);
        }
        index
    }

    /// Verschiebt einen Knoten unter einen (möglicherweise anderen) Elternknoten.
    ///
    /// `index` bezieht sich auf die Kinderliste nach dem Herauslösen.
    pub fn move_node(&mut self, id: NodeId, new_parent: NodeId, index: usize) -> bool {
        if id == new_parent || self.is_ancestor(id, new_parent) || !self.contains(new_parent) {
            return false;
        }
        if self.detach(id).is_none() {
            return false;
        }
        self.attach(id, new_parent, index);
        true
    }

    /// Vertauscht zwei Kinder desselben Elternknotens.
    pub fn swap_children(&mut self, parent: NodeId, a: usize, b: usize) -> bool {
        let Some(node) = self.node_mut(parent) else {
            return false;
        };
        if a >= node.children.len() || b >= node.children.len() {
            return false;
        }
        node.children.swap(a, b);
        true
    }

    /// Entfernt einen Knoten samt Teilbaum endgültig.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        if id == self.root {
            return 0;
        }
        self.detach(id);
        let doomed = self.descendants_and_self(id);
        for node_id in &doomed {
            if let Some(slot) = self.nodes.get_mut(node_id.0) {
                *slot = None;
            }
        }
        doomed.len()
    }

    /// Prüft ob `ancestor` ein echter Vorfahre von `id` ist.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Alle Knoten des Teilbaums in Pre-Order (inklusive `id`).
    pub fn descendants_and_self(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.contains(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    /// Alle existierenden Knoten-IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| NodeId(index))
    }

    /// Sucht den Knoten, der das gegebene Kartenobjekt repräsentiert.
    pub fn find_by_object(&self, object: &ConcreteObject) -> Option<NodeId> {
        self.node_ids()
            .find(|id| self.object(*id) == Some(object))
    }

    /// Entfernt alle Einfügemarken.
    pub fn clear_drop_indicators(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            node.drop_indicator = DropIndicator::None;
        }
    }

    /// Setzt die Selektions-Hervorhebung genau für die übergebenen Knoten.
    pub fn set_highlighted<'a>(&mut self, highlighted: impl IntoIterator<Item = &'a NodeId>) {
        for node in self.nodes.iter_mut().flatten() {
            node.is_selected = false;
        }
        for id in highlighted {
            if let Some(node) = self.node_mut(*id) {
                node.is_selected = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerId;

    fn layer_node(id: u64) -> TreeNode {
        TreeNode::new(format!("L{id}"), Some(ConcreteObject::Layer(LayerId(id))))
    }

    fn tree_with_children(count: u64) -> (LayerTree, Vec<NodeId>) {
        let mut tree = LayerTree::new("Karte");
        let root = tree.root();
        let ids = (1..=count)
            .filter_map(|id| tree.add_child(root, layer_node(id)))
            .collect();
        (tree, ids)
    }

    #[test]
    fn insert_child_clamps_index_and_sets_parent() {
        let (mut tree, ids) = tree_with_children(2);
        let root = tree.root();
        let new = tree
            .insert_child(root, 99, layer_node(3))
            .expect("Wurzel existiert");
        assert_eq!(tree.children(root), &[ids[0], ids[1], new]);
        assert_eq!(tree.parent(new), Some(root));
        assert_eq!(tree.index_in_parent(new), Some(2));
    }

    #[test]
    fn move_node_refuses_cycles() {
        let (mut tree, ids) = tree_with_children(2);
        let child = tree
            .add_child(ids[0], layer_node(10))
            .expect("Elternknoten existiert");

        assert!(!tree.move_node(ids[0], child, 0));
        assert!(!tree.move_node(ids[0], ids[0], 0));
        assert!(tree.is_ancestor(ids[0], child));
        assert_eq!(tree.parent(child), Some(ids[0]));
    }

    #[test]
    fn move_node_changes_parent() {
        let (mut tree, ids) = tree_with_children(2);
        assert!(tree.move_node(ids[1], ids[0], 0));
        assert_eq!(tree.children(tree.root()), &[ids[0]]);
        assert_eq!(tree.children(ids[0]), &[ids[1]]);
        assert_eq!(tree.parent(ids[1]), Some(ids[0]));
    }

    #[test]
    fn remove_subtree_tombstones_all_descendants() {
        let (mut tree, ids) = tree_with_children(2);
        let grandchild = tree.add_child(ids[0], layer_node(10)).expect("existiert");

        assert_eq!(tree.remove_subtree(ids[0]), 2);
        assert!(!tree.contains(ids[0]));
        assert!(!tree.contains(grandchild));
        assert_eq!(tree.children(tree.root()), &[ids[1]]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.remove_subtree(tree.root()), 0);
    }

    #[test]
    fn find_by_object_skips_removed_nodes() {
        let (mut tree, ids) = tree_with_children(2);
        let target = ConcreteObject::Layer(LayerId(1));
        assert_eq!(tree.find_by_object(&target), Some(ids[0]));
        tree.remove_subtree(ids[0]);
        assert_eq!(tree.find_by_object(&target), None);
    }

    #[test]
    fn set_highlighted_resets_previous_flags() {
        let (mut tree, ids) = tree_with_children(3);
        tree.set_highlighted(&[ids[0], ids[1]]);
        tree.set_highlighted(&[ids[2]]);
        let flags: Vec<bool> = ids
            .iter()
            .filter_map(|id| tree.node(*id).map(|n| n.is_selected))
            .collect();
        assert_eq!(flags, vec![false, false, true]);
    }
}
