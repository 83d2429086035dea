//! Use-Case: Drag-Geste in der Layer-Liste (Start, Drag-over, Drag-leave).

use crate::core::{ConcreteObject, DropIndicator, LayerTree, NodeId};
use crate::AppState;

/// Drop-Fall, den ein Paar aus gezogenem Knoten und Ziel auslöst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropCase {
    /// Zeichen-Styles desselben Composite-Styles tauschen
    StyleSwap,
    /// Layer eines LayerOverlays oder Overlays der Karte umsortieren
    SameParent,
    /// Layer neben einen Layer eines anderen LayerOverlays
    CrossOverlay,
    /// Layer an den Anfang eines LayerOverlays
    OntoOverlay,
}

/// Ordnet `dragged` auf `target` einem Drop-Fall zu.
///
/// Kein Fall für: den Knoten selbst, eigene Nachfahren, die Karten-Wurzel,
/// dynamische Overlays und deren Layer sowie jede Kombination, die keiner
/// der vier Fälle abdeckt.
pub fn drop_case(tree: &LayerTree, dragged: NodeId, target: NodeId) -> Option<DropCase> {
    if target == dragged || tree.is_ancestor(dragged, target) {
        return None;
    }
    let target_object = tree.object(target)?;
    let dragged_object = tree.object(dragged)?;
    let parent_object =
        move |node: NodeId| tree.parent(node).and_then(|parent| tree.object(parent));

    match target_object {
        ConcreteObject::Map => return None,
        object if object.is_dynamic_overlay() => return None,
        ConcreteObject::Layer(_)
            if parent_object(target).is_some_and(ConcreteObject::is_dynamic_overlay) =>
        {
            return None
        }
        _ => {}
    }

    let dragged_parent = tree.parent(dragged);
    let same_parent = dragged_parent.is_some() && dragged_parent == tree.parent(target);

    if matches!(dragged_object, ConcreteObject::StyleItem(_)) {
        let in_composite = matches!(parent_object(dragged), Some(ConcreteObject::Style(_)));
        let swappable = same_parent
            && in_composite
            && matches!(target_object, ConcreteObject::StyleItem(_));
        return swappable.then_some(DropCase::StyleSwap);
    }

    if same_parent {
        let reorderable = match parent_object(dragged) {
            Some(parent) if parent.is_layer_overlay() => {
                dragged_object.is_layer() && target_object.is_layer()
            }
            Some(ConcreteObject::Map) => {
                dragged_object.overlay_key().is_some() && target_object.overlay_key().is_some()
            }
            _ => false,
        };
        return reorderable.then_some(DropCase::SameParent);
    }

    if !dragged_object.is_layer() {
        return None;
    }
    let parents_are_layer_overlays = [dragged, target]
        .into_iter()
        .all(|node| parent_object(node).is_some_and(ConcreteObject::is_layer_overlay));
    if parents_are_layer_overlays && target_object.is_layer() {
        return Some(DropCase::CrossOverlay);
    }
    if target_object.is_layer_overlay() {
        return Some(DropCase::OntoOverlay);
    }
    None
}

/// Prüft ob `dragged` auf `target` abgelegt werden darf.
pub fn is_drop_allowed(tree: &LayerTree, dragged: NodeId, target: Option<NodeId>) -> bool {
    target.is_some_and(|target| drop_case(tree, dragged, target).is_some())
}

/// Startet eine Drag-Geste auf `node`.
///
/// Nur der aktuelle Einzelknoten der Selektion kann gezogen werden, nicht
/// während einer Umbenennung und nicht als Composite-Style direkt unter
/// einem Layer.
pub fn begin_drag(state: &mut AppState, node: NodeId) -> bool {
    if state.selection.selected_item != Some(node) {
        log::debug!("Drag von {:?} abgelehnt: nicht selektiert", node);
        return false;
    }
    let Some(tree_node) = state.tree.node(node) else {
        return false;
    };
    if tree_node.is_renaming {
        return false;
    }
    let Some(object) = tree_node.object.as_ref() else {
        return false;
    };
    if !object.is_draggable_kind() {
        return false;
    }
    if matches!(object, ConcreteObject::Style(_)) {
        let under_layer = tree_node
            .parent()
            .and_then(|parent| state.tree.object(parent))
            .is_some_and(ConcreteObject::is_layer);
        if under_layer {
            log::debug!("Composite-Style {:?} ist nicht verschiebbar", node);
            return false;
        }
    }

    state.drag.reset();
    state.drag.dragged = Some(node);
    state.clicks.reset();
    log::debug!("Drag gestartet: {:?}", node);
    true
}

/// Aktualisiert die Einfügemarke für die Zeile unter dem Zeiger.
///
/// `pointer_y` ist der Abstand des Zeigers von der Oberkante der Zeile.
/// Gibt `true` zurück, wenn ein Drop auf dieses Ziel erlaubt ist.
pub fn drag_over(state: &mut AppState, target: Option<NodeId>, pointer_y: f32) -> bool {
    let Some(dragged) = state.drag.dragged else {
        return false;
    };

    if let Some(previous) = state.drag.indicator_target.take() {
        set_indicator(&mut state.tree, previous, DropIndicator::None);
    }

    if !is_drop_allowed(&state.tree, dragged, target) {
        return false;
    }
    let Some(target) = target else {
        return false;
    };

    let options = &state.options;
    let show_lower_line = pointer_y > options.row_height_px / 2.0;
    state.drag.show_lower_line = show_lower_line;
    state.drag.stop_drag_leave = pointer_y < options.drag_leave_guard_top_px
        || pointer_y > options.drag_leave_guard_bottom_px;

    let indicator = if show_lower_line {
        DropIndicator::Lower
    } else {
        DropIndicator::Upper
    };
    set_indicator(&mut state.tree, target, indicator);
    state.drag.indicator_target = Some(target);
    true
}

/// Zeiger verlässt eine Zeile ohne Drop.
///
/// Nahe der Zeilenkanten wird das Zurücksetzen unterdrückt, damit die
/// Einfügemarke beim Wechsel zwischen Zeilen nicht flackert.
pub fn drag_leave(state: &mut AppState, node: NodeId) {
    if !state.drag.is_active() || state.drag.stop_drag_leave {
        return;
    }

    set_indicator(&mut state.tree, node, DropIndicator::None);
    if state.tree.object(node).is_some_and(ConcreteObject::is_layer_overlay) {
        let children = state.tree.children(node).to_vec();
        for child in children {
            set_indicator(&mut state.tree, child, DropIndicator::None);
        }
    }
    if state.drag.indicator_target == Some(node) {
        state.drag.indicator_target = None;
    }
}

/// Beendet die Geste und entfernt alle Einfügemarken.
pub fn end_drag(state: &mut AppState) {
    state.tree.clear_drop_indicators();
    state.drag.reset();
}

fn set_indicator(tree: &mut LayerTree, node: NodeId, indicator: DropIndicator) {
    if let Some(tree_node) = tree.node_mut(node) {
        tree_node.drop_indicator = indicator;
    }
}
