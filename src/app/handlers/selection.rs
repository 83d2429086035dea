//! Handler für Selektion, Klick-Auflösung und Auf-/Zuklappen.

use std::time::Instant;

use crate::app::click_timer::ClickResolution;
use crate::app::state::Modifiers;
use crate::app::use_cases;
use crate::core::tree::ensure_loaded;
use crate::core::NodeId;
use crate::AppState;

/// Selektiert einen Knoten mit Shift/Ctrl-Semantik.
pub fn select(state: &mut AppState, node: NodeId, modifiers: Modifiers) {
    if state.drag.is_active() {
        return;
    }
    use_cases::selection::select_node(state, node, modifiers);
}

/// Meldet einen Klick beim Klick-Timer; ein Doppelklick öffnet den Style-Editor
/// (Text-Editor auf Beschriftungs-Styles).
pub fn register_click(
    state: &mut AppState,
    node: NodeId,
    modifiers: Modifiers,
    was_selected: bool,
    now: Instant,
) {
    if let Some(ClickResolution::Double { node }) =
        state.clicks.mouse_up(node, modifiers, was_selected, now)
    {
        log::debug!("Doppelklick auf {:?}", node);
        let target = use_cases::style_edit::double_click_target(state, node);
        use_cases::style_edit::open_style_editor(state, node, target);
    }
}

/// Löst einen abgelaufenen Einzelklick auf.
///
/// Ein schlichter Klick auf den bereits selektierten Knoten startet die
/// Umbenennung.
pub fn resolve_pending_click(state: &mut AppState, now: Instant) {
    let Some(ClickResolution::Single {
        node,
        modifiers,
        was_selected,
    }) = state.clicks.tick(now)
    else {
        return;
    };
    if was_selected && modifiers.is_none() && state.selection.selected_item == Some(node) {
        use_cases::layers::begin_rename(state, node);
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Klappt einen Knoten auf oder zu; Kinder werden beim ersten Aufklappen erzeugt.
pub fn toggle_expanded(state: &mut AppState, node: NodeId) {
    let expanded = state.tree.node(node).is_some_and(|n| n.is_expanded);
    if !expanded && ensure_loaded(&mut state.tree, &state.document, node) {
        log::debug!("Kinder von {:?} geladen", node);
    }
    if let Some(tree_node) = state.tree.node_mut(node) {
        tree_node.is_expanded = !expanded;
    }
}
