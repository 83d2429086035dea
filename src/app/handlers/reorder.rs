//! Handler für Drag-and-Drop in der Layer-Liste.

use std::path::PathBuf;

use crate::app::use_cases;
use crate::core::NodeId;
use crate::AppState;

/// Startet eine Drag-Geste.
pub fn begin_drag(state: &mut AppState, node: NodeId) {
    use_cases::reorder::begin_drag(state, node);
}

/// Aktualisiert die Einfügemarke.
pub fn update_indicator(state: &mut AppState, target: Option<NodeId>, pointer_y: f32) {
    use_cases::reorder::drag_over(state, target, pointer_y);
}

/// Entfernt die Einfügemarke einer verlassenen Zeile.
pub fn clear_indicator(state: &mut AppState, node: NodeId) {
    use_cases::reorder::drag_leave(state, node);
}

/// Legt den gezogenen Knoten ab.
pub fn drop(state: &mut AppState, target: Option<NodeId>) {
    let outcome = use_cases::reorder::drop_dragged(state, target);
    log::debug!("Drop auf {:?}: {:?}", target, outcome);
}

/// Beendet die Geste ohne Änderung.
pub fn end(state: &mut AppState) {
    use_cases::reorder::end_drag(state);
}

/// Importiert Dateien beim Ziel.
pub fn import_files(state: &mut AppState, target: Option<NodeId>, lower: bool, paths: &[PathBuf]) {
    let outcome = use_cases::reorder::drop_files(state, target, lower, paths);
    log::debug!("Datei-Import auf {:?}: {:?}", target, outcome);
}
