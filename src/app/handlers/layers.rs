//! Handler für Overlay- und Layer-Verwaltung.

use std::path::Path;

use crate::app::use_cases;
use crate::core::NodeId;
use crate::AppState;

/// Legt ein leeres Overlay an.
pub fn add_overlay(state: &mut AppState) {
    use_cases::layers::add_overlay(state);
}

/// Entfernt die selektierten Layer bzw. Overlays.
pub fn remove_selected(state: &mut AppState) {
    let removed = use_cases::layers::remove_selected(state);
    log::debug!("{} Knoten entfernt", removed);
}

/// Dupliziert einen Layer.
pub fn duplicate(state: &mut AppState, node: NodeId) {
    use_cases::layers::duplicate_layer(state, node);
}

/// Ersetzt die Datenquelle eines Layers.
pub fn replace_source(state: &mut AppState, node: NodeId, path: &Path) {
    use_cases::layers::replace_source(state, node, path);
}

/// Startet die Umbenennung.
pub fn begin_rename(state: &mut AppState, node: NodeId) {
    use_cases::layers::begin_rename(state, node);
}

/// Übernimmt den neuen Namen.
pub fn commit_rename(state: &mut AppState, node: NodeId, name: &str) {
    use_cases::layers::commit_rename(state, node, name);
}

/// Bricht die Umbenennung ab.
pub fn cancel_rename(state: &mut AppState, node: NodeId) {
    use_cases::layers::cancel_rename(state, node);
}

/// Setzt die Sichtbarkeit.
pub fn set_checked(state: &mut AppState, node: NodeId, checked: bool) {
    use_cases::layers::set_checked(state, node, checked);
}

/// Zoomt auf die Selektion.
pub fn zoom_to_selection(state: &mut AppState) {
    use_cases::layers::zoom_to_selection(state);
}
