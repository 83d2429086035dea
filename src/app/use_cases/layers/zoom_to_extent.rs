//! Use-Case: Kartenausschnitt auf die selektierten Layer setzen.

use crate::core::{ConcreteObject, Extent};
use crate::AppState;

/// Zoomt auf die vereinigte Ausdehnung aller selektierten Layer.
///
/// Ohne Layer mit Ausdehnung erscheint die Meldung "keine Features".
pub fn zoom_to_selection(state: &mut AppState) -> Option<Extent> {
    let extents: Vec<Extent> = state
        .selection
        .highlighted()
        .into_iter()
        .filter_map(|node| state.tree.object(node))
        .filter(|object| object.has_bounding_box())
        .filter_map(ConcreteObject::layer_id)
        .filter_map(|layer_id| state.document.layer(layer_id)?.get_bounding_box())
        .collect();

    let Some(extent) = Extent::union_all(&extents) else {
        state.ui.message = Some(state.strings.get("msg_no_features_matched").to_owned());
        return None;
    };

    state.document.current_extent = Some(extent);
    state.document.refresh_all();
    log::info!(
        "Ausschnitt auf {} Layer gesetzt ({:.1} x {:.1})",
        extents.len(),
        extent.width(),
        extent.height()
    );
    Some(extent)
}
