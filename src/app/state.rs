//! Application State: zentrale Datenhaltung pro geöffnetem Kartendokument.

mod app_state;
mod dialogs;
mod drag;
mod selection;

pub use app_state::AppState;
pub use dialogs::{FileDialogRequest, StyleEditorRequest, UiState};
pub use drag::DragState;
pub use selection::{Modifiers, SelectionState};
