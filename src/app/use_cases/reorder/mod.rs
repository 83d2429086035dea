//! Use-Case-Funktionen für Drag-and-Drop in der Layer-Liste.
//!
//! - `drag`: Start, Drag-over (Einfügemarke), Drag-leave, Abbruch
//! - `drop`: Drop-Fälle mit Spiegelung in die Sammlungen des Dokuments
//! - `style_swap`: Tausch von Zeichen-Styles inklusive Zoomstufen
//! - `file_drop`: Import von Dateien per Drop
//! - `index`: Index-Arithmetik beim Wiedereinfügen

mod drag;
mod drop;
mod file_drop;
pub mod index;
mod style_swap;

pub use drag::{
    begin_drag, drag_leave, drag_over, drop_case, end_drag, is_drop_allowed, DropCase,
};
pub use drop::{apply_drop, drop_dragged, DropOutcome};
pub use file_drop::drop_files;
pub use style_swap::swap_style_items;
