//! Use-Case-Funktionen für die Selektion in der Layer-Liste.
//!
//! - `pick`: Klick mit Modifiern (Einzel-, Bereichs-, Umschalt-Selektion)
//! - `helpers`: Hervorhebung, aktive Objekte, Selektion löschen

mod helpers;
mod pick;

pub use helpers::{clear_selection, sync_highlight};
pub use pick::select_node;
