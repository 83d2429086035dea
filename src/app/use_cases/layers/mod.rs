//! Use-Case-Funktionen für Overlays und Layer.
//!
//! - `add_overlay`: neues LayerOverlay anlegen
//! - `remove`: selektierte Layer bzw. Overlays entfernen
//! - `duplicate`: Layer samt Styles kopieren
//! - `replace`: Datenquelle eines Layers ersetzen
//! - `rename`: Inline-Umbenennung
//! - `visibility`: Checkboxen und Sichtbarkeit
//! - `zoom_to_extent`: Kartenausschnitt auf selektierte Layer

mod add_overlay;
mod duplicate;
mod remove;
mod rename;
mod replace;
mod visibility;
mod zoom_to_extent;

pub use add_overlay::add_overlay;
pub use duplicate::duplicate_layer;
pub use remove::remove_selected;
pub use rename::{begin_rename, cancel_rename, commit_rename};
pub use replace::replace_source;
pub use visibility::set_checked;
pub use zoom_to_extent::zoom_to_selection;
