//! Map Layer Editor Library.
//! Layer-Liste einer GIS-Karte (Baum, Selektion, Drag-and-Drop) als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Modifiers, UiState};
pub use core::{
    ConcreteObject, DropIndicator, Extent, Layer, LayerId, LayerTree, MapDocument, NodeId,
    Overlay, OverlayKey, OverlayKind, StyleId,
};
pub use shared::{EditorOptions, StringResources};
