//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod click_timer;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Sitzungszustand (Dokument, Layer-Liste, Selektion, Drag).
pub mod state;
pub mod use_cases;

pub use click_timer::{ClickResolution, ClickTimer};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, DragState, Modifiers, SelectionState, UiState};
