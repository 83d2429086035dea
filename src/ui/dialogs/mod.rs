//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod message;
mod style_editor;

pub use file_dialogs::handle_file_dialogs;
pub use message::show_message;
pub use style_editor::show_style_editor;
