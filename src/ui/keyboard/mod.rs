//! Keyboard-Shortcuts der Layer-Liste.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::NodeId;

/// Zustand, den die Shortcuts zur Auswahl des Intents brauchen
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KeyboardContext {
    /// Einzelknoten der Selektion
    pub selected_item: Option<NodeId>,
    /// Irgendein Knoten ist hervorgehoben
    pub has_selection: bool,
    /// Drag-Geste läuft
    pub dragging: bool,
    /// Inline-Umbenennung hat den Fokus
    pub renaming: bool,
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(crate) fn collect_keyboard_intents(ctx: &egui::Context, state: KeyboardContext) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.renaming {
        return events;
    }

    let (key_escape, key_delete, key_f2, key_plus) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::F2),
            i.modifiers.command && i.key_pressed(egui::Key::Plus),
        )
    });

    if key_escape {
        if state.dragging {
            events.push(AppIntent::DragCancelled);
        } else if state.has_selection {
            events.push(AppIntent::EmptySpaceClicked);
        }
    }

    if key_delete && state.has_selection && !state.dragging {
        events.push(AppIntent::RemoveSelectedRequested);
    }

    if key_f2 {
        if let Some(node) = state.selected_item {
            events.push(AppIntent::RenameRequested { node });
        }
    }

    if key_plus && state.has_selection {
        events.push(AppIntent::ZoomToSelectionRequested);
    }

    events
}

#[cfg(test)]
mod tests;
