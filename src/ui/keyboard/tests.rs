use super::*;
use crate::core::tree::build_tree;
use crate::core::MapDocument;

fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, state: KeyboardContext) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        events = collect_keyboard_intents(ctx, state);
    });

    events
}

fn some_node() -> NodeId {
    build_tree(&MapDocument::new("Karte")).root()
}

#[test]
fn escape_cancels_running_drag_before_clearing_selection() {
    let state = KeyboardContext {
        has_selection: true,
        dragging: true,
        ..Default::default()
    };

    let events = collect_with_key_event(key_press(egui::Key::Escape, egui::Modifiers::NONE), state);

    assert_eq!(events, vec![AppIntent::DragCancelled]);
}

#[test]
fn escape_clears_selection_when_idle() {
    let state = KeyboardContext {
        has_selection: true,
        ..Default::default()
    };

    let events = collect_with_key_event(key_press(egui::Key::Escape, egui::Modifiers::NONE), state);

    assert_eq!(events, vec![AppIntent::EmptySpaceClicked]);
}

#[test]
fn delete_removes_selection() {
    let state = KeyboardContext {
        has_selection: true,
        ..Default::default()
    };

    let events = collect_with_key_event(key_press(egui::Key::Delete, egui::Modifiers::NONE), state);

    assert_eq!(events, vec![AppIntent::RemoveSelectedRequested]);
}

#[test]
fn f2_starts_rename_of_selected_item() {
    let node = some_node();
    let state = KeyboardContext {
        selected_item: Some(node),
        has_selection: true,
        ..Default::default()
    };

    let events = collect_with_key_event(key_press(egui::Key::F2, egui::Modifiers::NONE), state);

    assert_eq!(events, vec![AppIntent::RenameRequested { node }]);
}

#[test]
fn shortcuts_are_ignored_while_renaming() {
    let state = KeyboardContext {
        has_selection: true,
        renaming: true,
        ..Default::default()
    };

    let events = collect_with_key_event(key_press(egui::Key::Delete, egui::Modifiers::NONE), state);

    assert!(events.is_empty());
}
