//! Statische Menü-Kataloge pro MenuVariant.
//!
//! Definiert welche Commands in welchem Kontext erscheinen.

use super::preconditions::Precondition;
use super::{CommandId, MenuCatalog, MenuEntry};
use crate::core::NodeId;
use crate::shared::StringResources;

fn command(
    strings: &StringResources,
    id: CommandId,
    key: &str,
    preconditions: Vec<Precondition>,
) -> MenuEntry {
    MenuEntry::Command {
        id,
        label: strings.get(key).to_owned(),
        preconditions,
    }
}

impl MenuCatalog {
    /// Leere Fläche oder Karten-Wurzel.
    pub fn for_empty_area(strings: &StringResources) -> Self {
        MenuCatalog {
            entries: vec![
                command(strings, CommandId::AddOverlay, "ctx_add_overlay", vec![]),
                command(strings, CommandId::ImportLayers, "ctx_import_layers", vec![]),
            ],
        }
    }

    /// Einzelnes Overlay.
    pub fn for_overlay(strings: &StringResources, node: NodeId) -> Self {
        MenuCatalog {
            entries: vec![
                command(
                    strings,
                    CommandId::Rename,
                    "ctx_rename",
                    vec![Precondition::NodeExists(node)],
                ),
                command(
                    strings,
                    CommandId::ImportLayers,
                    "ctx_import_layers",
                    vec![Precondition::AcceptsImport(node)],
                ),
                MenuEntry::Separator,
                command(
                    strings,
                    CommandId::Remove,
                    "ctx_remove",
                    vec![Precondition::SelectionRemovable],
                ),
                MenuEntry::Separator,
                command(strings, CommandId::AddOverlay, "ctx_add_overlay", vec![]),
            ],
        }
    }

    /// Einzelner Layer.
    pub fn for_layer(strings: &StringResources, node: NodeId) -> Self {
        MenuCatalog {
            entries: vec![
                command(
                    strings,
                    CommandId::Rename,
                    "ctx_rename",
                    vec![Precondition::NodeExists(node), Precondition::SingleSelection],
                ),
                command(
                    strings,
                    CommandId::Duplicate,
                    "ctx_duplicate",
                    vec![Precondition::IsLayer(node), Precondition::SingleSelection],
                ),
                command(
                    strings,
                    CommandId::ReplaceSource,
                    "ctx_replace_source",
                    vec![Precondition::IsLayer(node), Precondition::SingleSelection],
                ),
                command(
                    strings,
                    CommandId::ImportLayers,
                    "ctx_import_layers",
                    vec![Precondition::AcceptsImport(node)],
                ),
                MenuEntry::Separator,
                command(
                    strings,
                    CommandId::ZoomToExtent,
                    "ctx_zoom_to_extent",
                    vec![Precondition::SelectionHasExtent],
                ),
                command(
                    strings,
                    CommandId::EditStyle,
                    "ctx_edit_style",
                    vec![Precondition::HasStyles(node)],
                ),
                command(
                    strings,
                    CommandId::EditTextStyle,
                    "ctx_edit_text_style",
                    vec![Precondition::HasStyles(node)],
                ),
                MenuEntry::Separator,
                command(
                    strings,
                    CommandId::Remove,
                    "ctx_remove",
                    vec![Precondition::SelectionRemovable],
                ),
            ],
        }
    }

    /// Composite- oder Zeichen-Style.
    pub fn for_style(strings: &StringResources, node: NodeId) -> Self {
        MenuCatalog {
            entries: vec![
                command(
                    strings,
                    CommandId::Rename,
                    "ctx_rename",
                    vec![Precondition::NodeExists(node)],
                ),
                MenuEntry::Separator,
                command(
                    strings,
                    CommandId::EditStyle,
                    "ctx_edit_style",
                    vec![Precondition::HasStyles(node)],
                ),
                command(
                    strings,
                    CommandId::EditTextStyle,
                    "ctx_edit_text_style",
                    vec![Precondition::HasStyles(node)],
                ),
            ],
        }
    }

    /// Mehrere hervorgehobene Knoten.
    pub fn for_multiple(strings: &StringResources, count: usize) -> Self {
        MenuCatalog {
            entries: vec![
                MenuEntry::Label(format!("{} ✓", count)),
                command(
                    strings,
                    CommandId::ZoomToExtent,
                    "ctx_zoom_to_extent",
                    vec![Precondition::SelectionHasExtent],
                ),
                MenuEntry::Separator,
                command(
                    strings,
                    CommandId::Remove,
                    "ctx_remove",
                    vec![Precondition::SelectionRemovable],
                ),
            ],
        }
    }
}
