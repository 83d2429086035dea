//! Kontextmenü der Layer-Liste.
//!
//! Struktur:
//! - `mod.rs`: MenuVariant, Bestimmung der Variante und Rendering
//! - `commands/`: CommandId, Preconditions, Kataloge und Validierung

pub mod commands;

use commands::{
    validate_entries, IntentContext, MenuCatalog, PreconditionContext, ValidatedEntry,
};

use crate::app::{AppIntent, AppState};
use crate::core::{ConcreteObject, NodeId};

/// Kontextabhängige Menü-Variante basierend auf Selektion und Knoten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    /// Rechtsklick auf leere Fläche oder Karten-Wurzel
    EmptyArea,
    /// Rechtsklick auf ein Overlay
    Overlay { node: NodeId },
    /// Rechtsklick auf einen Layer
    Layer { node: NodeId },
    /// Rechtsklick auf einen Composite- oder Zeichen-Style
    Style { node: NodeId },
    /// Rechtsklick innerhalb einer Mehrfachselektion
    MultipleSelected { count: usize },
}

impl MenuVariant {
    fn node(&self) -> Option<NodeId> {
        match self {
            Self::Overlay { node } | Self::Layer { node } | Self::Style { node } => Some(*node),
            Self::EmptyArea | Self::MultipleSelected { .. } => None,
        }
    }
}

/// Bestimmt die MenuVariant für einen Rechtsklick auf `clicked`.
pub fn determine_menu_variant(state: &AppState, clicked: Option<NodeId>) -> MenuVariant {
    let Some(node) = clicked else {
        return MenuVariant::EmptyArea;
    };
    let highlighted = state.selection.highlighted();
    if highlighted.len() >= 2 && highlighted.contains(&node) {
        return MenuVariant::MultipleSelected {
            count: highlighted.len(),
        };
    }
    match state.tree.object(node) {
        None | Some(ConcreteObject::Map) => MenuVariant::EmptyArea,
        Some(ConcreteObject::Overlay { .. }) => MenuVariant::Overlay { node },
        Some(ConcreteObject::Layer(_)) => MenuVariant::Layer { node },
        Some(ConcreteObject::Style(_) | ConcreteObject::StyleItem(_)) => {
            MenuVariant::Style { node }
        }
    }
}

/// Validierte Einträge für eine Variante.
pub fn menu_entries(state: &AppState, variant: MenuVariant) -> Vec<ValidatedEntry> {
    let strings = &state.strings;
    let catalog = match variant {
        MenuVariant::EmptyArea => MenuCatalog::for_empty_area(strings),
        MenuVariant::Overlay { node } => MenuCatalog::for_overlay(strings, node),
        MenuVariant::Layer { node } => MenuCatalog::for_layer(strings, node),
        MenuVariant::Style { node } => MenuCatalog::for_style(strings, node),
        MenuVariant::MultipleSelected { count } => MenuCatalog::for_multiple(strings, count),
    };
    let highlighted = state.selection.highlighted();
    let precondition_ctx = PreconditionContext {
        tree: &state.tree,
        document: &state.document,
        highlighted: &highlighted,
    };
    validate_entries(
        &catalog,
        &precondition_ctx,
        &IntentContext {
            node: variant.node(),
        },
    )
}

/// Rendert das Kontextmenü einer Zeile oder der leeren Fläche.
pub fn render_context_menu(
    response: &egui::Response,
    state: &AppState,
    clicked: Option<NodeId>,
    events: &mut Vec<AppIntent>,
) {
    response.context_menu(|ui| {
        let variant = determine_menu_variant(state, clicked);
        for entry in menu_entries(state, variant) {
            match entry {
                ValidatedEntry::Label(text) => {
                    ui.label(text);
                }
                ValidatedEntry::Separator => {
                    ui.separator();
                }
                ValidatedEntry::Command { label, intent, .. } => {
                    if ui.button(label).clicked() {
                        events.push(*intent);
                        ui.close();
                    }
                }
            }
        }
    });
}
