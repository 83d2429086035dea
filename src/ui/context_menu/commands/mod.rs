//! Validiertes Context-Menu-System: Command-Definitionen, Preconditions und Kataloge.
//!
//! Architektur:
//! - `CommandId`: Eindeutige Identifikation jedes Menü-Eintrags (mod.rs)
//! - `Precondition`: Enum mit Vorbedingungen (preconditions.rs)
//! - `MenuCatalog`: Statischer Katalog pro `MenuVariant` (catalogs.rs)
//! - `validate_entries()`: Filtert nur gültige Commands (validation.rs)
//!
//! Garantie: Nur Commands mit erfüllten Preconditions werden gerendert.

mod catalogs;
pub mod preconditions;
mod validation;

pub use preconditions::{Precondition, PreconditionContext};
pub use validation::{validate_entries, ValidatedEntry};

use crate::app::AppIntent;
use crate::core::tree::StyleTarget;
use crate::core::NodeId;

// =============================================================================
// CommandId: Eindeutige Identifikation jedes Menü-Befehls
// =============================================================================

/// Eindeutige ID für jeden Context-Menu-Befehl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Leeres Overlay anlegen
    AddOverlay,
    /// Layer aus Dateien importieren
    ImportLayers,
    /// Knoten umbenennen
    Rename,
    /// Layer duplizieren
    Duplicate,
    /// Datenquelle ersetzen
    ReplaceSource,
    /// Auf Ausdehnung zoomen
    ZoomToExtent,
    /// Flächen-/Linien-Style bearbeiten
    EditStyle,
    /// Beschriftungs-Style bearbeiten
    EditTextStyle,
    /// Selektion entfernen
    Remove,
}

/// Ein einzelner Eintrag im Menü-Katalog.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    /// Überschrift / Label
    Label(String),
    /// Trennlinie
    Separator,
    /// Befehl mit optionalen Vorbedingungen
    Command {
        id: CommandId,
        label: String,
        preconditions: Vec<Precondition>,
    },
}

/// Katalog für eine bestimmte `MenuVariant`: definiert Reihenfolge und Preconditions.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    pub entries: Vec<MenuEntry>,
}

/// Kontext für die Intent-Erzeugung.
pub struct IntentContext {
    /// Knoten, auf dem das Menü geöffnet wurde
    pub node: Option<NodeId>,
}

impl CommandId {
    /// Erzeugt den passenden `AppIntent`; knotenbezogene Befehle brauchen einen Knoten.
    pub fn to_intent(&self, ctx: &IntentContext) -> Option<AppIntent> {
        let intent = match self {
            Self::AddOverlay => AppIntent::AddOverlayRequested,
            Self::ImportLayers => AppIntent::ImportLayersRequested { target: ctx.node },
            Self::Rename => AppIntent::RenameRequested { node: ctx.node? },
            Self::Duplicate => AppIntent::DuplicateLayerRequested { node: ctx.node? },
            Self::ReplaceSource => AppIntent::ReplaceLayerSourceRequested { node: ctx.node? },
            Self::ZoomToExtent => AppIntent::ZoomToSelectionRequested,
            Self::EditStyle => AppIntent::EditStyleRequested {
                node: ctx.node?,
                target: StyleTarget::Drawing,
            },
            Self::EditTextStyle => AppIntent::EditStyleRequested {
                node: ctx.node?,
                target: StyleTarget::Text,
            },
            Self::Remove => AppIntent::RemoveSelectedRequested,
        };
        Some(intent)
    }
}

#[cfg(test)]
mod tests;
