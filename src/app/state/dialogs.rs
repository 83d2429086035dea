use crate::core::tree::StyleTarget;
use crate::core::{LayerId, NodeId, StyleId};

/// Offene Anforderung an den Style-Editor-Dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEditorRequest {
    /// Layer, dessen Style bearbeitet wird
    pub layer_id: LayerId,
    /// Zu bearbeitender Zeichen-Style
    pub style_id: StyleId,
    /// Knoten des Styles in der Layer-Liste
    pub node: NodeId,
    /// Flächen-/Linien-Editor oder Text-Editor
    pub target: StyleTarget,
}

/// Ausstehender Datei-Dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogRequest {
    /// Layer aus Dateien importieren (Ziel-Knoten optional)
    ImportLayers {
        /// Overlay- oder Layer-Knoten, vor/in den importiert wird
        target: Option<NodeId>,
    },
    /// Datenquelle eines Layers ersetzen
    ReplaceSource {
        /// Layer-Knoten
        node: NodeId,
    },
}

/// UI-bezogener Anwendungszustand (Dialoge, Meldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Offener Style-Editor
    pub style_editor: Option<StyleEditorRequest>,
    /// Anzuzeigende Meldung (Message-Box)
    pub message: Option<String>,
    /// Ausstehender Datei-Dialog
    pub file_dialog: Option<FileDialogRequest>,
    /// Optionen-Dialog sichtbar
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
