use std::path::PathBuf;
use std::time::Instant;

use crate::app::state::Modifiers;
use crate::core::tree::StyleTarget;
use crate::core::NodeId;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // ── Maus in der Layer-Liste ──────────────────────────────────────
    /// Maustaste über einem Knoten losgelassen
    NodeClicked {
        node: NodeId,
        modifiers: Modifiers,
        now: Instant,
    },
    /// Klick auf leere Fläche der Layer-Liste
    EmptySpaceClicked,
    /// Frame-Takt für die Einzel-/Doppelklick-Unterscheidung
    ClickTimerTick { now: Instant },
    /// Auf-/Zuklappen eines Knotens
    NodeExpandToggled { node: NodeId },
    /// Rechtsklick auf einen Knoten außerhalb der Selektion
    NodeContextRequested { node: NodeId },

    // ── Drag-and-Drop ────────────────────────────────────────────────
    /// Zeiger hat die Drag-Schwelle über einem Knoten überschritten
    DragStarted { node: NodeId },
    /// Zeiger bewegt sich über eine Zeile (`pointer_y` relativ zur Zeilenoberkante)
    DragOver {
        target: Option<NodeId>,
        pointer_y: f32,
    },
    /// Zeiger verlässt eine Zeile
    DragLeft { node: NodeId },
    /// Maustaste über einem Ziel losgelassen
    DropRequested { target: Option<NodeId> },
    /// Geste abgebrochen (Escape, Zeiger außerhalb)
    DragCancelled,
    /// Dateien aus dem Betriebssystem abgelegt
    FilesDropped {
        target: Option<NodeId>,
        pointer_y: f32,
        paths: Vec<PathBuf>,
    },

    // ── Menü / Kontextmenü ───────────────────────────────────────────
    /// Neues leeres Overlay anlegen
    AddOverlayRequested,
    /// Datei-Dialog zum Layer-Import öffnen
    ImportLayersRequested { target: Option<NodeId> },
    /// Dateien im Import-Dialog gewählt
    LayerFilesSelected {
        target: Option<NodeId>,
        paths: Vec<PathBuf>,
    },
    /// Selektierte Layer bzw. Overlays entfernen
    RemoveSelectedRequested,
    /// Layer duplizieren
    DuplicateLayerRequested { node: NodeId },
    /// Datei-Dialog zum Ersetzen der Datenquelle öffnen
    ReplaceLayerSourceRequested { node: NodeId },
    /// Neue Datenquelle im Dialog gewählt
    ReplaceSourceSelected { node: NodeId, path: PathBuf },
    /// Umbenennen starten
    RenameRequested { node: NodeId },
    /// Umbenennen bestätigt
    RenameCommitted { node: NodeId, name: String },
    /// Umbenennen abgebrochen
    RenameCancelled { node: NodeId },
    /// Checkbox umgeschaltet
    CheckToggled { node: NodeId, checked: bool },
    /// Auf Ausdehnung der Selektion zoomen
    ZoomToSelectionRequested,
    /// Style-Editor öffnen
    EditStyleRequested { node: NodeId, target: StyleTarget },

    // ── Dialoge & Anwendung ──────────────────────────────────────────
    /// Style-Editor geschlossen
    StyleEditorClosed,
    /// Meldung bestätigt
    MessageDismissed,
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
