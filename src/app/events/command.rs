use std::path::PathBuf;
use std::time::Instant;

use crate::app::state::Modifiers;
use crate::core::tree::StyleTarget;
use crate::core::NodeId;
use crate::shared::EditorOptions;

/// Commands sind mutierende Operationen, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Selektion & Klicks ───────────────────────────────────────────
    /// Knoten mit Modifikatoren selektieren
    SelectNode { node: NodeId, modifiers: Modifiers },
    /// Klick beim Klick-Timer anmelden (Doppelklick öffnet den Style-Editor)
    RegisterClick {
        node: NodeId,
        modifiers: Modifiers,
        was_selected: bool,
        now: Instant,
    },
    /// Abgelaufenen Einzelklick auflösen
    ResolvePendingClick { now: Instant },
    /// Selektion aufheben
    ClearSelection,
    /// Knoten auf-/zuklappen (lädt Kinder beim ersten Aufklappen)
    ToggleExpanded { node: NodeId },

    // ── Drag-and-Drop ────────────────────────────────────────────────
    /// Drag-Geste starten
    BeginDrag { node: NodeId },
    /// Einfügemarke aktualisieren
    UpdateDropIndicator {
        target: Option<NodeId>,
        pointer_y: f32,
    },
    /// Einfügemarke einer verlassenen Zeile entfernen
    ClearDropIndicator { node: NodeId },
    /// Gezogenen Knoten auf dem Ziel ablegen
    DropDragged { target: Option<NodeId> },
    /// Geste ohne Drop beenden
    EndDrag,
    /// Dateien importieren und beim Ziel einfügen
    ImportFiles {
        target: Option<NodeId>,
        lower: bool,
        paths: Vec<PathBuf>,
    },

    // ── Layer-Verwaltung ─────────────────────────────────────────────
    /// Leeres Overlay anlegen
    AddOverlay,
    /// Import-Dialog anfordern
    RequestImportDialog { target: Option<NodeId> },
    /// Selektion entfernen
    RemoveSelected,
    /// Layer duplizieren
    DuplicateLayer { node: NodeId },
    /// Dialog für neue Datenquelle anfordern
    RequestReplaceSourceDialog { node: NodeId },
    /// Datenquelle ersetzen
    ReplaceLayerSource { node: NodeId, path: PathBuf },
    /// Umbenennen starten
    BeginRename { node: NodeId },
    /// Umbenennen übernehmen
    CommitRename { node: NodeId, name: String },
    /// Umbenennen abbrechen
    CancelRename { node: NodeId },
    /// Sichtbarkeit setzen
    SetChecked { node: NodeId, checked: bool },
    /// Auf Ausdehnung der Selektion zoomen
    ZoomToSelection,

    // ── Dialoge & Anwendungssteuerung ────────────────────────────────
    /// Style-Editor öffnen
    OpenStyleEditor { node: NodeId, target: StyleTarget },
    /// Style-Editor schließen
    CloseStyleEditor,
    /// Meldung schließen
    DismissMessage,
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
