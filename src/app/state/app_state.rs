use crate::app::click_timer::ClickTimer;
use crate::app::CommandLog;
use crate::core::tree::build_tree;
use crate::core::{LayerTree, MapDocument};
use crate::shared::{EditorOptions, StringResources};

use super::{DragState, SelectionState, UiState};

/// Hauptzustand der Anwendung (Sitzung zum geöffneten Kartendokument)
pub struct AppState {
    /// Geöffnetes Kartendokument
    pub document: MapDocument,
    /// Layer-Liste über dem Dokument
    pub tree: LayerTree,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Drag-and-Drop-Geste
    pub drag: DragState,
    /// Einzel-/Doppelklick-Unterscheidung
    pub clicks: ClickTimer,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Oberflächentexte
    pub strings: StringResources,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit einer leeren Karte.
    pub fn new() -> Self {
        Self::with_document(MapDocument::new("Karte"))
    }

    /// Erstellt einen App-State für ein bestehendes Dokument.
    ///
    /// Selektion und Drag-Zustand gehören zur Sitzung und beginnen leer.
    pub fn with_document(document: MapDocument) -> Self {
        let options = EditorOptions::default();
        let tree = build_tree(&document);
        Self {
            document,
            tree,
            selection: SelectionState::new(),
            drag: DragState::new(),
            clicks: ClickTimer::new(options.double_click_interval()),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            strings: StringResources::default(),
            should_exit: false,
        }
    }

    /// Übernimmt neue Optionen (inklusive Doppelklick-Intervall).
    pub fn apply_options(&mut self, options: EditorOptions) {
        self.clicks = ClickTimer::new(options.double_click_interval());
        self.options = options;
    }

    /// Gibt die Anzahl der Overlays zurück (für UI-Anzeige)
    pub fn overlay_count(&self) -> usize {
        self.document.overlays.len()
    }

    /// Gibt die Anzahl der Layer zurück (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.document.layer_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
