use crate::core::NodeId;

/// Zustand einer laufenden Drag-and-Drop-Geste in der Layer-Liste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    /// Gezogener Knoten (None = keine Geste aktiv)
    pub dragged: Option<NodeId>,
    /// Zeile, auf der aktuell eine Einfügemarke angezeigt wird
    pub indicator_target: Option<NodeId>,
    /// Zeiger lag beim letzten Drag-over in der unteren Zeilenhälfte
    pub show_lower_line: bool,
    /// Zeiger lag beim letzten Drag-over nahe einer Zeilenkante; Drag-Leave wird ignoriert
    pub stop_drag_leave: bool,
}

impl DragState {
    /// Erstellt einen leeren Drag-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Knoten gezogen wird.
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Beendet die Geste und setzt alle Felder zurück.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
