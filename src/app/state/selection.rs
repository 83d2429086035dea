use crate::core::NodeId;
use indexmap::IndexSet;

/// Gedrückte Modifier-Tasten beim Klick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift: Bereichsselektion
    pub shift: bool,
    /// Ctrl (macOS: Cmd): Einzelselektion umschalten
    pub ctrl: bool,
}

impl Modifiers {
    /// Keine Modifier
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    /// Nur Shift
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    /// Nur Ctrl
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
    /// Shift + Ctrl
    pub const SHIFT_CTRL: Self = Self {
        shift: true,
        ctrl: true,
    };

    /// Gibt `true` zurück, wenn keine Modifier gedrückt sind.
    pub fn is_none(&self) -> bool {
        !self.shift && !self.ctrl
    }
}

/// Auswahlbezogener Zustand der Layer-Liste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Zuletzt aktivierter Knoten; Anker für Shift-Bereichsselektion
    pub selected_item: Option<NodeId>,
    /// Mehrfachselektion (Einfügereihenfolge bleibt für den Anker erhalten)
    pub selected_items: IndexSet<NodeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle hervorgehobenen Knoten: die Mehrfachselektion, oder der Einzelknoten
    /// solange keine Mehrfachselektion besteht.
    pub fn highlighted(&self) -> Vec<NodeId> {
        if self.selected_items.is_empty() {
            self.selected_item.into_iter().collect()
        } else {
            self.selected_items.iter().copied().collect()
        }
    }

    /// Prüft ob der Knoten hervorgehoben ist.
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        if self.selected_items.is_empty() {
            self.selected_item == Some(id)
        } else {
            self.selected_items.contains(&id)
        }
    }

    /// Hebt die gesamte Selektion auf.
    pub fn clear(&mut self) {
        self.selected_item = None;
        self.selected_items.clear();
    }

    /// Entfernt einen Knoten aus der Selektion (z.B. nach dem Löschen).
    pub fn forget(&mut self, id: NodeId) {
        self.selected_items.shift_remove(&id);
        if self.selected_item == Some(id) {
            self.selected_item = self.selected_items.last().copied();
        }
    }
}
