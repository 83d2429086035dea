//! Einzelner Knoten der Layer-Liste und das zugehörige Kartenobjekt.

use super::load::PendingLoad;
use crate::core::{LayerId, OverlayKey, OverlayKind, StyleId};

/// Index eines Knotens im `LayerTree`-Arena-Speicher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Roh-Index im Arena-Speicher.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Das Kartenobjekt, das ein Knoten repräsentiert
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConcreteObject {
    /// Wurzel: die Karte selbst (Overlay-Liste)
    Map,
    /// Ein Overlay der Karte
    Overlay {
        /// Schlüssel in der Overlay-Sammlung
        key: OverlayKey,
        /// Art des Overlays
        kind: OverlayKind,
    },
    /// Ein Layer
    Layer(LayerId),
    /// Ein Composite-Style direkt unter einem Feature-Layer
    Style(StyleId),
    /// Ein Zeichen-Style innerhalb eines Composite-Styles
    StyleItem(StyleId),
}

impl ConcreteObject {
    /// Layer-Knoten dürfen in Mehrfachselektionen nicht mit anderen Arten gemischt werden.
    pub fn is_layer(&self) -> bool {
        matches!(self, ConcreteObject::Layer(_))
    }

    /// Overlay mit Layer-Liste, das Drops annimmt (LayerOverlay).
    pub fn is_layer_overlay(&self) -> bool {
        matches!(
            self,
            ConcreteObject::Overlay {
                kind: OverlayKind::Layer,
                ..
            }
        )
    }

    /// Dynamisches Overlay (verbietet manuelles Umsortieren).
    pub fn is_dynamic_overlay(&self) -> bool {
        matches!(
            self,
            ConcreteObject::Overlay {
                kind: OverlayKind::Dynamic,
                ..
            }
        )
    }

    /// Nur Layer haben eine Ausdehnung.
    pub fn has_bounding_box(&self) -> bool {
        self.is_layer()
    }

    /// Alles außer der Wurzel kann grundsätzlich gezogen werden.
    pub fn is_draggable_kind(&self) -> bool {
        !matches!(self, ConcreteObject::Map)
    }

    /// Layer (Composite-Styles) und Composite-Styles (Zeichen-Styles) besitzen eine Style-Liste.
    pub fn owns_style_list(&self) -> bool {
        matches!(self, ConcreteObject::Layer(_) | ConcreteObject::Style(_))
    }

    /// Overlays mit eigener Layer-Liste.
    pub fn owns_layer_list(&self) -> bool {
        matches!(self, ConcreteObject::Overlay { kind, .. } if kind.owns_layers())
    }

    /// Overlay-Schlüssel, falls der Knoten ein Overlay ist.
    pub fn overlay_key(&self) -> Option<&OverlayKey> {
        match self {
            ConcreteObject::Overlay { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Layer-ID, falls der Knoten ein Layer ist.
    pub fn layer_id(&self) -> Option<LayerId> {
        match self {
            ConcreteObject::Layer(id) => Some(*id),
            _ => None,
        }
    }

    /// Style-ID für Composite- und Zeichen-Style-Knoten.
    pub fn style_id(&self) -> Option<StyleId> {
        match self {
            ConcreteObject::Style(id) | ConcreteObject::StyleItem(id) => Some(*id),
            _ => None,
        }
    }
}

/// Position der Einfügemarke beim Drag-over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropIndicator {
    /// Keine Markierung
    #[default]
    None,
    /// Linie an der Oberkante (Einfügen davor)
    Upper,
    /// Linie an der Unterkante (Einfügen danach)
    Lower,
}

/// Eine Zeile der Layer-Liste
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Anzeigename
    pub name: String,
    /// Repräsentiertes Kartenobjekt (None = Platzhalter ohne Objekt)
    pub object: Option<ConcreteObject>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Checkbox-Zustand (Sichtbarkeit)
    pub is_checked: bool,
    /// Hervorhebung als Teil der Selektion
    pub is_selected: bool,
    /// Inline-Umbenennung aktiv
    pub is_renaming: bool,
    /// Aufgeklappt
    pub is_expanded: bool,
    /// Einfügemarke während eines Drags
    pub drop_indicator: DropIndicator,
    pub(crate) load: Option<PendingLoad>,
}

impl TreeNode {
    /// Erstellt einen Knoten ohne Kinder.
    pub fn new(name: impl Into<String>, object: Option<ConcreteObject>) -> Self {
        Self {
            name: name.into(),
            object,
            parent: None,
            children: Vec::new(),
            is_checked: true,
            is_selected: false,
            is_renaming: false,
            is_expanded: false,
            drop_indicator: DropIndicator::None,
            load: None,
        }
    }

    /// Setzt die verzögerte Kinder-Erzeugung (Builder-Stil).
    pub fn with_load(mut self, load: PendingLoad) -> Self {
        self.load = Some(load);
        self
    }

    /// Setzt den Checkbox-Zustand (Builder-Stil).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.is_checked = checked;
        self
    }

    /// Elternknoten (nur zum Nachschlagen).
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Kinder in Anzeigereihenfolge.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Kinder wurden noch nicht erzeugt.
    pub fn has_pending_load(&self) -> bool {
        self.load.is_some()
    }

    /// Kann aufgeklappt werden (Kinder vorhanden oder noch nicht geladen).
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty() || self.load.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_flags_follow_variant() {
        let layer_overlay = ConcreteObject::Overlay {
            key: OverlayKey::new("o"),
            kind: OverlayKind::Layer,
        };
        let dynamic = ConcreteObject::Overlay {
            key: OverlayKey::new("d"),
            kind: OverlayKind::Dynamic,
        };
        let base = ConcreteObject::Overlay {
            key: OverlayKey::new("b"),
            kind: OverlayKind::Base,
        };

        assert!(layer_overlay.is_layer_overlay() && layer_overlay.owns_layer_list());
        assert!(dynamic.is_dynamic_overlay() && dynamic.owns_layer_list());
        assert!(!base.owns_layer_list());
        assert!(ConcreteObject::Layer(LayerId(1)).has_bounding_box());
        assert!(ConcreteObject::Style(StyleId(1)).owns_style_list());
        assert!(!ConcreteObject::StyleItem(StyleId(1)).owns_style_list());
        assert!(!ConcreteObject::Map.is_draggable_kind());
    }
}
