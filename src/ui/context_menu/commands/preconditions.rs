//! Precondition-System für Context-Menu-Befehle.
//!
//! Prüfbare Vorbedingungen als Enum (kein dyn Trait, performant).

use crate::core::{ConcreteObject, LayerTree, MapDocument, NodeId};

/// Prüfbare Vorbedingung für einen Context-Menu-Befehl.
#[derive(Debug, Clone, Copy)]
pub enum Precondition {
    /// Knoten existiert noch in der Layer-Liste
    NodeExists(NodeId),
    /// Knoten ist ein Layer
    IsLayer(NodeId),
    /// Knoten ist ein Layer-Overlay oder ein Layer darin (Import-Ziel)
    AcceptsImport(NodeId),
    /// Unter dem Knoten gibt es Styles
    HasStyles(NodeId),
    /// Höchstens ein Knoten ist hervorgehoben
    SingleSelection,
    /// Mindestens ein hervorgehobener Layer hat eine Ausdehnung
    SelectionHasExtent,
    /// Hervorgehobene Knoten enthalten Layer oder Overlays
    SelectionRemovable,
}

/// Kontext für die Precondition-Auswertung: alle nötigen Daten aus dem aktuellen State.
pub struct PreconditionContext<'a> {
    pub tree: &'a LayerTree,
    pub document: &'a MapDocument,
    /// Hervorgehobene Knoten in Selektionsreihenfolge
    pub highlighted: &'a [NodeId],
}

impl Precondition {
    /// Prüft ob die Vorbedingung im gegebenen Kontext erfüllt ist.
    pub fn is_valid(&self, ctx: &PreconditionContext) -> bool {
        match self {
            Self::NodeExists(id) => ctx.tree.contains(*id),

            Self::IsLayer(id) => ctx.tree.object(*id).is_some_and(ConcreteObject::is_layer),

            Self::AcceptsImport(id) => match ctx.tree.object(*id) {
                Some(object) if object.is_layer_overlay() => true,
                Some(ConcreteObject::Layer(_)) => ctx
                    .tree
                    .parent(*id)
                    .and_then(|parent| ctx.tree.object(parent))
                    .is_some_and(ConcreteObject::is_layer_overlay),
                _ => false,
            },

            Self::HasStyles(id) => match ctx.tree.object(*id) {
                Some(ConcreteObject::Layer(layer_id)) => ctx
                    .document
                    .layer(*layer_id)
                    .is_some_and(|layer| !layer.styles().is_empty()),
                Some(ConcreteObject::Style(_) | ConcreteObject::StyleItem(_)) => true,
                _ => false,
            },

            Self::SingleSelection => ctx.highlighted.len() <= 1,

            Self::SelectionHasExtent => ctx.highlighted.iter().any(|id| {
                ctx.tree
                    .object(*id)
                    .and_then(ConcreteObject::layer_id)
                    .and_then(|layer_id| ctx.document.layer(layer_id))
                    .is_some_and(|layer| layer.get_bounding_box().is_some())
            }),

            Self::SelectionRemovable => ctx.highlighted.iter().any(|id| {
                matches!(
                    ctx.tree.object(*id),
                    Some(ConcreteObject::Layer(_) | ConcreteObject::Overlay { .. })
                )
            }),
        }
    }
}
