use super::validation::tidy;
use super::*;
use crate::app::AppIntent;
use crate::core::tree::{build_tree, ensure_loaded_recursive};
use crate::core::{
    Extent, Layer, LayerSource, LayerTree, MapDocument, NodeId, OverlayKey, OverlayKind, StyleKind,
    ZoomRange,
};
use crate::shared::StringResources;
use glam::DVec2;

/// Overlay "main" mit Layer "Straßen" (mit Style und Ausdehnung) und "Leer".
fn fixture() -> (MapDocument, LayerTree, NodeId, NodeId, NodeId) {
    let mut doc = MapDocument::new("Karte");
    let key = OverlayKey::new("main");
    doc.add_overlay(key.clone(), "Main", OverlayKind::Layer);
    let roads = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &key,
        Layer::feature(roads, "Straßen", LayerSource::InMemory).with_bounding_box(
            Extent::from_corners(DVec2::ZERO, DVec2::new(1.0, 1.0)),
        ),
    );
    doc.add_composite_style(
        roads,
        "Alle",
        ZoomRange::all(),
        &[("Linie", StyleKind::Line)],
    );
    let empty = doc.new_layer_id();
    doc.add_layer_to_overlay(&key, Layer::raster(empty, "Leer", LayerSource::InMemory));

    let mut tree = build_tree(&doc);
    let root = tree.root();
    ensure_loaded_recursive(&mut tree, &doc, root);
    let overlay = tree.children(root)[0];
    let roads_node = tree.children(overlay)[0];
    let empty_node = tree.children(overlay)[1];
    (doc, tree, overlay, roads_node, empty_node)
}

fn commands(entries: &[ValidatedEntry]) -> Vec<CommandId> {
    entries
        .iter()
        .filter_map(|e| match e {
            ValidatedEntry::Command { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn layer_menu_offers_all_single_layer_commands() {
    let (doc, tree, _, roads, _) = fixture();
    let strings = StringResources::default();
    let highlighted = [roads];
    let ctx = PreconditionContext {
        tree: &tree,
        document: &doc,
        highlighted: &highlighted,
    };

    let entries = validate_entries(
        &MenuCatalog::for_layer(&strings, roads),
        &ctx,
        &IntentContext { node: Some(roads) },
    );

    assert_eq!(
        commands(&entries),
        vec![
            CommandId::Rename,
            CommandId::Duplicate,
            CommandId::ReplaceSource,
            CommandId::ImportLayers,
            CommandId::ZoomToExtent,
            CommandId::EditStyle,
            CommandId::EditTextStyle,
            CommandId::Remove,
        ]
    );
}

#[test]
fn layer_without_styles_or_extent_hides_those_groups() {
    let (doc, tree, _, _, empty) = fixture();
    let strings = StringResources::default();
    let highlighted = [empty];
    let ctx = PreconditionContext {
        tree: &tree,
        document: &doc,
        highlighted: &highlighted,
    };

    let entries = validate_entries(
        &MenuCatalog::for_layer(&strings, empty),
        &ctx,
        &IntentContext { node: Some(empty) },
    );

    assert!(!commands(&entries).contains(&CommandId::EditStyle));
    assert!(!commands(&entries).contains(&CommandId::ZoomToExtent));
    // Keine doppelte Trennlinie an der Stelle der leeren Gruppe
    let separators = entries
        .iter()
        .filter(|e| matches!(e, ValidatedEntry::Separator))
        .count();
    assert_eq!(separators, 1);
}

#[test]
fn multi_selection_disables_single_node_commands() {
    let (doc, tree, _, roads, empty) = fixture();
    let highlighted = [roads, empty];
    let ctx = PreconditionContext {
        tree: &tree,
        document: &doc,
        highlighted: &highlighted,
    };

    assert!(!Precondition::SingleSelection.is_valid(&ctx));
    assert!(Precondition::SelectionHasExtent.is_valid(&ctx));
    assert!(Precondition::SelectionRemovable.is_valid(&ctx));
}

#[test]
fn import_is_accepted_on_layer_overlay_and_its_layers() {
    let (doc, tree, overlay, roads, _) = fixture();
    let ctx = PreconditionContext {
        tree: &tree,
        document: &doc,
        highlighted: &[],
    };

    assert!(Precondition::AcceptsImport(overlay).is_valid(&ctx));
    assert!(Precondition::AcceptsImport(roads).is_valid(&ctx));
    assert!(!Precondition::AcceptsImport(tree.root()).is_valid(&ctx));
}

#[test]
fn node_commands_need_a_node() {
    let ctx = IntentContext { node: None };

    assert_eq!(CommandId::Rename.to_intent(&ctx), None);
    assert_eq!(
        CommandId::ImportLayers.to_intent(&ctx),
        Some(AppIntent::ImportLayersRequested { target: None })
    );
}

#[test]
fn tidy_drops_orphaned_labels_and_separators() {
    let entries = vec![
        ValidatedEntry::Separator,
        ValidatedEntry::Label("Leer".into()),
        ValidatedEntry::Separator,
        ValidatedEntry::Command {
            id: CommandId::AddOverlay,
            label: "Add".into(),
            intent: Box::new(AppIntent::AddOverlayRequested),
        },
        ValidatedEntry::Separator,
    ];

    let tidied = tidy(entries);

    assert_eq!(tidied.len(), 1);
    assert!(matches!(
        tidied[0],
        ValidatedEntry::Command {
            id: CommandId::AddOverlay,
            ..
        }
    ));
}
