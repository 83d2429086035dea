//! Beispielkarte für den Start ohne Projektdatei und für Benchmarks.

use super::{
    Extent, Layer, LayerSource, MapDocument, OverlayKey, OverlayKind, StyleKind, ZoomRange,
};
use glam::DVec2;

fn extent(min: (f64, f64), max: (f64, f64)) -> Extent {
    Extent::from_corners(DVec2::new(min.0, min.1), DVec2::new(max.0, max.1))
}

/// Erzeugt eine kleine Karte mit Basiskarte, zwei Layer-Overlays und einem dynamischen Overlay.
pub fn sample_document() -> MapDocument {
    let mut doc = MapDocument::new("Beispielkarte");

    doc.add_overlay(OverlayKey::new("base"), "Basiskarte", OverlayKind::Base);

    let traffic = OverlayKey::new("traffic");
    doc.add_overlay(traffic.clone(), "Verkehr", OverlayKind::Layer);

    let roads = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &traffic,
        Layer::feature(roads, "Straßen", LayerSource::InMemory)
            .with_bounding_box(extent((8.0, 47.0), (9.5, 48.2))),
    );
    doc.add_composite_style(
        roads,
        "Hauptstraßen",
        ZoomRange::new(1, 12),
        &[("Linie", StyleKind::Line), ("Name", StyleKind::IconText)],
    );
    doc.add_composite_style(
        roads,
        "Nebenstraßen",
        ZoomRange::new(13, 20),
        &[
            ("Randlinie", StyleKind::Line),
            ("Fläche", StyleKind::Area),
            ("Name", StyleKind::TextFilter),
        ],
    );

    let water = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &traffic,
        Layer::feature(water, "Gewässer", LayerSource::InMemory)
            .with_bounding_box(extent((8.5, 47.3), (9.8, 47.9))),
    );
    doc.add_composite_style(
        water,
        "Standard",
        ZoomRange::all(),
        &[("Fläche", StyleKind::Area), ("Ufer", StyleKind::Line)],
    );

    let buildings = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &traffic,
        Layer::feature(buildings, "Gebäude", LayerSource::InMemory),
    );
    doc.add_composite_style(
        buildings,
        "Grundriss",
        ZoomRange::new(15, 20),
        &[("Fläche", StyleKind::Area)],
    );

    let imagery = OverlayKey::new("imagery");
    doc.add_overlay(imagery.clone(), "Luftbilder", OverlayKind::Layer);
    let ortho = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &imagery,
        Layer::raster(ortho, "Orthofoto 2024", LayerSource::InMemory)
            .with_bounding_box(extent((8.2, 47.1), (8.9, 47.6))),
    );

    let tracking = OverlayKey::new("tracking");
    doc.add_overlay(tracking.clone(), "GPS-Tracking", OverlayKind::Dynamic);
    let track = doc.new_layer_id();
    doc.add_layer_to_overlay(
        &tracking,
        Layer::feature(track, "Fahrzeuge", LayerSource::InMemory),
    );

    doc
}
