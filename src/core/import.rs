//! Erzeugt Layer aus Dateipfaden (Drag-and-Drop aus dem Dateisystem, Import-Dialog).
//!
//! Das Einlesen der Dateiformate selbst übernimmt die Mapping-Engine; hier
//! wird nur anhand der Endung entschieden, welche Art Layer entsteht.

use super::{Layer, LayerId, LayerSource, MapDocument, StyleKind, ZoomRange};
use std::path::Path;

/// Dateiendungen, aus denen Feature-Layer entstehen.
pub const FEATURE_EXTENSIONS: &[&str] = &["shp", "geojson", "json", "gpx", "kml"];
/// Dateiendungen, aus denen Raster-Layer entstehen.
pub const RASTER_EXTENSIONS: &[&str] = &["tif", "tiff", "png", "jpg", "jpeg", "ecw", "sid"];

/// Art des Layers, der aus einer Datei entstehen würde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Vektordaten
    Feature,
    /// Rasterdaten
    Raster,
}

/// Bestimmt die Layer-Art anhand der Dateiendung (Groß-/Kleinschreibung egal).
pub fn import_kind(path: &Path) -> Option<ImportKind> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    if FEATURE_EXTENSIONS.contains(&extension.as_str()) {
        Some(ImportKind::Feature)
    } else if RASTER_EXTENSIONS.contains(&extension.as_str()) {
        Some(ImportKind::Raster)
    } else {
        None
    }
}

fn layer_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Erzeugt einen Layer aus einer Datei und registriert ihn im Dokument.
///
/// Der Layer wird keinem Overlay zugeordnet; Feature-Layer bekommen einen
/// Standard-Style über alle Zoomstufen.
pub fn import_layer(doc: &mut MapDocument, path: &Path) -> Option<LayerId> {
    let Some(kind) = import_kind(path) else {
        log::warn!("Nicht unterstütztes Dateiformat übersprungen: {}", path.display());
        return None;
    };

    let id = doc.new_layer_id();
    let name = layer_name(path);
    let source = LayerSource::File(path.to_path_buf());

    match kind {
        ImportKind::Feature => {
            doc.insert_layer(Layer::feature(id, name, source));
            doc.add_composite_style(
                id,
                "Standard",
                ZoomRange::all(),
                &[
                    ("Fläche", StyleKind::Area),
                    ("Linie", StyleKind::Line),
                    ("Punkt", StyleKind::Point),
                ],
            );
        }
        ImportKind::Raster => {
            doc.insert_layer(Layer::raster(id, name, source));
        }
    }

    log::info!("Layer {} aus {} erzeugt", id, path.display());
    Some(id)
}

/// Erzeugt Layer aus allen unterstützten Dateien in Eingabereihenfolge.
pub fn import_layers<P: AsRef<Path>>(doc: &mut MapDocument, paths: &[P]) -> Vec<LayerId> {
    paths
        .iter()
        .filter_map(|path| import_layer(doc, path.as_ref()))
        .collect()
}

/// Ersetzt die Datenquelle eines Layers; Position und Styles bleiben erhalten.
///
/// Gibt `false` zurück, wenn der Layer fehlt oder die Datei nicht zur Layer-Art passt.
pub fn replace_layer_source(doc: &mut MapDocument, id: LayerId, path: &Path) -> bool {
    let Some(kind) = import_kind(path) else {
        log::warn!("Nicht unterstütztes Dateiformat: {}", path.display());
        return false;
    };
    let Some(layer) = doc.layer_mut(id) else {
        return false;
    };
    let matches_kind = match kind {
        ImportKind::Feature => layer.is_feature_layer(),
        ImportKind::Raster => !layer.is_feature_layer(),
    };
    if !matches_kind {
        log::warn!(
            "Datei {} passt nicht zur Art von Layer {}",
            path.display(),
            id
        );
        return false;
    }

    layer.source = LayerSource::File(path.to_path_buf());
    layer.name = layer_name(path);
    layer.bounding_box = None;
    true
}
