//! Layer: eine einzelne Datenquelle mit Darstellung.

use super::{Extent, LayerId, StyleId, ZoomLevelSet};
use std::path::{Path, PathBuf};

/// Herkunft der Layer-Daten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    /// Datei auf dem Datenträger (Shapefile, GeoJSON, Rasterbild, …)
    File(PathBuf),
    /// Im Speicher erzeugter Layer (z.B. Zeichen- oder Messergebnisse)
    InMemory,
}

impl LayerSource {
    /// Pfad der Quelldatei, falls vorhanden.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LayerSource::File(path) => Some(path),
            LayerSource::InMemory => None,
        }
    }
}

/// Art eines Layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKind {
    /// Vektor-Layer mit Styles pro Zoomstufe
    Feature {
        /// Zoomstufen mit ihren Style-Bindungen
        zoom_levels: ZoomLevelSet,
        /// Composite-Styles in Anzeigereihenfolge
        styles: Vec<StyleId>,
    },
    /// Raster-Layer (Bilddaten, keine Styles)
    Raster,
}

/// Ein Layer der Karte; gehört zu genau einem Overlay
#[derive(Debug, Clone)]
pub struct Layer {
    /// Eindeutige ID
    pub id: LayerId,
    /// Anzeigename
    pub name: String,
    /// Datenquelle
    pub source: LayerSource,
    /// Vektor oder Raster
    pub kind: LayerKind,
    /// Ausdehnung der Daten (None = unbekannt bzw. leer)
    pub bounding_box: Option<Extent>,
    /// Sichtbarkeit in der Karte
    pub is_visible: bool,
}

impl Layer {
    /// Erstellt einen Feature-Layer ohne Styles.
    pub fn feature(id: LayerId, name: impl Into<String>, source: LayerSource) -> Self {
        Self {
            id,
            name: name.into(),
            source,
            kind: LayerKind::Feature {
                zoom_levels: ZoomLevelSet::new(),
                styles: Vec::new(),
            },
            bounding_box: None,
            is_visible: true,
        }
    }

    /// Erstellt einen Raster-Layer.
    pub fn raster(id: LayerId, name: impl Into<String>, source: LayerSource) -> Self {
        Self {
            id,
            name: name.into(),
            source,
            kind: LayerKind::Raster,
            bounding_box: None,
            is_visible: true,
        }
    }

    /// Setzt die Ausdehnung (Builder-Stil).
    pub fn with_bounding_box(mut self, extent: Extent) -> Self {
        self.bounding_box = Some(extent);
        self
    }

    /// Ausdehnung der Layer-Daten.
    pub fn get_bounding_box(&self) -> Option<Extent> {
        self.bounding_box
    }

    /// Gibt `true` zurück für Vektor-Layer mit Style-Liste.
    pub fn is_feature_layer(&self) -> bool {
        matches!(self.kind, LayerKind::Feature { .. })
    }

    /// Composite-Styles des Layers (leer bei Raster-Layern).
    pub fn styles(&self) -> &[StyleId] {
        match &self.kind {
            LayerKind::Feature { styles, .. } => styles,
            LayerKind::Raster => &[],
        }
    }

    /// Zoomstufen des Layers (nur Feature-Layer).
    pub fn zoom_levels(&self) -> Option<&ZoomLevelSet> {
        match &self.kind {
            LayerKind::Feature { zoom_levels, .. } => Some(zoom_levels),
            LayerKind::Raster => None,
        }
    }

    /// Mutable Zoomstufen des Layers (nur Feature-Layer).
    pub fn zoom_levels_mut(&mut self) -> Option<&mut ZoomLevelSet> {
        match &mut self.kind {
            LayerKind::Feature { zoom_levels, .. } => Some(zoom_levels),
            LayerKind::Raster => None,
        }
    }
}
