//! Styles und zoomstufenabhängige Style-Bindungen.
//!
//! Ein Composite-Style bündelt geordnete Zeichen-Styles und gilt für einen
//! inklusiven Zoomstufen-Bereich. Jede Zoomstufe führt die Liste der dort
//! tatsächlich gezeichneten Styles (`custom_styles`).

use super::StyleId;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Anzahl der Zoomstufen eines `ZoomLevelSet` (Zoomstufe 1 bis 20).
pub const ZOOM_LEVEL_COUNT: u8 = 20;

/// Art eines Styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleKind {
    /// Geordnete Zusammenstellung von Zeichen-Styles
    Composite,
    /// Flächenfüllung
    Area,
    /// Linienzeichnung
    Line,
    /// Punktsymbol
    Point,
    /// Beschriftung mit Icon
    IconText,
    /// Beschriftung mit Filterbedingung
    TextFilter,
}

impl StyleKind {
    /// Beschriftungs-Styles werden im Text-Style-Editor bearbeitet.
    pub fn is_text(&self) -> bool {
        matches!(self, StyleKind::IconText | StyleKind::TextFilter)
    }
}

/// Inklusiver Zoomstufen-Bereich (1-basiert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomRange {
    /// Erste Zoomstufe
    pub from: u8,
    /// Letzte Zoomstufe (inklusive)
    pub to: u8,
}

impl ZoomRange {
    /// Erstellt einen Bereich; Grenzen werden sortiert und auf 1..=20 begrenzt.
    pub fn new(from: u8, to: u8) -> Self {
        let clamp = |z: u8| z.clamp(1, ZOOM_LEVEL_COUNT);
        let (from, to) = (clamp(from), clamp(to));
        Self {
            from: from.min(to),
            to: from.max(to),
        }
    }

    /// Bereich über alle Zoomstufen.
    pub fn all() -> Self {
        Self::new(1, ZOOM_LEVEL_COUNT)
    }

    /// Prüft ob die Zoomstufe im Bereich liegt.
    pub fn contains(&self, level: u8) -> bool {
        (self.from..=self.to).contains(&level)
    }

    /// Iterator über alle Zoomstufen des Bereichs.
    pub fn levels(&self) -> RangeInclusive<u8> {
        self.from..=self.to
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::all()
    }
}

/// Ein Style der Karte (Composite oder Zeichen-Style)
#[derive(Debug, Clone)]
pub struct Style {
    /// Eindeutige ID
    pub id: StyleId,
    /// Anzeigename
    pub name: String,
    /// Art des Styles
    pub kind: StyleKind,
    /// Geordnete Zeichen-Styles (nur bei `Composite` belegt)
    pub children: Vec<StyleId>,
    /// Gültigkeitsbereich (nur bei `Composite` relevant)
    pub zoom_range: ZoomRange,
}

impl Style {
    /// Erstellt einen Zeichen-Style ohne Kinder.
    pub fn drawing(id: StyleId, name: impl Into<String>, kind: StyleKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            children: Vec::new(),
            zoom_range: ZoomRange::all(),
        }
    }

    /// Erstellt einen Composite-Style für den gegebenen Zoom-Bereich.
    pub fn composite(
        id: StyleId,
        name: impl Into<String>,
        children: Vec<StyleId>,
        zoom_range: ZoomRange,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: StyleKind::Composite,
            children,
            zoom_range,
        }
    }

    /// Gibt `true` zurück, wenn der Style eine eigene Style-Liste besitzt.
    pub fn is_composite(&self) -> bool {
        self.kind == StyleKind::Composite
    }
}

/// Style-Bindungen einer einzelnen Zoomstufe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomLevel {
    /// Auf dieser Zoomstufe gezeichnete Styles in Zeichenreihenfolge
    pub custom_styles: Vec<StyleId>,
}

/// Alle Zoomstufen eines Feature-Layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomLevelSet {
    levels: Vec<ZoomLevel>,
}

impl Default for ZoomLevelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomLevelSet {
    /// Erstellt ein leeres Set mit `ZOOM_LEVEL_COUNT` Zoomstufen.
    pub fn new() -> Self {
        Self {
            levels: vec![ZoomLevel::default(); ZOOM_LEVEL_COUNT as usize],
        }
    }

    /// Zoomstufe (1-basiert).
    pub fn level(&self, level: u8) -> Option<&ZoomLevel> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(index as usize))
    }

    fn level_mut(&mut self, level: u8) -> Option<&mut ZoomLevel> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get_mut(index as usize))
    }

    /// Alle Zoomstufen in aufsteigender Reihenfolge.
    pub fn custom_zoom_levels(&self) -> &[ZoomLevel] {
        &self.levels
    }

    /// Trägt die Zeichen-Styles eines Composite-Styles in alle Zoomstufen seines Bereichs ein.
    ///
    /// Bereits eingetragene Styles werden nicht doppelt hinzugefügt.
    pub fn apply_composite(&mut self, composite: &Style) {
        for level in composite.zoom_range.levels() {
            if let Some(zoom_level) = self.level_mut(level) {
                for style_id in &composite.children {
                    if !zoom_level.custom_styles.contains(style_id) {
                        zoom_level.custom_styles.push(*style_id);
                    }
                }
            }
        }
    }

    /// Vertauscht die Positionen zweier Styles auf allen Zoomstufen im Bereich.
    ///
    /// Zoomstufen außerhalb des Bereichs bleiben unverändert. Gibt die Anzahl
    /// der tatsächlich umsortierten Zoomstufen zurück.
    pub fn swap_in_range(&mut self, range: ZoomRange, a: StyleId, b: StyleId) -> usize {
        let mut touched = 0;
        for level in range.levels() {
            let Some(zoom_level) = self.level_mut(level) else {
                continue;
            };
            let styles = &mut zoom_level.custom_styles;
            let pos_a = styles.iter().position(|id| *id == a);
            let pos_b = styles.iter().position(|id| *id == b);
            if let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) {
                styles.swap(pos_a, pos_b);
                touched += 1;
            }
        }
        touched
    }

    /// Entfernt einen Style von allen Zoomstufen.
    pub fn remove_style(&mut self, style_id: StyleId) {
        for zoom_level in &mut self.levels {
            zoom_level.custom_styles.retain(|id| *id != style_id);
        }
    }
}
