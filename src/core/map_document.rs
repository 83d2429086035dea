//! Das Kartendokument: geordnete Overlays, Layer und Styles.

use super::{
    Extent, Layer, LayerId, LayerKind, Overlay, OverlayKey, OverlayKind, Style, StyleId,
    StyleKind, ZoomRange,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Angeforderter Neuaufbau der Kartenanzeige
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Betroffene Overlays in der angeforderten Reihenfolge
    pub overlays: Vec<OverlayKey>,
}

/// Eine geöffnete Karte mit allen Overlays, Layern und Styles
#[derive(Debug)]
pub struct MapDocument {
    /// Anzeigename der Karte
    pub name: String,
    /// Overlays in Zeichenreihenfolge
    pub overlays: IndexMap<OverlayKey, Overlay>,
    layers: HashMap<LayerId, Layer>,
    styles: HashMap<StyleId, Style>,
    next_id: u64,
    /// Aktives Overlay (zuletzt selektiertes Overlay)
    pub active_overlay: Option<OverlayKey>,
    /// Aktiver Layer (zuletzt selektierter Layer)
    pub active_layer: Option<LayerId>,
    /// Aktuell angezeigter Kartenausschnitt
    pub current_extent: Option<Extent>,
    /// Noch nicht abgearbeitete Refresh-Anforderungen
    pub refresh_requests: Vec<RefreshRequest>,
    /// Andere Panels (Property-Grid, …) sollen neu laden
    pub plugins_dirty: bool,
}

impl MapDocument {
    /// Erstellt ein leeres Kartendokument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overlays: IndexMap::new(),
            layers: HashMap::new(),
            styles: HashMap::new(),
            next_id: 1,
            active_overlay: None,
            active_layer: None,
            current_extent: None,
            refresh_requests: Vec::new(),
            plugins_dirty: false,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Vergibt eine neue Layer-ID.
    pub fn new_layer_id(&mut self) -> LayerId {
        LayerId(self.allocate_id())
    }

    /// Vergibt eine neue Style-ID.
    pub fn new_style_id(&mut self) -> StyleId {
        StyleId(self.allocate_id())
    }

    // ── Overlays ────────────────────────────────────────────────────

    /// Hängt ein neues Overlay an. Gibt `false` zurück, wenn der Schlüssel schon existiert.
    pub fn add_overlay(&mut self, key: OverlayKey, name: &str, kind: OverlayKind) -> bool {
        if self.overlays.contains_key(&key) {
            return false;
        }
        self.overlays
            .insert(key.clone(), Overlay::new(key, name, kind));
        true
    }

    /// Erzeugt einen noch freien Overlay-Schlüssel mit dem gegebenen Präfix.
    pub fn unique_overlay_key(&self, prefix: &str) -> OverlayKey {
        (1..)
            .map(|n| OverlayKey::new(format!("{prefix}{n}")))
            .find(|key| !self.overlays.contains_key(key))
            .unwrap_or_else(|| OverlayKey::new(prefix))
    }

    /// Overlay nach Schlüssel.
    pub fn overlay(&self, key: &OverlayKey) -> Option<&Overlay> {
        self.overlays.get(key)
    }

    /// Mutables Overlay nach Schlüssel.
    pub fn overlay_mut(&mut self, key: &OverlayKey) -> Option<&mut Overlay> {
        self.overlays.get_mut(key)
    }

    /// Entfernt ein Overlay samt aller seiner Layer.
    pub fn remove_overlay(&mut self, key: &OverlayKey) -> Option<Overlay> {
        let overlay = self.overlays.shift_remove(key)?;
        for layer_id in overlay.layers.snapshot() {
            self.drop_layer_data(layer_id);
        }
        if self.active_overlay.as_ref() == Some(key) {
            self.active_overlay = None;
        }
        Some(overlay)
    }

    /// Overlay, in dessen Layer-Liste der Layer liegt.
    pub fn overlay_of_layer(&self, layer_id: LayerId) -> Option<OverlayKey> {
        self.overlays
            .values()
            .find(|overlay| overlay.layers.contains(layer_id))
            .map(|overlay| overlay.key.clone())
    }

    // ── Layer ───────────────────────────────────────────────────────

    /// Layer nach ID.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Mutabler Layer nach ID.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }

    /// Anzahl aller Layer im Dokument.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Registriert einen Layer, ohne ihn einem Overlay zuzuordnen.
    pub fn insert_layer(&mut self, layer: Layer) -> LayerId {
        let id = layer.id;
        self.layers.insert(id, layer);
        id
    }

    /// Registriert einen Layer und hängt ihn an das Overlay an.
    pub fn add_layer_to_overlay(&mut self, key: &OverlayKey, layer: Layer) -> Option<LayerId> {
        let overlay = self.overlays.get(key)?;
        if !overlay.kind.owns_layers() {
            log::warn!("Overlay '{}' besitzt keine Layer-Liste", key);
            return None;
        }
        overlay.layers.push(layer.id);
        Some(self.insert_layer(layer))
    }

    /// Entfernt einen Layer aus seinem Overlay und aus dem Dokument.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        if let Some(key) = self.overlay_of_layer(id) {
            if let Some(overlay) = self.overlays.get_mut(&key) {
                overlay.layers.remove(id);
                overlay.invalidate();
            }
        }
        self.drop_layer_data(id)
    }

    fn drop_layer_data(&mut self, id: LayerId) -> Option<Layer> {
        let layer = self.layers.remove(&id)?;
        for composite_id in layer.styles() {
            if let Some(composite) = self.styles.remove(composite_id) {
                for child in composite.children {
                    self.styles.remove(&child);
                }
            }
        }
        if self.active_layer == Some(id) {
            self.active_layer = None;
        }
        Some(layer)
    }

    /// Kopiert einen Layer inklusive aller Styles und fügt die Kopie direkt
    /// hinter dem Original in dessen Overlay ein.
    pub fn duplicate_layer(&mut self, id: LayerId) -> Option<LayerId> {
        let original = self.layers.get(&id)?.clone();
        let new_id = self.new_layer_id();

        let mut copy = original.clone();
        copy.id = new_id;
        copy.name = format!("{} (Kopie)", original.name);
        if let LayerKind::Feature {
            zoom_levels,
            styles,
        } = &mut copy.kind
        {
            *zoom_levels = super::ZoomLevelSet::new();
            styles.clear();
        }
        self.insert_layer(copy);

        for composite_id in original.styles() {
            let Some(composite) = self.styles.get(composite_id).cloned() else {
                continue;
            };
            let owned_items: Vec<(String, StyleKind)> = composite
                .children
                .iter()
                .filter_map(|child| self.styles.get(child))
                .map(|style| (style.name.clone(), style.kind))
                .collect();
            let items: Vec<(&str, StyleKind)> = owned_items
                .iter()
                .map(|(name, kind)| (name.as_str(), *kind))
                .collect();
            self.add_composite_style(new_id, &composite.name, composite.zoom_range, &items);
        }

        if let Some(key) = self.overlay_of_layer(id) {
            if let Some(overlay) = self.overlays.get_mut(&key) {
                let index = overlay.layers.index_of(id).map_or(0, |i| i + 1);
                overlay.layers.insert(index, new_id);
                overlay.invalidate();
            }
        }

        Some(new_id)
    }

    // ── Styles ──────────────────────────────────────────────────────

    /// Style nach ID.
    pub fn style(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(&id)
    }

    /// Mutabler Style nach ID.
    pub fn style_mut(&mut self, id: StyleId) -> Option<&mut Style> {
        self.styles.get_mut(&id)
    }

    /// Legt einen Composite-Style mit Zeichen-Styles an und bindet ihn an
    /// alle Zoomstufen seines Bereichs.
    ///
    /// Gibt `None` zurück, wenn der Layer fehlt oder kein Feature-Layer ist.
    pub fn add_composite_style(
        &mut self,
        layer_id: LayerId,
        name: &str,
        zoom_range: ZoomRange,
        items: &[(&str, StyleKind)],
    ) -> Option<StyleId> {
        if !self.layers.get(&layer_id)?.is_feature_layer() {
            return None;
        }

        let children: Vec<StyleId> = items
            .iter()
            .map(|(item_name, kind)| {
                let id = self.new_style_id();
                self.styles.insert(id, Style::drawing(id, *item_name, *kind));
                id
            })
            .collect();

        let composite_id = self.new_style_id();
        let composite = Style::composite(composite_id, name, children, zoom_range);

        let layer = self.layers.get_mut(&layer_id)?;
        if let LayerKind::Feature {
            zoom_levels,
            styles,
        } = &mut layer.kind
        {
            zoom_levels.apply_composite(&composite);
            styles.push(composite_id);
        }
        self.styles.insert(composite_id, composite);
        Some(composite_id)
    }

    // ── Anzeige-Benachrichtigungen ───────────────────────────────────

    /// Fordert einen Neuaufbau der angegebenen Overlays an.
    pub fn refresh<I>(&mut self, overlays: I)
    where
        I: IntoIterator<Item = OverlayKey>,
    {
        let mut keys: Vec<OverlayKey> = Vec::new();
        for key in overlays {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        if !keys.is_empty() {
            self.refresh_requests.push(RefreshRequest { overlays: keys });
        }
    }

    /// Fordert einen Neuaufbau aller Overlays an.
    pub fn refresh_all(&mut self) {
        let keys: Vec<OverlayKey> = self.overlays.keys().cloned().collect();
        self.refresh(keys);
    }

    /// Entnimmt alle offenen Refresh-Anforderungen.
    pub fn take_refresh_requests(&mut self) -> Vec<RefreshRequest> {
        std::mem::take(&mut self.refresh_requests)
    }

    /// Benachrichtigt andere Panels über eine Änderung am Layer-Baum.
    pub fn begin_refresh_plugins(&mut self) {
        self.plugins_dirty = true;
    }
}
