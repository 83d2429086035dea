//! Overlays: renderbare Layer-Gruppen mit eigenem Tile-Cache.

use super::{LayerId, OverlayKey};
use std::sync::{Arc, Mutex, MutexGuard};

/// Art eines Overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Layer-Overlay: besitzt eine Layer-Liste und nimmt Drops an
    Layer,
    /// Dynamisches Overlay: besitzt Layer, verbietet aber manuelles Umsortieren
    Dynamic,
    /// Basiskarte ohne eigene Layer
    Base,
}

impl OverlayKind {
    /// Gibt `true` zurück, wenn das Overlay eine Layer-Liste besitzt.
    pub fn owns_layers(&self) -> bool {
        matches!(self, OverlayKind::Layer | OverlayKind::Dynamic)
    }
}

/// Zustand des Tile-Caches eines Overlays.
///
/// Der eigentliche Cache liegt in der Render-Engine; hier wird nur
/// festgehalten, welche Auffrischung angefordert wurde.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCacheState {
    /// Wird bei jedem `invalidate()` erhöht
    pub generation: u64,
    /// Kompletter Neuaufbau des Caches angefordert
    pub apply_new_cache: bool,
    /// Vorschaubild muss neu erzeugt werden
    pub preview_dirty: bool,
}

/// Geordnete Layer-Liste eines Overlays.
///
/// Render-Threads der Engine lesen die Liste parallel (`snapshot()`), daher
/// laufen alle Einfüge-/Entfernoperationen unter dem Lock.
#[derive(Debug, Default)]
pub struct LayerCollection {
    inner: Arc<Mutex<Vec<LayerId>>>,
}

impl LayerCollection {
    /// Erstellt eine leere Layer-Liste.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LayerId>> {
        // Ein vergifteter Lock enthält trotzdem eine gültige Liste
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Geteilter Handle für Render-Threads.
    pub fn shared(&self) -> Arc<Mutex<Vec<LayerId>>> {
        Arc::clone(&self.inner)
    }

    /// Kopie der aktuellen Reihenfolge.
    pub fn snapshot(&self) -> Vec<LayerId> {
        self.lock().clone()
    }

    /// Anzahl der Layer.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Gibt `true` zurück, wenn keine Layer enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Prüft ob der Layer enthalten ist.
    pub fn contains(&self, layer_id: LayerId) -> bool {
        self.lock().contains(&layer_id)
    }

    /// Position des Layers in der Liste.
    pub fn index_of(&self, layer_id: LayerId) -> Option<usize> {
        self.lock().iter().position(|id| *id == layer_id)
    }

    /// Hängt einen Layer an.
    pub fn push(&self, layer_id: LayerId) {
        self.lock().push(layer_id);
    }

    /// Fügt einen Layer ein; der Index wird auf die Listenlänge begrenzt.
    pub fn insert(&self, index: usize, layer_id: LayerId) -> usize {
        let mut layers = self.lock();
        let index = index.min(layers.len());
        layers.insert(index, layer_id);
        index
    }

    /// Entfernt einen Layer und gibt seine bisherige Position zurück.
    pub fn remove(&self, layer_id: LayerId) -> Option<usize> {
        let mut layers = self.lock();
        let index = layers.iter().position(|id| *id == layer_id)?;
        layers.remove(index);
        Some(index)
    }

    /// Verschiebt einen Layer atomar an `to` (Index nach dem Entfernen).
    pub fn move_to(&self, layer_id: LayerId, to: usize) -> bool {
        let mut layers = self.lock();
        let Some(from) = layers.iter().position(|id| *id == layer_id) else {
            return false;
        };
        let id = layers.remove(from);
        let to = to.min(layers.len());
        layers.insert(to, id);
        true
    }
}

/// Ein Overlay der Karte
#[derive(Debug)]
pub struct Overlay {
    /// Schlüssel in der Overlay-Sammlung der Karte
    pub key: OverlayKey,
    /// Anzeigename
    pub name: String,
    /// Art des Overlays
    pub kind: OverlayKind,
    /// Geordnete Layer (leer bei Basiskarten)
    pub layers: LayerCollection,
    /// Sichtbarkeit
    pub is_visible: bool,
    /// Tile-Cache-Zustand
    pub tile_cache: TileCacheState,
}

impl Overlay {
    /// Erstellt ein leeres Overlay.
    pub fn new(key: OverlayKey, name: impl Into<String>, kind: OverlayKind) -> Self {
        Self {
            key,
            name: name.into(),
            kind,
            layers: LayerCollection::new(),
            is_visible: true,
            tile_cache: TileCacheState::default(),
        }
    }

    /// Verwirft gerenderte Tiles (Invalidate).
    pub fn invalidate(&mut self) {
        self.tile_cache.generation += 1;
    }

    /// Fordert einen komplett neuen Tile-Cache an.
    pub fn refresh_cache(&mut self) {
        self.tile_cache.apply_new_cache = true;
        self.invalidate();
    }

    /// Fordert ein neues Vorschaubild an.
    pub fn refresh_preview(&mut self) {
        self.tile_cache.preview_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(collection: &LayerCollection) -> Vec<u64> {
        collection.snapshot().iter().map(|id| id.0).collect()
    }

    #[test]
    fn insert_clamps_out_of_range_index() {
        let layers = LayerCollection::new();
        layers.push(LayerId(1));
        assert_eq!(layers.insert(99, LayerId(2)), 1);
        assert_eq!(ids(&layers), vec![1, 2]);
    }

    #[test]
    fn move_to_reorders_in_place() {
        let layers = LayerCollection::new();
        for id in 1..=3 {
            layers.push(LayerId(id));
        }
        assert!(layers.move_to(LayerId(3), 0));
        assert_eq!(ids(&layers), vec![3, 1, 2]);
        assert!(!layers.move_to(LayerId(42), 0));
    }

    #[test]
    fn shared_handle_sees_mutations() {
        let layers = LayerCollection::new();
        let shared = layers.shared();
        layers.push(LayerId(7));

        let reader = std::thread::spawn(move || {
            shared
                .lock()
                .map(|layers| layers.len())
                .unwrap_or_default()
        });
        assert_eq!(reader.join().ok(), Some(1));
    }

    #[test]
    fn refresh_cache_bumps_generation() {
        let mut overlay = Overlay::new(OverlayKey::new("o"), "O", OverlayKind::Layer);
        overlay.refresh_cache();
        assert!(overlay.tile_cache.apply_new_cache);
        assert_eq!(overlay.tile_cache.generation, 1);
    }
}
