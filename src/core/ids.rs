//! Typisierte IDs für Overlays, Layer und Styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schlüssel eines Overlays in der geordneten Overlay-Sammlung der Karte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverlayKey(pub String);

impl OverlayKey {
    /// Erstellt einen Overlay-Schlüssel.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Gibt den Schlüssel als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ID eines Layers (vom `MapDocument` vergeben).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u64);

/// ID eines Styles (Composite- oder Zeichen-Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
