//! Zentrale Konfiguration für den Layer-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ── Maus-Eingabe ────────────────────────────────────────────────────

/// Maximaler Abstand zweier Klicks für einen Doppelklick (Millisekunden).
pub const DOUBLE_CLICK_INTERVAL_MS: u64 = 500;

// ── Layer-Liste ─────────────────────────────────────────────────────

/// Zeilenhöhe einer Layer-Listen-Zeile in Pixeln.
pub const LAYER_ROW_HEIGHT_PX: f32 = 36.0;
/// Einrückung pro Baumebene in Pixeln.
pub const LAYER_INDENT_PX: f32 = 16.0;
/// Drag-Leave wird unterdrückt, wenn der Zeiger so nah an der Zeilen-Oberkante war.
pub const DRAG_LEAVE_GUARD_TOP_PX: f32 = 5.0;
/// Drag-Leave wird unterdrückt, wenn der Zeiger weiter als dieser Abstand von der Oberkante entfernt war.
pub const DRAG_LEAVE_GUARD_BOTTOM_PX: f32 = 34.0;

// ── Command-Log ─────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Commands.
pub const COMMAND_LOG_MAX_ENTRIES: usize = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `map_layer_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Doppelklick-Intervall in Millisekunden
    #[serde(default = "default_double_click_interval_ms")]
    pub double_click_interval_ms: u64,
    /// Zeilenhöhe der Layer-Liste in Pixeln
    #[serde(default = "default_row_height_px")]
    pub row_height_px: f32,
    /// Einrückung pro Baumebene in Pixeln
    #[serde(default = "default_indent_px")]
    pub indent_px: f32,
    /// Obere Schutzzone gegen Flackern der Einfügemarke
    #[serde(default = "default_drag_leave_guard_top_px")]
    pub drag_leave_guard_top_px: f32,
    /// Untere Schutzzone gegen Flackern der Einfügemarke (Abstand von der Oberkante)
    #[serde(default = "default_drag_leave_guard_bottom_px")]
    pub drag_leave_guard_bottom_px: f32,
    /// Optionale Datei mit übersetzten Texten (TOML, Schlüssel = Text)
    #[serde(default)]
    pub strings_path: Option<PathBuf>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            double_click_interval_ms: DOUBLE_CLICK_INTERVAL_MS,
            row_height_px: LAYER_ROW_HEIGHT_PX,
            indent_px: LAYER_INDENT_PX,
            drag_leave_guard_top_px: DRAG_LEAVE_GUARD_TOP_PX,
            drag_leave_guard_bottom_px: DRAG_LEAVE_GUARD_BOTTOM_PX,
            strings_path: None,
        }
    }
}

fn default_double_click_interval_ms() -> u64 {
    DOUBLE_CLICK_INTERVAL_MS
}

fn default_row_height_px() -> f32 {
    LAYER_ROW_HEIGHT_PX
}

fn default_indent_px() -> f32 {
    LAYER_INDENT_PX
}

fn default_drag_leave_guard_top_px() -> f32 {
    DRAG_LEAVE_GUARD_TOP_PX
}

fn default_drag_leave_guard_bottom_px() -> f32 {
    DRAG_LEAVE_GUARD_BOTTOM_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehlern gelten die Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_layer_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_layer_editor.toml")
    }

    /// Doppelklick-Intervall als `Duration`.
    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let opts: EditorOptions =
            toml::from_str("double_click_interval_ms = 300").expect("gültiges TOML");
        assert_eq!(opts.double_click_interval(), Duration::from_millis(300));
        assert_eq!(opts.row_height_px, LAYER_ROW_HEIGHT_PX);
        assert_eq!(opts.drag_leave_guard_bottom_px, DRAG_LEAVE_GUARD_BOTTOM_PX);
        assert!(opts.strings_path.is_none());
    }

    #[test]
    fn save_and_load_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "map_layer_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            row_height_px: 24.0,
            ..EditorOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern möglich");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/map_layer_editor.toml",
        ));
        assert_eq!(loaded, EditorOptions::default());
    }
}
