//! Lokalisierte Texte der Oberfläche.
//!
//! Englische Standardtexte sind eingebaut; eine optionale TOML-Datei
//! (`schluessel = "Text"`) überschreibt einzelne Einträge.

use std::collections::BTreeMap;
use std::path::Path;

/// Eingebaute Standardtexte
const DEFAULT_STRINGS: &[(&str, &str)] = &[
    ("layer_list_title", "Layers"),
    ("menu_file", "File"),
    ("menu_add_overlay", "Add Overlay"),
    ("menu_import_layers", "Import Layers..."),
    ("menu_options", "Options..."),
    ("menu_exit", "Exit"),
    ("menu_edit", "Edit"),
    ("menu_remove", "Remove Selected"),
    ("menu_view", "View"),
    ("menu_zoom_to_selection", "Zoom to Selection"),
    ("ctx_add_overlay", "Add Overlay"),
    ("ctx_import_layers", "Import Layers..."),
    ("ctx_rename", "Rename"),
    ("ctx_duplicate", "Duplicate"),
    ("ctx_replace_source", "Replace Data Source..."),
    ("ctx_remove", "Remove"),
    ("ctx_zoom_to_extent", "Zoom to Extent"),
    ("ctx_edit_style", "Edit Style..."),
    ("ctx_edit_text_style", "Edit Text Style..."),
    ("new_overlay_name", "New Overlay"),
    ("msg_title", "Map Layer Editor"),
    ("msg_no_features_matched", "No features matched."),
    ("msg_no_style_to_edit", "The layer has no style of this kind."),
    ("msg_replace_source_failed", "The selected file does not match the layer type."),
    ("dialog_ok", "OK"),
    ("dialog_close", "Close"),
    ("options_title", "Options"),
    ("options_reset", "Defaults"),
    ("style_editor_title", "Style Editor"),
    ("text_style_editor_title", "Text Style Editor"),
    ("status_overlays", "Overlays"),
    ("status_layers", "Layers"),
    ("status_active_layer", "Active layer"),
    ("status_none", "none"),
    ("status_extent", "Extent"),
];

/// Nachschlagetabelle für übersetzte Texte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResources {
    entries: BTreeMap<String, String>,
}

impl Default for StringResources {
    fn default() -> Self {
        Self {
            entries: DEFAULT_STRINGS
                .iter()
                .map(|(key, text)| ((*key).to_owned(), (*text).to_owned()))
                .collect(),
        }
    }
}

impl StringResources {
    /// Standardtexte, überschrieben durch die Einträge aus `content` (TOML).
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let overrides: BTreeMap<String, String> = toml::from_str(content)?;
        let mut resources = Self::default();
        resources.entries.extend(overrides);
        Ok(resources)
    }

    /// Lädt eine Übersetzungsdatei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let resources = Self::from_toml(&content)?;
        log::info!("Texte geladen aus: {}", path.display());
        Ok(resources)
    }

    /// Lädt die konfigurierte Datei oder fällt auf die Standardtexte zurück.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!(
                "Texte aus {} nicht lesbar, verwende Standardtexte: {:#}",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Text zum Schlüssel; unbekannte Schlüssel werden unverändert zurückgegeben.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        let strings = StringResources::default();
        assert_eq!(strings.get("does_not_exist"), "does_not_exist");
        assert_eq!(strings.get("ctx_rename"), "Rename");
    }

    #[test]
    fn toml_overrides_single_entries() {
        let strings = StringResources::from_toml(
            r#"
ctx_rename = "Umbenennen"
custom_key = "Eigener Text"
"#,
        )
        .expect("gültiges TOML");

        assert_eq!(strings.get("ctx_rename"), "Umbenennen");
        assert_eq!(strings.get("custom_key"), "Eigener Text");
        assert_eq!(strings.get("ctx_remove"), "Remove");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(StringResources::from_toml("ctx_rename = ").is_err());
        assert_eq!(
            StringResources::load_or_default(Some(Path::new("/nonexistent/strings.toml"))),
            StringResources::default()
        );
    }
}
