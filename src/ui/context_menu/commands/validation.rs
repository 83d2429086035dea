//! Validierung und Filterung von Menü-Einträgen.

use super::preconditions::PreconditionContext;
use super::{CommandId, IntentContext, MenuCatalog, MenuEntry};
use crate::app::AppIntent;

/// Sichtbarer Menü-Eintrag nach der Validierung
#[derive(Debug)]
pub enum ValidatedEntry {
    /// Überschrift
    Label(String),
    /// Trennlinie zwischen zwei sichtbaren Gruppen
    Separator,
    /// Ausführbarer Befehl mit fertigem Intent
    Command {
        id: CommandId,
        label: String,
        intent: Box<AppIntent>,
    },
}

/// Filtert einen Katalog auf die im aktuellen Zustand ausführbaren Befehle.
pub fn validate_entries(
    catalog: &MenuCatalog,
    precondition_ctx: &PreconditionContext,
    intent_ctx: &IntentContext,
) -> Vec<ValidatedEntry> {
    let visible = catalog.entries.iter().filter_map(|entry| match entry {
        MenuEntry::Label(text) => Some(ValidatedEntry::Label(text.clone())),
        MenuEntry::Separator => Some(ValidatedEntry::Separator),
        MenuEntry::Command {
            id,
            label,
            preconditions,
        } => {
            if !preconditions.iter().all(|p| p.is_valid(precondition_ctx)) {
                return None;
            }
            let intent = id.to_intent(intent_ctx)?;
            Some(ValidatedEntry::Command {
                id: *id,
                label: label.clone(),
                intent: Box::new(intent),
            })
        }
    });

    tidy(visible.collect())
}

/// Entfernt leere Gruppen: Labels ohne Befehl und Trennlinien ohne Nachbarn.
pub(crate) fn tidy(entries: Vec<ValidatedEntry>) -> Vec<ValidatedEntry> {
    let mut groups: Vec<Vec<ValidatedEntry>> = vec![Vec::new()];
    for entry in entries {
        match entry {
            ValidatedEntry::Separator => groups.push(Vec::new()),
            other => {
                if let Some(group) = groups.last_mut() {
                    group.push(other);
                }
            }
        }
    }

    let mut result = Vec::new();
    for group in groups {
        let has_command = group
            .iter()
            .any(|e| matches!(e, ValidatedEntry::Command { .. }));
        if !has_command {
            continue;
        }
        if !result.is_empty() {
            result.push(ValidatedEntry::Separator);
        }
        result.extend(group);
    }
    result
}
