//! Validierung und Filterung von Menü-Einträgen.
//!
//! Prüft Preconditions und entfernt überflüssige Separatoren/Labels.

use super::preconditions::{Precondition, PreconditionContext};
use super::{MenuCatalog, MenuEntry};
use crate::app::{ArrowIntent, MenuAction};

/// Prüft ob alle Preconditions eines Menü-Eintrags erfüllt sind.
pub(crate) fn all_preconditions_valid(
    preconditions: &[Precondition],
    ctx: &PreconditionContext,
) -> bool {
    preconditions.iter().all(|p| p.is_valid(ctx))
}

/// Ergebnis der Validierung: sichtbare Einträge mit ihrem Intent.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedEntry {
    /// Label (nur mit folgendem Command sichtbar)
    Label(String),
    /// Trennlinie (nur zwischen sichtbaren Einträgen)
    Separator,
    /// Gültiger Befehl mit fertigem Intent
    Command {
        action: MenuAction,
        label: String,
        checked: bool,
        intent: ArrowIntent,
    },
}

impl ValidatedEntry {
    /// Beschriftung inkl. Häkchen, wie sie eine UI-Shell anzeigt.
    pub fn display_label(&self) -> Option<String> {
        match self {
            Self::Label(text) => Some(text.clone()),
            Self::Separator => None,
            Self::Command { label, checked, .. } if *checked => Some(format!("✓ {label}")),
            Self::Command { label, .. } => Some(label.clone()),
        }
    }
}

/// Validiert einen MenuCatalog und gibt nur die sichtbaren Einträge zurück.
pub fn validate_entries(
    catalog: &MenuCatalog,
    precondition_ctx: &PreconditionContext,
) -> Vec<ValidatedEntry> {
    let mut raw: Vec<ValidatedEntry> = Vec::new();

    for entry in &catalog.entries {
        match entry {
            MenuEntry::Label(text) => raw.push(ValidatedEntry::Label(text.clone())),
            MenuEntry::Separator => raw.push(ValidatedEntry::Separator),
            MenuEntry::Command {
                action,
                label,
                preconditions,
                checked,
            } => {
                if all_preconditions_valid(preconditions, precondition_ctx) {
                    raw.push(ValidatedEntry::Command {
                        action: *action,
                        label: label.clone(),
                        checked: *checked,
                        intent: action.to_intent(),
                    });
                }
            }
        }
    }

    cleanup_separators(raw)
}

/// Entfernt doppelte Separatoren, Separatoren am Rand und Labels ohne Commands.
pub(crate) fn cleanup_separators(entries: Vec<ValidatedEntry>) -> Vec<ValidatedEntry> {
    let mut result: Vec<ValidatedEntry> = Vec::new();

    for entry in remove_orphaned_labels(entries) {
        if entry == ValidatedEntry::Separator
            && (result.is_empty() || matches!(result.last(), Some(ValidatedEntry::Separator)))
        {
            continue;
        }
        result.push(entry);
    }

    if matches!(result.last(), Some(ValidatedEntry::Separator)) {
        result.pop();
    }
    result
}

/// Entfernt Labels, denen bis zum nächsten Separator/Label kein Command folgt.
pub(crate) fn remove_orphaned_labels(entries: Vec<ValidatedEntry>) -> Vec<ValidatedEntry> {
    let keep: Vec<bool> = (0..entries.len())
        .map(|i| {
            !matches!(entries[i], ValidatedEntry::Label(_))
                || entries[i + 1..]
                    .iter()
                    .take_while(|e| {
                        !matches!(e, ValidatedEntry::Separator | ValidatedEntry::Label(_))
                    })
                    .any(|e| matches!(e, ValidatedEntry::Command { .. }))
        })
        .collect();

    entries
        .into_iter()
        .zip(keep)
        .filter_map(|(entry, keep)| keep.then_some(entry))
        .collect()
}
