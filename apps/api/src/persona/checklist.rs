use serde::{Deserialize, Serialize};

use crate::persona::models::PersonaWizard;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub key: String,
    pub label: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
    pub completed: usize,
    pub total: usize,
}

/// Live checklist shown beside the wizard: one item per data-entry step.
pub fn compute_checklist(wizard: &PersonaWizard) -> Checklist {
    let items = vec![
        item(
            "context",
            "Context set",
            filled(&wizard.context.organisation) && filled(&wizard.context.stage),
        ),
        item(
            "purpose",
            "Role purpose",
            filled(&wizard.role.title) && filled(&wizard.role.purpose),
        ),
        item(
            "persona",
            "Persona sliders",
            wizard.persona.scores.iter().all(|&s| s >= 1),
        ),
        item(
            "success",
            "Success metrics",
            filled(&wizard.success.short_term) && filled(&wizard.success.long_term),
        ),
    ];

    let completed = items.iter().filter(|i| i.done).count();
    Checklist {
        total: items.len(),
        completed,
        items,
    }
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

fn item(key: &str, label: &str, done: bool) -> ChecklistItem {
    ChecklistItem {
        key: key.to_string(),
        label: label.to_string(),
        done,
    }
}
