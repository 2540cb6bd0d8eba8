//! Ideal-candidate narrative — fixed sentence templates filled from the
//! persona context. Empty fields drop their sentence entirely.

use serde::{Deserialize, Serialize};

/// Everything the narrative bullets draw on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeContext {
    pub top_axes: Vec<String>,
    pub decision_level: String,
    pub scope: String,
    pub team: String,
    pub culture: String,
    pub priorities: String,
    /// Display labels, not ids.
    pub strengths: Vec<String>,
    pub short_term: String,
}

/// Builds the ideal-candidate bullets in fixed order:
/// top axes → decision/scope → team → culture → priorities → strengths → 90-day focus.
pub fn build_narrative_bullets(ctx: &NarrativeContext) -> Vec<String> {
    let top_axes = non_blank_items(&ctx.top_axes);
    let strengths = non_blank_items(&ctx.strengths);

    [
        (!top_axes.is_empty())
            .then(|| format!("Proven strength across {}.", top_axes.join(", "))),
        decision_scope_sentence(ctx.decision_level.trim(), ctx.scope.trim()),
        present(&ctx.team).map(|team| format!("Collaborates effectively across {team}.")),
        present(&ctx.culture)
            .map(|culture| format!("Thrives in a {} environment.", culture.to_lowercase())),
        present(&ctx.priorities)
            .map(|p| format!("Motivated by priorities such as: {p}.")),
        (!strengths.is_empty()).then(|| {
            format!(
                "Brings additional strengths in {}.",
                strengths.join(", ")
            )
        }),
        present(&ctx.short_term).map(|goal| format!("90-day focus: {goal}")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn decision_scope_sentence(decision: &str, scope: &str) -> Option<String> {
    const TAIL: &str = "translates strategy into execution.";
    match (decision.is_empty(), scope.is_empty()) {
        (false, false) => Some(format!(
            "Operates at {decision} level with {scope} scope; {TAIL}"
        )),
        (false, true) => Some(format!("Operates at {decision} level; {TAIL}")),
        (true, false) => Some(format!("Operates with {scope} scope; {TAIL}")),
        (true, true) => None,
    }
}

fn present(field: &str) -> Option<&str> {
    let trimmed = field.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn non_blank_items(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
