//! Strength tags — descriptive differentiators a persona can carry.
//! They never affect the fit score; they only feed narrative and JD text.

use serde::Serialize;

/// Maximum number of strength tags a persona may select.
pub const MAX_STRENGTHS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

const STRENGTH_OPTIONS: &[StrengthOption] = &[
    StrengthOption {
        id: "strategic_partnerships",
        label: "Strategic Partnerships",
        emoji: "🤝",
    },
    StrengthOption {
        id: "information_centralization",
        label: "Information Centralization",
        emoji: "🗄️",
    },
    StrengthOption {
        id: "dashboards_reporting",
        label: "Dashboards & Reporting",
        emoji: "📊",
    },
    StrengthOption {
        id: "legislative_compliance",
        label: "Legislative Compliance",
        emoji: "📜",
    },
    StrengthOption {
        id: "process_automation",
        label: "Process Automation",
        emoji: "⚙️",
    },
    StrengthOption {
        id: "governance_risk",
        label: "Governance & Risk",
        emoji: "⚖️",
    },
];

pub fn strength_catalog() -> &'static [StrengthOption] {
    STRENGTH_OPTIONS
}

pub fn find_strength(id: &str) -> Option<&'static StrengthOption> {
    STRENGTH_OPTIONS.iter().find(|o| o.id == id)
}

/// Maps selected ids to display labels in selection order. Unknown ids are skipped.
pub fn resolve_strength_labels<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| find_strength(id.as_ref()))
        .map(|o| o.label.to_string())
        .collect()
}

/// Toggles `id` in the selection: removes it if present, appends it if there
/// is room. A full selection is returned cut to `MAX_STRENGTHS`, so the result
/// never holds more than that.
pub fn toggle_strength(selected: &[String], id: &str) -> Vec<String> {
    if selected.iter().any(|s| s == id) {
        return selected
            .iter()
            .filter(|s| *s != id)
            .take(MAX_STRENGTHS)
            .cloned()
            .collect();
    }
    if selected.len() >= MAX_STRENGTHS {
        return selected[..MAX_STRENGTHS].to_vec();
    }
    let mut next = selected.to_vec();
    next.push(id.to_string());
    next
}

/// Returns one message per problem with a strength selection.
pub fn strength_problems(ids: &[String]) -> Vec<String> {
    let mut problems = Vec::new();

    if ids.len() > MAX_STRENGTHS {
        problems.push(format!(
            "at most {MAX_STRENGTHS} strengths may be selected ({} given)",
            ids.len()
        ));
    }

    for (i, id) in ids.iter().enumerate() {
        if find_strength(id).is_none() {
            problems.push(format!("unknown strength '{id}'"));
        } else if ids[..i].contains(id) {
            problems.push(format!("strength '{id}' selected more than once"));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let catalog = strength_catalog();
        assert_eq!(catalog.len(), 6);
        for (i, opt) in catalog.iter().enumerate() {
            assert!(catalog[i + 1..].iter().all(|o| o.id != opt.id));
        }
    }

    #[test]
    fn test_resolve_labels_keeps_selection_order() {
        let labels = resolve_strength_labels(&["process_automation", "governance_risk"]);
        assert_eq!(labels, vec!["Process Automation", "Governance & Risk"]);
    }

    #[test]
    fn test_resolve_labels_skips_unknown() {
        let labels = resolve_strength_labels(&["nope", "dashboards_reporting"]);
        assert_eq!(labels, vec!["Dashboards & Reporting"]);
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let one = toggle_strength(&[], "governance_risk");
        assert_eq!(one, ids(&["governance_risk"]));
        let none = toggle_strength(&one, "governance_risk");
        assert!(none.is_empty());
    }

    #[test]
    fn test_toggle_caps_at_four() {
        let full = ids(&[
            "strategic_partnerships",
            "information_centralization",
            "dashboards_reporting",
            "legislative_compliance",
        ]);
        let after = toggle_strength(&full, "process_automation");
        assert_eq!(after, full);

        // Removing still works when full.
        let after = toggle_strength(&full, "dashboards_reporting");
        assert_eq!(after.len(), 3);
    }

    #[test]
    fn test_toggle_never_returns_more_than_four() {
        let oversized = ids(&[
            "strategic_partnerships",
            "information_centralization",
            "dashboards_reporting",
            "legislative_compliance",
            "governance_risk",
        ]);
        let after = toggle_strength(&oversized, "process_automation");
        assert_eq!(after, oversized[..MAX_STRENGTHS].to_vec());

        let after = toggle_strength(&oversized, "strategic_partnerships");
        assert_eq!(after.len(), MAX_STRENGTHS);
        assert!(!after.contains(&"strategic_partnerships".to_string()));
    }

    #[test]
    fn test_problems_for_valid_selection_is_empty() {
        assert!(strength_problems(&ids(&["governance_risk", "process_automation"])).is_empty());
    }

    #[test]
    fn test_problems_reports_unknown_duplicate_and_overflow() {
        let problems = strength_problems(&ids(&[
            "governance_risk",
            "governance_risk",
            "made_up",
            "process_automation",
            "dashboards_reporting",
        ]));
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("at most 4"));
        assert!(problems.iter().any(|p| p.contains("more than once")));
        assert!(problems.iter().any(|p| p.contains("made_up")));
    }
}
