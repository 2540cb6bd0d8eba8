//! JD draft — assembles a plain-text job description from the wizard state,
//! its top competencies and the ideal-candidate bullets.

use crate::persona::axes::AXES;
use crate::persona::models::PersonaWizard;

/// Renders the JD draft. `top_axes` and `ideal_candidate` are computed by the
/// caller so the card and the draft always agree.
pub fn build_jd_draft(
    wizard: &PersonaWizard,
    top_axes: &[String],
    ideal_candidate: &[String],
) -> String {
    let strengths = wizard.strength_labels();
    let strengths = if strengths.is_empty() {
        "As relevant".to_string()
    } else {
        strengths.join(", ")
    };

    let sections = [
        format!(
            "Role: {}\nOrganisation: {}\nStage: {}",
            wizard.role.title, wizard.context.organisation, wizard.context.stage
        ),
        format!("Purpose:\n{}", wizard.role.purpose),
        format!("Top Competencies:\n{}", bullet_list(top_axes)),
        format!("Ideal Candidate:\n{}", bullet_list(ideal_candidate)),
        format!("Key Outcomes (90 days):\n- {}", wizard.success.short_term),
        format!("12–18 Month Outcomes:\n- {}", wizard.success.long_term),
        format!(
            "Culture & Ways of Working:\n- {}",
            wizard.success.cultural_impact
        ),
        format!("Additional Strengths:\n- {strengths}"),
        format!(
            "Requirements:\n\
             - Demonstrable track record across the core competencies above.\n\
             - Ability to operate at {} level with {} scope.",
            wizard.role.decision_level, wizard.role.scope
        ),
        format!("Keywords:\n{}", AXES.join(", ")),
    ];

    sections.join("\n\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> PersonaWizard {
        let mut w = PersonaWizard::default();
        w.role.title = "ERP Transformation Manager".to_string();
        w.role.purpose = "Make ERP a single source of truth.".to_string();
        w.role.decision_level = "Hybrid".to_string();
        w.role.scope = "Manager".to_string();
        w.context.organisation = "Sand Tech Holdings Ltd".to_string();
        w.context.stage = "Transformation".to_string();
        w.success.short_term = "ERP data stabilised.".to_string();
        w
    }

    #[test]
    fn test_header_and_sections_present() {
        let jd = build_jd_draft(&wizard(), &["Delivery Rigor".to_string()], &[]);
        assert!(jd.starts_with(
            "Role: ERP Transformation Manager\nOrganisation: Sand Tech Holdings Ltd\nStage: Transformation"
        ));
        assert!(jd.contains("Top Competencies:\n- Delivery Rigor"));
        assert!(jd.contains("Key Outcomes (90 days):\n- ERP data stabilised."));
        assert!(jd.contains("Ability to operate at Hybrid level with Manager scope."));
    }

    #[test]
    fn test_strengths_fall_back_to_as_relevant() {
        let jd = build_jd_draft(&wizard(), &[], &[]);
        assert!(jd.contains("Additional Strengths:\n- As relevant"));
    }

    #[test]
    fn test_strengths_use_labels() {
        let mut w = wizard();
        w.persona.strengths = vec![
            "dashboards_reporting".to_string(),
            "governance_risk".to_string(),
        ];
        let jd = build_jd_draft(&w, &[], &[]);
        assert!(jd.contains("Additional Strengths:\n- Dashboards & Reporting, Governance & Risk"));
    }

    #[test]
    fn test_ideal_candidate_bullets_listed() {
        let bullets = vec!["First.".to_string(), "Second.".to_string()];
        let jd = build_jd_draft(&wizard(), &[], &bullets);
        assert!(jd.contains("Ideal Candidate:\n- First.\n- Second."));
    }

    #[test]
    fn test_keywords_list_every_axis() {
        let jd = build_jd_draft(&wizard(), &[], &[]);
        let keywords = jd.rsplit("Keywords:\n").next().unwrap();
        assert_eq!(keywords.split(", ").count(), 8);
        assert!(keywords.starts_with("Vision→Execution Balance"));
    }
}
