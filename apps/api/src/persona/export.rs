//! Persona JSON export — the downloadable snapshot of a completed wizard.

use serde::{Deserialize, Serialize};

use crate::persona::axes::{axis_labels, Scale};
use crate::persona::models::PersonaWizard;
use crate::persona::scoring::SCORING_METHOD;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportContext {
    pub stage: String,
    pub challenges: Vec<String>,
    pub team_structure: String,
    pub culture: String,
    pub priorities: String,
    pub influence_tags: Vec<String>,
    pub influence_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPersona {
    pub axes: Vec<String>,
    pub weights: Vec<f64>,
    pub persona_scores: Vec<u8>,
    pub scale: Scale,
    pub additional_strengths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSuccess {
    pub short_term: String,
    pub long_term: String,
    pub cultural_impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportScoring {
    pub method: String,
    pub fit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDerived {
    pub ideal_candidate: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaExport {
    pub role_title: String,
    pub organisation: String,
    pub context: ExportContext,
    pub persona: ExportPersona,
    pub success: ExportSuccess,
    pub scoring: ExportScoring,
    pub derived: ExportDerived,
}

pub fn build_export(wizard: &PersonaWizard, fit: i64, ideal_candidate: Vec<String>) -> PersonaExport {
    PersonaExport {
        role_title: wizard.role.title.clone(),
        organisation: wizard.context.organisation.clone(),
        context: ExportContext {
            stage: wizard.context.stage.clone(),
            challenges: split_challenges(&wizard.context.challenges),
            team_structure: wizard.context.team.clone(),
            culture: wizard.context.culture.clone(),
            priorities: wizard.context.priorities.clone(),
            influence_tags: wizard.role.influence_tags.clone(),
            influence_notes: wizard.role.influence_notes.clone(),
        },
        persona: ExportPersona {
            axes: axis_labels(),
            weights: wizard.persona.weights.clone(),
            persona_scores: wizard.persona.scores.clone(),
            scale: Scale::default(),
            additional_strengths: wizard.persona.strengths.clone(),
        },
        success: ExportSuccess {
            short_term: wizard.success.short_term.clone(),
            long_term: wizard.success.long_term.clone(),
            cultural_impact: wizard.success.cultural_impact.clone(),
        },
        scoring: ExportScoring {
            method: SCORING_METHOD.to_string(),
            fit,
        },
        derived: ExportDerived { ideal_candidate },
    }
}

/// Comma-separated challenges → trimmed, non-empty list.
pub fn split_challenges(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `ERP  Transformation Manager` → `erp_transformation_manager_persona.json`.
pub fn export_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("{slug}_persona.json")
}

/// `Content-Disposition` value for the download. The quoted `filename` keeps
/// only visible ASCII; `filename*` carries the full UTF-8 name (RFC 5987).
pub fn content_disposition(title: &str) -> String {
    let filename = export_filename(title);
    let ascii: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
        .collect();
    if ascii == filename {
        return format!("attachment; filename=\"{ascii}\"");
    }
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        percent_encode_attr(&filename)
    )
}

fn percent_encode_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for b in value.bytes() {
        if b.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}
