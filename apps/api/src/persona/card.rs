//! Persona Card — the full derivation pipeline for a submitted wizard:
//! validate → score → rank → narrative → JD draft, plus radar and checklist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::persona::axes::{radar_data, RadarData};
use crate::persona::checklist::{compute_checklist, Checklist};
use crate::persona::export::{build_export, PersonaExport};
use crate::persona::jd_draft::build_jd_draft;
use crate::persona::models::PersonaWizard;
use crate::persona::narrative::build_narrative_bullets;
use crate::persona::scoring::{FitReport, FitScorer};
use crate::persona::validation::validate_wizard;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCard {
    pub card_id: Uuid,
    pub role_title: String,
    pub organisation: String,
    pub fit_report: FitReport,
    pub radar: RadarData,
    pub ideal_candidate: Vec<String>,
    pub jd_draft: String,
    pub checklist: Checklist,
    pub generated_at: DateTime<Utc>,
}

/// Runs the derivation pipeline. Fails with `AppError::Validation` before
/// anything is scored if the wizard is malformed.
pub async fn build_card(
    wizard: &PersonaWizard,
    scorer: &dyn FitScorer,
    top_n: usize,
) -> Result<PersonaCard, AppError> {
    validate_wizard(wizard)?;

    let ratings = wizard.ratings()?;
    let fit_report = scorer.score(&ratings, top_n).await?;
    let ideal_candidate =
        build_narrative_bullets(&wizard.narrative_context(fit_report.top_axes.clone()));
    let jd_draft = build_jd_draft(wizard, &fit_report.top_axes, &ideal_candidate);

    let card_id = Uuid::new_v4();
    info!(
        %card_id,
        role = %wizard.role.title,
        fit = fit_report.fit,
        bullets = ideal_candidate.len(),
        "Persona card built"
    );

    Ok(PersonaCard {
        card_id,
        role_title: wizard.role.title.clone(),
        organisation: wizard.context.organisation.clone(),
        radar: radar_data(&ratings),
        checklist: compute_checklist(wizard),
        fit_report,
        ideal_candidate,
        jd_draft,
        generated_at: Utc::now(),
    })
}

/// Export body plus the id of the card it belongs to.
#[derive(Debug, Clone)]
pub struct CardExport {
    pub card_id: Uuid,
    pub export: PersonaExport,
}

/// Runs the scoring half of the pipeline and projects it onto the export
/// shape. Pass the `card_id` of an earlier card to tie the export to it;
/// otherwise a new id is minted.
pub async fn build_card_export(
    wizard: &PersonaWizard,
    scorer: &dyn FitScorer,
    top_n: usize,
    card_id: Option<Uuid>,
) -> Result<CardExport, AppError> {
    validate_wizard(wizard)?;

    let ratings = wizard.ratings()?;
    let fit_report = scorer.score(&ratings, top_n).await?;
    let ideal_candidate = build_narrative_bullets(&wizard.narrative_context(fit_report.top_axes));
    let card_id = card_id.unwrap_or_else(Uuid::new_v4);

    info!(
        %card_id,
        role = %wizard.role.title,
        fit = fit_report.fit,
        "Persona exported"
    );

    Ok(CardExport {
        card_id,
        export: build_export(wizard, fit_report.fit, ideal_candidate),
    })
}
