//! Axum route handlers for the Persona API.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::persona::axes::{axis_labels, zip_ratings, Scale, AXES, DEFAULT_SCORES, DEFAULT_WEIGHTS};
use crate::persona::card::{build_card, build_card_export, CardExport, PersonaCard};
use crate::persona::export::content_disposition;
use crate::persona::models::PersonaWizard;
use crate::persona::narrative::{build_narrative_bullets, NarrativeContext};
use crate::persona::presets::Preset;
use crate::persona::scoring::{rank_top_axes, FitReport};
use crate::persona::strengths::{
    find_strength, strength_catalog, strength_problems, toggle_strength, StrengthOption,
    MAX_STRENGTHS,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AxesResponse {
    pub axes: Vec<String>,
    pub default_scores: Vec<u8>,
    pub default_weights: Vec<f64>,
    pub scale: Scale,
}

#[derive(Debug, Serialize)]
pub struct StrengthsResponse {
    pub max_selected: usize,
    pub options: &'static [StrengthOption],
}

#[derive(Debug, Deserialize)]
pub struct StrengthToggleRequest {
    #[serde(default)]
    pub selected: Vec<String>,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct StrengthToggleResponse {
    pub selected: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PresetSummary {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PresetDetailResponse {
    pub preset: Preset,
    pub wizard: PersonaWizard,
}

#[derive(Debug, Deserialize)]
pub struct FitScoreRequest {
    pub scores: Vec<u8>,
    pub weights: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TopAxesRequest {
    /// Defaults to the fixed axis list.
    pub axes: Option<Vec<String>>,
    pub scores: Vec<u8>,
    /// Defaults to the configured `PERSONA_TOP_AXES`.
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TopAxesResponse {
    pub top_axes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulletsResponse {
    pub bullets: Vec<String>,
}

/// Response header carrying the card id of an export.
pub const CARD_ID_HEADER: &str = "x-card-id";

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub card_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/persona/axes
pub async fn handle_get_axes() -> Json<AxesResponse> {
    Json(AxesResponse {
        axes: axis_labels(),
        default_scores: DEFAULT_SCORES.to_vec(),
        default_weights: DEFAULT_WEIGHTS.to_vec(),
        scale: Scale::default(),
    })
}

/// GET /api/v1/persona/strengths
pub async fn handle_get_strengths() -> Json<StrengthsResponse> {
    Json(StrengthsResponse {
        max_selected: MAX_STRENGTHS,
        options: strength_catalog(),
    })
}

/// POST /api/v1/persona/strengths/toggle
///
/// Applies one click on a strength tile. Unknown ids and an invalid current
/// selection are rejected; a full selection is returned unchanged.
pub async fn handle_toggle_strength(
    Json(request): Json<StrengthToggleRequest>,
) -> Result<Json<StrengthToggleResponse>, AppError> {
    if find_strength(&request.id).is_none() {
        return Err(AppError::Validation(format!(
            "unknown strength '{}'",
            request.id
        )));
    }
    let problems = strength_problems(&request.selected);
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join("; ")));
    }
    Ok(Json(StrengthToggleResponse {
        selected: toggle_strength(&request.selected, &request.id),
    }))
}

/// GET /api/v1/persona/presets
pub async fn handle_list_presets(State(state): State<AppState>) -> Json<Vec<PresetSummary>> {
    Json(
        state
            .presets
            .list()
            .iter()
            .map(|p| PresetSummary {
                id: p.id.clone(),
                label: p.label.clone(),
            })
            .collect(),
    )
}

/// GET /api/v1/persona/presets/:id
///
/// Returns the preset and a wizard seeded from it.
pub async fn handle_get_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PresetDetailResponse>, AppError> {
    let preset = state
        .presets
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Preset {id} not found")))?;

    Ok(Json(PresetDetailResponse {
        wizard: preset.to_wizard(),
        preset: preset.clone(),
    }))
}

/// POST /api/v1/persona/fit-score
///
/// Scores raw vectors against the fixed axes. Mismatched lengths are a 400.
pub async fn handle_fit_score(
    State(state): State<AppState>,
    Json(request): Json<FitScoreRequest>,
) -> Result<Json<FitReport>, AppError> {
    let ratings = zip_ratings(&AXES, &request.scores, &request.weights)?;
    let report = state
        .fit_scorer
        .score(&ratings, state.config.top_axes)
        .await?;
    debug!(fit = report.fit, weight_total = report.weight_total, "Fit scored");
    Ok(Json(report))
}

/// POST /api/v1/persona/top-axes
pub async fn handle_top_axes(
    State(state): State<AppState>,
    Json(request): Json<TopAxesRequest>,
) -> Result<Json<TopAxesResponse>, AppError> {
    let axes = request.axes.unwrap_or_else(axis_labels);
    let top_n = request.top_n.unwrap_or(state.config.top_axes);
    let top_axes = rank_top_axes(&axes, &request.scores, top_n)?;
    Ok(Json(TopAxesResponse { top_axes }))
}

/// POST /api/v1/persona/bullets
pub async fn handle_bullets(Json(context): Json<NarrativeContext>) -> Json<BulletsResponse> {
    Json(BulletsResponse {
        bullets: build_narrative_bullets(&context),
    })
}

/// POST /api/v1/persona/card
///
/// Full derivation for a wizard: fit report, radar, ideal candidate, JD draft, checklist.
pub async fn handle_card(
    State(state): State<AppState>,
    Json(wizard): Json<PersonaWizard>,
) -> Result<Json<PersonaCard>, AppError> {
    let card = build_card(&wizard, state.fit_scorer.as_ref(), state.config.top_axes).await?;
    Ok(Json(card))
}

/// POST /api/v1/persona/export
///
/// Returns the persona JSON with a `Content-Disposition` naming the download.
/// `?card_id=` ties the export to an earlier card; the id used is echoed in
/// the `x-card-id` header.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    Json(wizard): Json<PersonaWizard>,
) -> Result<impl IntoResponse, AppError> {
    let CardExport { card_id, export } = build_card_export(
        &wizard,
        state.fit_scorer.as_ref(),
        state.config.top_axes,
        query.card_id,
    )
    .await?;
    Ok((
        [
            (header::CONTENT_DISPOSITION, content_disposition(&wizard.role.title)),
            (HeaderName::from_static(CARD_ID_HEADER), card_id.to_string()),
        ],
        Json(export),
    ))
}
