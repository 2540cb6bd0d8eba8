pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::persona::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Reference data
        .route("/api/v1/persona/axes", get(handlers::handle_get_axes))
        .route(
            "/api/v1/persona/strengths",
            get(handlers::handle_get_strengths),
        )
        .route(
            "/api/v1/persona/strengths/toggle",
            post(handlers::handle_toggle_strength),
        )
        .route("/api/v1/persona/presets", get(handlers::handle_list_presets))
        .route(
            "/api/v1/persona/presets/:id",
            get(handlers::handle_get_preset),
        )
        // Scoring + derivation
        .route(
            "/api/v1/persona/fit-score",
            post(handlers::handle_fit_score),
        )
        .route("/api/v1/persona/top-axes", post(handlers::handle_top_axes))
        .route("/api/v1/persona/bullets", post(handlers::handle_bullets))
        .route("/api/v1/persona/card", post(handlers::handle_card))
        .route("/api/v1/persona/export", post(handlers::handle_export))
        .with_state(state)
}
