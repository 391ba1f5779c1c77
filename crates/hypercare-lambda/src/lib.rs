//! hypercare-lambda
//!
//! HTTP surface of the assessment engine: Aski interview state and Monev
//! tracking over JSON, served from AWS Lambda.

pub mod config;
pub mod error;
pub mod locks;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full router over `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Reference data
        .route("/api/aski/variables", get(routes::aski::list_variables))
        .route("/api/aski/phases", get(routes::aski::list_phases))
        .route("/api/monev/diagnoses", get(routes::monev::list_diagnoses))
        .route(
            "/api/monev/diagnoses/{code}",
            get(routes::monev::get_diagnosis),
        )
        // Aski interview state
        .route(
            "/api/aski/assessment-state",
            get(routes::aski::get_assessment_state)
                .post(routes::aski::capture_variable)
                .put(routes::aski::patch_assessment_state),
        )
        // Monev sessions
        .route(
            "/api/monev/sessions/{session_id}/{code}",
            get(routes::monev::get_session_assessment)
                .delete(routes::monev::clear_session_assessment),
        )
        .route(
            "/api/monev/sessions/{session_id}/{code}/symptoms/{symptom_id}/toggle",
            post(routes::monev::toggle_symptom),
        )
        .route(
            "/api/monev/sessions/{session_id}/{code}/abilities/known/toggle",
            post(routes::monev::toggle_ability_known),
        )
        .route(
            "/api/monev/sessions/{session_id}/{code}/abilities/practiced/toggle",
            post(routes::monev::toggle_ability_practiced),
        )
        .route(
            "/api/monev/sessions/{session_id}/{code}/practice-details",
            put(routes::monev::update_practice_details),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
