// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{questions, scoring},
    state::AppState,
};

/// Assembles the scoring service router.
///
/// * `GET  /questions.json`          public question document
/// * `POST /api/submit`              score and record an attempt
/// * `GET  /api/attempts/{school}`   recorded attempts for a school
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/submit", post(scoring::submit_attempt))
        .route("/attempts/{school}", get(scoring::list_attempts));

    Router::new()
        .route("/questions.json", get(questions::get_questions))
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
