//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page of the app is a `GET` on the session's page route, and each
//! button or form is a `POST`. Handlers translate HTTP into calls on
//! `SessionState` and the domain services; unmet page preconditions come
//! back as 200 warning bodies, while unknown ids map to 404.

pub mod catalog;
pub mod sessions;
pub mod simulation;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/pages", get(catalog::list_pages))
        .route("/api/agents", get(catalog::list_agents))
        .route("/api/cases", get(catalog::list_cases))
        .route("/api/sessions", post(sessions::create_session))
        .route("/api/sessions/{id}", get(sessions::get_session).delete(sessions::delete_session))
        .route("/api/sessions/{id}/pages/{page}", get(sessions::get_page))
        .route("/api/sessions/{id}/cases", post(sessions::create_case))
        .route("/api/sessions/{id}/cases/predefined/{name}", post(sessions::select_predefined))
        .route("/api/sessions/{id}/simulation", post(simulation::start_simulation))
        .route("/api/sessions/{id}/feedback", post(sessions::submit_feedback))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
