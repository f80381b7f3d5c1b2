//! Session routes: lifecycle, page views, case selection, feedback.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::cases::NewCaseForm;
use crate::services::feedback::{FEEDBACK_ACK, Rating};
use crate::state::{AppState, SessionState, Stage};
use crate::views::{self, CASE_CREATED_ACK, Notice, Page, PageView};

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub stage: Stage,
    pub case: Option<String>,
}

/// Any JSON number is accepted here so range errors surface as 400
/// `E_INVALID_RATING` rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    pub rating: f64,
}

/// `POST /api/sessions` — open an empty session.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let id = state.open_session().await;
    info!(session_id = %id, "session opened");
    (StatusCode::CREATED, Json(SessionCreated { id }))
}

/// `DELETE /api/sessions/:id` — drop a session and its case.
pub async fn delete_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    state.close_session(id).await?;
    info!(session_id = %id, "session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/sessions/:id` — stage and current case name.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let summary = state
        .read_session(id, |s: &SessionState| SessionSummary {
            id,
            stage: s.stage(),
            case: s.current_case().map(|c| c.name.clone()),
        })
        .await?;
    Ok(Json(summary))
}

/// `GET /api/sessions/:id/pages/:page` — render one page for this session.
pub async fn get_page(
    State(state): State<AppState>,
    Path((id, page)): Path<(Uuid, Page)>,
) -> Result<Json<PageView>, ApiError> {
    let view = state.read_session(id, |s| views::render(page, s)).await?;
    Ok(Json(view))
}

/// `POST /api/sessions/:id/cases/predefined/:name` — load a predefined case.
pub async fn select_predefined(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<Notice>, ApiError> {
    let loaded = state
        .write_session(id, |s| s.select_predefined(&name).map(|case| case.name.clone()))
        .await??;
    info!(session_id = %id, case = %loaded, "predefined case loaded");
    Ok(Json(Notice::success(format!("Loaded: {loaded}"))))
}

/// `POST /api/sessions/:id/cases` — create a case from the form.
pub async fn create_case(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<NewCaseForm>,
) -> Result<Json<Notice>, ApiError> {
    let material_count = state
        .write_session(id, |s| s.create_case(&form, state.classifier.as_ref()).materials.len())
        .await?;
    info!(session_id = %id, case = %form.name, material_count, "case created");
    Ok(Json(Notice::success(CASE_CREATED_ACK)))
}

/// `POST /api/sessions/:id/feedback` — acknowledge a rating. Nothing is stored.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<FeedbackBody>,
) -> Result<Json<Notice>, ApiError> {
    let rating = Rating::new(body.rating)?;
    let outcome = state.read_session(id, |s| s.submit_feedback(rating)).await?;

    let notice = match outcome {
        Ok(()) => {
            info!(session_id = %id, rating = rating.value(), "feedback received");
            Notice::success(FEEDBACK_ACK)
        }
        Err(unmet) => Notice::from(unmet),
    };
    Ok(Json(notice))
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
