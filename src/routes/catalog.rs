//! Static catalog routes: pages, agents, predefined cases.

use axum::response::Json;

use crate::services::agents::{Agent, ROSTER};
use crate::services::cases::PREDEFINED_NAMES;
use crate::views::{PageOption, page_options};

/// `GET /api/pages` — sidebar options.
pub async fn list_pages() -> Json<Vec<PageOption>> {
    Json(page_options())
}

/// `GET /api/agents` — the fixed agent roster.
pub async fn list_agents() -> Json<Vec<Agent>> {
    Json(ROSTER.to_vec())
}

/// `GET /api/cases` — predefined case names.
pub async fn list_cases() -> Json<Vec<&'static str>> {
    Json(PREDEFINED_NAMES.to_vec())
}
