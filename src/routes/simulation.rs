//! Simulation route — runs the simulator, then streams the transcript.
//!
//! DESIGN
//! ======
//! The simulator itself is instant. Pacing is applied here, on the way out:
//! each transcript line is one SSE `line` event, separated by the configured
//! delay, followed by a `done` event carrying the recommendation. The delay
//! is an async sleep inside the response stream, so a client that
//! disconnects drops the stream and cancels whatever wait is pending.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Json, Response};
use futures::stream::{self, Stream, StreamExt};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::simulation::transcript_lines;
use crate::state::AppState;
use crate::views::Notice;

pub const LINE_EVENT: &str = "line";
pub const DONE_EVENT: &str = "done";

/// Transcript snapshot taken under the session lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub recommendation: String,
}

/// `POST /api/sessions/:id/simulation` — run the simulation and stream it.
pub async fn start_simulation(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response, ApiError> {
    let outcome = state
        .write_session(id, |s| {
            s.run_simulation().map(|case| Transcript {
                lines: transcript_lines(case.discussion.as_deref().unwrap_or_default())
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
                recommendation: case.recommendation.clone().unwrap_or_default(),
            })
        })
        .await?;

    let transcript = match outcome {
        Ok(transcript) => transcript,
        Err(unmet) => return Ok(Json(Notice::from(unmet)).into_response()),
    };

    info!(session_id = %id, lines = transcript.lines.len(), "simulation run");

    let events = transcript_events(transcript, state.config.transcript_line_delay).map(Ok::<_, Infallible>);
    Ok(Sse::new(events).keep_alive(KeepAlive::default()).into_response())
}

/// Yield `lines` in order, waiting `delay` before every line but the first.
pub fn paced_lines(lines: Vec<String>, delay: Duration) -> impl Stream<Item = String> {
    stream::iter(lines.into_iter().enumerate()).then(move |(idx, line)| async move {
        if idx > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        line
    })
}

fn transcript_events(transcript: Transcript, delay: Duration) -> impl Stream<Item = Event> {
    let Transcript { lines, recommendation } = transcript;
    paced_lines(lines, delay)
        .map(|line| Event::default().event(LINE_EVENT).data(line))
        .chain(stream::once(async move { Event::default().event(DONE_EVENT).data(recommendation) }))
}

#[cfg(test)]
#[path = "simulation_test.rs"]
mod tests;
