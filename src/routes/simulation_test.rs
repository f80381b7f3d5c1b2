use super::*;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use tokio::time::Instant;

use crate::services::cases;
use crate::services::simulation::CLOSING_LINE;
use crate::state::test_helpers::{self, form};
use crate::state::{SessionState, Stage};

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// paced_lines
// =============================================================================

#[tokio::test]
async fn paced_lines_preserves_order() {
    let lines: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
    let out: Vec<String> = paced_lines(lines.clone(), Duration::ZERO).collect().await;
    assert_eq!(out, lines);
}

#[tokio::test]
async fn paced_lines_waits_between_lines() {
    let delay = Duration::from_millis(20);
    let start = Instant::now();
    let out: Vec<String> = paced_lines(vec!["a".into(), "b".into(), "c".into()], delay).collect().await;
    assert_eq!(out.len(), 3);
    assert!(start.elapsed() >= delay * 2);
}

#[tokio::test]
async fn paced_lines_first_line_is_immediate() {
    let start = Instant::now();
    let mut stream = Box::pin(paced_lines(vec!["only".into()], Duration::from_secs(30)));
    assert_eq!(stream.next().await.as_deref(), Some("only"));
    assert!(start.elapsed() < Duration::from_secs(1));
    assert!(stream.next().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn dropping_paced_lines_cancels_pending_delay() {
    let start = Instant::now();
    let mut stream = Box::pin(paced_lines(vec!["first".into(), "second".into()], Duration::from_secs(3600)));
    assert_eq!(stream.next().await.as_deref(), Some("first"));
    assert!(futures::poll!(stream.next()).is_pending());

    drop(stream);
    tokio::task::yield_now().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn paced_lines_empty() {
    let out: Vec<String> = paced_lines(Vec::new(), Duration::from_millis(5)).collect().await;
    assert!(out.is_empty());
}

// =============================================================================
// start_simulation
// =============================================================================

#[tokio::test]
async fn start_without_case_returns_warning() {
    let state = test_helpers::test_app_state();
    let id = state.open_session().await;
    let resp = start_simulation(State(state), Path(id)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body, serde_json::json!({"kind": "warning", "message": "Select or create a case first."}));
}

#[tokio::test]
async fn start_unknown_session_is_404() {
    let state = test_helpers::test_app_state();
    let err = start_simulation(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn start_streams_templated_transcript_and_marks_simulated() {
    let state = test_helpers::test_app_state();
    let id = state.open_session().await;
    state
        .write_session(id, |s| {
            s.create_case(&form("Pricing", "a"), state.classifier.as_ref());
        })
        .await
        .unwrap();

    let resp = start_simulation(State(state.clone()), Path(id)).await.unwrap();
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/event-stream");
    assert_eq!(state.read_session(id, SessionState::stage).await.unwrap(), Stage::Simulated);

    let text = body_text(resp).await;
    let ceo = text.find("data: CEO: Based on my profile").unwrap();
    let coo = text.find("data: COO: Based on my profile").unwrap();
    let closing = text.find(&format!("data: {CLOSING_LINE}")).unwrap();
    let done = text.find("event: done\ndata: Proceed with caution").unwrap();
    assert!(ceo < coo && coo < closing && closing < done);
    assert_eq!(text.matches("event: line").count(), 5);
}

#[tokio::test]
async fn start_replays_predefined_discussion() {
    let state = test_helpers::test_app_state();
    let case = cases::predefined(cases::NEW_PRODUCT_INVESTMENT).unwrap();
    let id = test_helpers::seed_session_with_case(&state, case.clone()).await;

    let resp = start_simulation(State(state.clone()), Path(id)).await.unwrap();
    let text = body_text(resp).await;
    assert!(text.contains("data: **CFO**: Projections are solid, but upfront costs are a concern."));
    assert!(text.contains("event: done\ndata: Pilot the product first."));
    assert_eq!(text.matches("event: line").count(), 5);

    let after = state.read_session(id, |s| s.current_case().cloned()).await.unwrap();
    assert_eq!(after, Some(case));
}
