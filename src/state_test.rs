use super::*;
use crate::services::cases::{MARKET_EXPANSION, NEW_PRODUCT_INVESTMENT};
use crate::services::simulation::DEFAULT_RECOMMENDATION;
use super::test_helpers::{FixedClassifier, form, test_app_state};

use crate::services::classifier::MaterialCategory;

const CLASSIFIER: FixedClassifier = FixedClassifier(MaterialCategory::Agents);

// =============================================================================
// Stage transitions
// =============================================================================

#[test]
fn new_session_has_no_case() {
    let s = SessionState::new();
    assert_eq!(s.stage(), Stage::NoCase);
    assert!(s.current_case().is_none());
    assert_eq!(s.require_case().unwrap_err(), Unmet::NoCase);
    assert_eq!(s.require_simulated().unwrap_err(), Unmet::NoSimulation);
}

#[test]
fn create_case_moves_to_case_selected() {
    let mut s = SessionState::new();
    s.create_case(&form("Pricing", "a"), &CLASSIFIER);
    assert_eq!(s.stage(), Stage::CaseSelected);
    assert_eq!(s.require_case().unwrap().name, "Pricing");
    assert_eq!(s.require_simulated().unwrap_err(), Unmet::NoSimulation);
}

#[test]
fn running_simulation_moves_to_simulated() {
    let mut s = SessionState::new();
    s.create_case(&form("Pricing", ""), &CLASSIFIER);
    let case = s.run_simulation().unwrap();
    assert_eq!(case.recommendation.as_deref(), Some(DEFAULT_RECOMMENDATION));
    assert_eq!(s.stage(), Stage::Simulated);
    assert!(s.require_simulated().is_ok());
}

#[test]
fn simulation_without_case_is_unmet() {
    let mut s = SessionState::new();
    assert_eq!(s.run_simulation().unwrap_err(), Unmet::NoCase);
    assert_eq!(s.stage(), Stage::NoCase);
}

#[test]
fn predefined_case_is_immediately_analysis_ready() {
    let mut s = SessionState::new();
    s.select_predefined(NEW_PRODUCT_INVESTMENT).unwrap();
    assert_eq!(s.stage(), Stage::Simulated);
    assert_eq!(s.require_simulated().unwrap().recommendation.as_deref(), Some("Pilot the product first."));
}

#[test]
fn selecting_new_case_discards_simulation() {
    let mut s = SessionState::new();
    s.create_case(&form("A", ""), &CLASSIFIER);
    s.run_simulation().unwrap();
    s.create_case(&form("B", ""), &CLASSIFIER);
    assert_eq!(s.stage(), Stage::CaseSelected);
    assert!(s.require_case().unwrap().discussion.is_none());
}

#[test]
fn reselecting_predefined_does_not_restore_mutations() {
    let mut s = SessionState::new();
    s.select_predefined(MARKET_EXPANSION).unwrap();
    s.current_case.as_mut().unwrap().recommendation = Some("mutated".into());
    s.select_predefined(NEW_PRODUCT_INVESTMENT).unwrap();
    s.select_predefined(MARKET_EXPANSION).unwrap();
    assert_eq!(s.require_case().unwrap().recommendation.as_deref(), Some("Start with a feasibility study."));
}

#[test]
fn unknown_predefined_leaves_slot_untouched() {
    let mut s = SessionState::new();
    s.create_case(&form("Keep me", ""), &CLASSIFIER);
    assert!(s.select_predefined("Nope").is_err());
    assert_eq!(s.require_case().unwrap().name, "Keep me");
}

// =============================================================================
// Feedback
// =============================================================================

#[test]
fn feedback_requires_analysis_precondition() {
    let mut s = SessionState::new();
    let rating = Rating::new(3.0).unwrap();
    assert_eq!(s.submit_feedback(rating).unwrap_err(), Unmet::NoSimulation);
    s.create_case(&form("A", ""), &CLASSIFIER);
    assert_eq!(s.submit_feedback(rating).unwrap_err(), Unmet::NoSimulation);
    s.run_simulation().unwrap();
    assert!(s.submit_feedback(rating).is_ok());
}

#[test]
fn feedback_has_no_effect_on_session() {
    let mut s = SessionState::new();
    s.select_predefined(MARKET_EXPANSION).unwrap();
    let before = s.current_case().cloned();
    s.submit_feedback(Rating::new(3.0).unwrap()).unwrap();
    assert_eq!(s.current_case().cloned(), before);
    assert_eq!(s.stage(), Stage::Simulated);
}

#[test]
fn unmet_messages() {
    assert_eq!(Unmet::NoCase.message(), "Select or create a case first.");
    assert_eq!(Unmet::NoSimulation.message(), "Run a simulation first.");
}

#[test]
fn stage_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Stage::CaseSelected).unwrap(), "case_selected");
}

// =============================================================================
// AppState sessions
// =============================================================================

#[tokio::test]
async fn sessions_are_isolated() {
    let state = test_app_state();
    let a = state.open_session().await;
    let b = state.open_session().await;
    assert_ne!(a, b);

    state
        .write_session(a, |s| {
            s.select_predefined(MARKET_EXPANSION).unwrap();
        })
        .await
        .unwrap();

    assert_eq!(state.read_session(a, SessionState::stage).await.unwrap(), Stage::Simulated);
    assert_eq!(state.read_session(b, SessionState::stage).await.unwrap(), Stage::NoCase);
}

#[tokio::test]
async fn close_session_removes_it() {
    let state = test_app_state();
    let id = state.open_session().await;
    state.close_session(id).await.unwrap();
    let err = state.read_session(id, SessionState::stage).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(missing) if missing == id));
    assert!(state.close_session(id).await.is_err());
}

#[tokio::test]
async fn unknown_session_maps_to_not_found() {
    let state = test_app_state();
    let err = state.write_session(Uuid::nil(), |_| ()).await.unwrap_err();
    assert_eq!(err.error_code(), "E_SESSION_NOT_FOUND");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn app_state_classifier_is_injected() {
    let state = test_app_state();
    let id = state.open_session().await;
    let category = state
        .write_session(id, |s| {
            let case = s.create_case(&form("n", "x"), state.classifier.as_ref());
            case.materials[0].category
        })
        .await
        .unwrap();
    assert_eq!(category, MaterialCategory::Problems);
}
