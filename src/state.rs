//! Shared application state and per-session view state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the live sessions, the material classifier, and runtime config.
//! Each `SessionState` owns exactly one "current case" slot; sessions never
//! share cases and nothing survives a restart.
//!
//! The slot drives a three-stage machine:
//! `NoCase -> CaseSelected -> Simulated`. Selecting or creating a case from
//! any stage lands in `CaseSelected`, except predefined cases which arrive
//! already carrying a discussion and therefore read as `Simulated`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ErrorCode;
use crate::services::cases::{self, Case, CaseError, NewCaseForm};
use crate::services::classifier::MaterialClassifier;
use crate::services::feedback::Rating;
use crate::services::simulation;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SESSION_NOT_FOUND",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// A view precondition that does not hold. Rendered as a warning, never as
/// an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmet {
    NoCase,
    NoSimulation,
}

impl Unmet {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoCase => "Select or create a case first.",
            Self::NoSimulation => "Run a simulation first.",
        }
    }
}

// =============================================================================
// SESSION STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NoCase,
    CaseSelected,
    Simulated,
}

/// One user's view state: the current-case slot.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current_case: Option<Case>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_case(&self) -> Option<&Case> {
        self.current_case.as_ref()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        match &self.current_case {
            None => Stage::NoCase,
            Some(case) if case.discussion.is_some() => Stage::Simulated,
            Some(_) => Stage::CaseSelected,
        }
    }

    /// Current case, or [`Unmet::NoCase`].
    ///
    /// # Errors
    ///
    /// Returns [`Unmet::NoCase`] when the slot is empty.
    pub fn require_case(&self) -> Result<&Case, Unmet> {
        self.current_case.as_ref().ok_or(Unmet::NoCase)
    }

    /// Current case if it already carries a discussion.
    ///
    /// # Errors
    ///
    /// Returns [`Unmet::NoSimulation`] when the slot is empty or the case has
    /// no discussion yet.
    pub fn require_simulated(&self) -> Result<&Case, Unmet> {
        match &self.current_case {
            Some(case) if case.discussion.is_some() => Ok(case),
            _ => Err(Unmet::NoSimulation),
        }
    }

    /// Replace the slot with a fresh copy of a predefined case.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnknownPredefined`] if the name is not registered;
    /// the slot is left untouched in that case.
    pub fn select_predefined(&mut self, name: &str) -> Result<&Case, CaseError> {
        let case = cases::predefined(name)?;
        Ok(&*self.current_case.insert(case))
    }

    /// Replace the slot with a newly created case.
    pub fn create_case(&mut self, form: &NewCaseForm, classifier: &dyn MaterialClassifier) -> &Case {
        self.current_case.insert(cases::create_case(form, classifier))
    }

    /// Run the simulator on the current case.
    ///
    /// # Errors
    ///
    /// Returns [`Unmet::NoCase`] when there is nothing to simulate.
    pub fn run_simulation(&mut self) -> Result<&Case, Unmet> {
        let case = self.current_case.as_mut().ok_or(Unmet::NoCase)?;
        simulation::run(case);
        Ok(&*case)
    }

    /// Accept a rating from the Analysis page. Has no effect on the session.
    ///
    /// # Errors
    ///
    /// Returns [`Unmet::NoSimulation`] when the Analysis page is not reachable.
    pub fn submit_feedback(&self, _rating: Rating) -> Result<(), Unmet> {
        self.require_simulated().map(|_| ())
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
    pub classifier: Arc<dyn MaterialClassifier>,
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, classifier: Arc<dyn MaterialClassifier>) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), classifier, config }
    }

    /// Open an empty session and return its ID.
    pub async fn open_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, SessionState::new());
        id
    }

    /// Drop a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session does not exist.
    pub async fn close_session(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }

    /// Run `f` against a session under the read lock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session does not exist.
    pub async fn read_session<T>(&self, id: Uuid, f: impl FnOnce(&SessionState) -> T) -> Result<T, SessionError> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(f).ok_or(SessionError::NotFound(id))
    }

    /// Run `f` against a session under the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session does not exist.
    pub async fn write_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f).ok_or(SessionError::NotFound(id))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
