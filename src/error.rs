//! Error codes and the JSON error body returned by routes.
//!
//! DESIGN
//! ======
//! Every service error carries a grepable code (`E_*`) next to its display
//! message. Routes never hand-build error JSON; they convert through
//! [`ApiError`], which picks the status code from the error's code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Grepable error classification shared by all service errors.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Error body: `{"code": "E_...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Status + body pair produced from any [`ErrorCode`] error.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn from_code(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { status: err.status(), body: ErrorBody { code: err.error_code(), message: err.to_string() } }
    }
}

impl<E: ErrorCode> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self::from_code(&err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
