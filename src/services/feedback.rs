//! Feedback — simulation accuracy rating.
//!
//! Ratings are acknowledged and logged, never stored.

use axum::http::StatusCode;

use crate::error::ErrorCode;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const FEEDBACK_ACK: &str = "Feedback submitted!";

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating {0} outside {MIN_RATING}..={MAX_RATING}")]
    InvalidRating(f64),
}

impl ErrorCode for FeedbackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRating(_) => "E_INVALID_RATING",
        }
    }

    fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// A whole slider value in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    /// Accepts any JSON number; only whole values on the slider pass.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::InvalidRating`] for values off the slider.
    pub fn new(value: f64) -> Result<Self, FeedbackError> {
        (MIN_RATING..=MAX_RATING)
            .find(|step| (f64::from(*step) - value).abs() < f64::EPSILON)
            .map(Self)
            .ok_or(FeedbackError::InvalidRating(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}
