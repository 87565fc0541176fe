// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::quiz::ruleset::RollNumberRule;

/// Scoring service error.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error, message is logged and hidden from the client
    InternalServerError(String),

    // 500 with a message the client is allowed to see
    StoreFailed,

    // 400 Bad Request
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::StoreFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store result".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Errors surfaced to the person taking the quiz.
///
/// None of these are fatal: every variant is recovered from by re-entering
/// input or re-invoking the action.
#[derive(Debug)]
pub enum QuizError {
    /// School code or roll number left blank.
    MissingInput,
    InvalidSchoolCode,
    InvalidRollNumber(RollNumberRule),
    /// Submit attempted before a session was started.
    NoSession,
    /// Submit attempted with no question answered (attempted-only ruleset).
    NothingAttempted,
    /// The question resource could not be loaded or parsed.
    QuestionLoad(String),
    /// The scoring endpoint answered with a non-success status; holds its body.
    SubmitRejected(String),
    /// Transport failure or an unreadable response.
    Network(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::MissingInput => write!(f, "Enter school code and roll number."),
            QuizError::InvalidSchoolCode => write!(
                f,
                "Invalid School Code. It must be 3 uppercase city letters followed by 3 digits (e.g., BLR123)."
            ),
            QuizError::InvalidRollNumber(rule) => {
                write!(f, "Invalid Roll Number. {}", rule.requirement())
            }
            QuizError::NoSession => write!(f, "Start test first"),
            QuizError::NothingAttempted => {
                write!(f, "Answer at least one question before submitting.")
            }
            QuizError::QuestionLoad(msg) => write!(f, "Could not load questions: {}", msg),
            QuizError::SubmitRejected(body) => write!(f, "Submit failed: {}", body),
            QuizError::Network(msg) => write!(f, "Submit failed: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Network(err.to_string())
    }
}
