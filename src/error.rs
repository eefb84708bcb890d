//! API Error Types
//!
//! User-facing failures of the HTTP layer and their response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Receipt failed one or more validation rules
    #[error("The receipt is invalid: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    /// No score stored under the requested id
    #[error("No receipt found for id {id}")]
    NotFound { id: String },
}

#[derive(Serialize)]
struct ValidationErrorBody<'a> {
    error: &'static str,
    messages: &'a [String],
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    pub fn validation(messages: Vec<String>) -> Self {
        ApiError::Validation { messages }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound { id: id.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Validation { messages } => (
                status,
                Json(ValidationErrorBody {
                    error: INVALID_RECEIPT_MESSAGE,
                    messages,
                }),
            )
                .into_response(),
            ApiError::NotFound { .. } => (
                status,
                Json(ErrorBody {
                    error: NOT_FOUND_MESSAGE,
                }),
            )
                .into_response(),
        }
    }
}
