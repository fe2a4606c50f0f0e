use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::submission::SubmissionError;

#[derive(Debug)]
pub enum AppError {
    Validation(&'static str),
    NotFound(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(field) => write!(f, "Validation Error: {field} is required"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(field) => {
                tracing::debug!("Rejected application: {field} is required");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("{field} is required") })),
                )
                    .into_response()
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "신청 처리 중 오류가 발생했습니다.",
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingField(field) => AppError::Validation(field),
            SubmissionError::Malformed(msg) => AppError::Internal(format!("Malformed application: {msg}")),
        }
    }
}
