use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::editor::SubmitError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response()
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(value: minijinja::Error) -> Self {
        error!("Template error: {value}");
        ApiError::Internal("Failed to render page".into())
    }
}

impl From<SubmitError> for ApiError {
    fn from(value: SubmitError) -> Self {
        match value {
            SubmitError::NotOpen => ApiError::NotFound(value.to_string()),
            SubmitError::Busy => ApiError::Conflict(value.to_string()),
            SubmitError::Invalid(_) => ApiError::Unprocessable(value.to_string()),
        }
    }
}
