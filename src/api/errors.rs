use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::database::DatabaseError;
use crate::services::PlanGenerationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    TooManyRequests(String),
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ApiError::TooManyRequests(message) => {
                (StatusCode::TOO_MANY_REQUESTS, "PLEASE_WAIT", message)
            }
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();
        let body = ErrorBody {
            error_code: error_code.to_string(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// Internal causes are logged here and never echoed to the client.
impl From<PlanGenerationError> for ApiError {
    fn from(err: PlanGenerationError) -> Self {
        match err {
            PlanGenerationError::InvalidInput(invalid) => ApiError::BadRequest(invalid.to_string()),
            PlanGenerationError::PlanNotFound(_) => ApiError::NotFound(err.to_string()),
            PlanGenerationError::GenerationIncomplete(_)
            | PlanGenerationError::CatalogQueryFailed(_)
            | PlanGenerationError::Database(_) => {
                tracing::error!("Workout plan generation failed: {}", err);
                ApiError::Internal("Failed to generate workout plan".to_string())
            }
        }
    }
}

// Malformed or incomplete bodies get the same JSON shape as every other 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        tracing::error!("Database error: {}", err);
        ApiError::Internal("Database error".to_string())
    }
}
