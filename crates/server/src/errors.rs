use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::customer::validation::ValidationErrors;
use service::errors::ServiceError;

/// `{"error": <title>, "message": <detail>}` with an explicit status.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, message: Option<String>) -> Self {
        Self { status, error: error.to_string(), message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Client-facing text for store failures.
pub const STORE_FAILURE: &str = "customer store unavailable";

/// Every failure a customer endpoint can render.
#[derive(Debug)]
pub enum CustomerApiError {
    /// Field violations, rendered as a bare `{field: message}` map.
    Invalid(ValidationErrors),
    Service(ServiceError),
    Body(String),
}

impl From<ValidationErrors> for CustomerApiError {
    fn from(e: ValidationErrors) -> Self { Self::Invalid(e) }
}

impl From<ServiceError> for CustomerApiError {
    fn from(e: ServiceError) -> Self { Self::Service(e) }
}

impl From<JsonRejection> for CustomerApiError {
    fn from(r: JsonRejection) -> Self { Self::Body(r.body_text()) }
}

impl IntoResponse for CustomerApiError {
    fn into_response(self) -> Response {
        match self {
            CustomerApiError::Invalid(fields) => (StatusCode::BAD_REQUEST, Json(fields)).into_response(),
            CustomerApiError::Body(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)).into_response(),
            CustomerApiError::Service(e) => {
                let (status, title, message) = match &e {
                    ServiceError::Duplicate(_) => (StatusCode::BAD_REQUEST, "Bad Request", e.to_string()),
                    ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found", e.to_string()),
                    ServiceError::Db(_) => {
                        // Driver detail stays in the log.
                        error!(err = %e, code = e.code(), "customer store failure");
                        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", STORE_FAILURE.to_string())
                    }
                };
                JsonApiError::new(status, title, Some(message)).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
