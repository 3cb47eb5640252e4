//! API error handling
//!
//! Maps core errors onto HTTP responses with `{ code, message }` payloads.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use agegate_core::GateError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
    /// A core age-gate error (input, validation, refusal, storage)
    #[error(transparent)]
    Gate(#[from] GateError),

    /// The request body could not be deserialized into the expected shape
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Gate(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get an error code for the client (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Gate(err) => err.error_code(),
            Self::InvalidRequestBody(_) => "INVALID_REQUEST_BODY",
        }
    }

    /// Get safe message for client (doesn't leak internal details)
    pub fn client_message(&self) -> String {
        match self {
            Self::Gate(err) => err.client_message(),
            Self::InvalidRequestBody(_) => self.to_string(),
        }
    }
}

/// API error response payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending field for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let field = match err {
            ApiError::Gate(GateError::ValidationError { field, .. }) => Some((*field).to_string()),
            _ => None,
        };

        Self {
            code: err.error_code().to_string(),
            message: err.client_message(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Gate(ref err) = self {
            if err.is_server_error() {
                tracing::error!(error = %err, "Age gate request failed");
            }
        }
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

impl From<agegate_store::StoreError> for ApiError {
    fn from(err: agegate_store::StoreError) -> Self {
        Self::Gate(GateError::from(err))
    }
}
