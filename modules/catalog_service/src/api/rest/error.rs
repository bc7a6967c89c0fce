//! HTTP error mapping to the `{ success: false, error }` envelope

use crate::contract::CatalogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope returned by every catalog route
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable summary
    #[schema(example = "Failed to fetch partners")]
    pub error: String,

    /// Underlying error text, only when error details are exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error response with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                success: false,
                error: error.into(),
                details: None,
            },
        }
    }

    /// Add detail message
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map domain errors to HTTP responses.
///
/// Validation messages are shown as-is with 400. Storage failures become 500
/// with `failure_message`; the underlying text is attached only when
/// `expose_details` is set.
pub fn map_domain_error(error: CatalogError, failure_message: &str, expose_details: bool) -> ApiError {
    match error {
        CatalogError::Validation { message } => ApiError::new(StatusCode::BAD_REQUEST, message),
        CatalogError::Storage { message } => {
            let api_error = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure_message);
            if expose_details {
                api_error.with_details(message)
            } else {
                api_error
            }
        }
    }
}
