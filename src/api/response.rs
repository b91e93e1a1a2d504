//! Response types for the attendance statistics API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::AggregationSummary;
use crate::error::EngineError;

/// Response body of a successful recalculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateResponse {
    /// Correlation id of the request, also present in log lines.
    pub correlation_id: Uuid,
    /// The calendar year recalculated.
    pub year: i32,
    /// The calendar month recalculated.
    pub month: u32,
    /// The run counters.
    #[serde(flatten)]
    pub summary: AggregationSummary,
}

/// Machine-readable error body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable error code, e.g. `INVALID_PERIOD`.
    pub code: String,
    /// Message for operators.
    pub message: String,
    /// Extra context, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error body.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A `VALIDATION_ERROR` body.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A `MALFORMED_JSON` body.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is served under.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Serves `error` as `400 Bad Request`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, body) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CONFIG_ERROR", "Configuration error").with_details(message),
            ),
            EngineError::InvalidRecord { .. } => {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            EngineError::InvalidPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PERIOD", message)
                    .with_details("Month must be between 1 and 12"),
            ),
            EngineError::StoreError { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("STORE_ERROR", "Statistics store unavailable").with_details(message),
            ),
            EngineError::AggregationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("AGGREGATION_ERROR", "Aggregation failed").with_details(message),
            ),
        };
        Self {
            status,
            error: body,
        }
    }
}
