//! HTTP request handlers for the attendance statistics API.
//!
//! This module contains the handler for the administrative recalculation
//! trigger.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::RecalculateRequest;
use super::response::{ApiError, ApiErrorResponse, RecalculateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stats/recalculate", post(recalculate_handler))
        .with_state(state)
}

/// Maps a body extraction failure to the error body served for it.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Request body does not match schema"
            );
            // A missing required field is a validation problem, not bad JSON
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request body is not valid JSON"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        other => ApiError::malformed_json(other.body_text()),
    }
}

/// Handler for POST /stats/recalculate.
///
/// Runs the aggregation engine over the supplied month of records and
/// returns the run counters. Per-employee failures are reported in the
/// `errors` counter, not as an HTTP error.
async fn recalculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recalculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(correlation_id, rejection))
                .into_response();
        }
    };

    let period = match request.period() {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid recalculation period");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let options = request.options();
    let record_count = request.records.len();
    let summary = state
        .engine()
        .run_aggregation_with(request.records, period, options)
        .await;

    info!(
        correlation_id = %correlation_id,
        period = %period,
        records = record_count,
        inserted = summary.inserted,
        updated = summary.updated,
        unchanged = summary.unchanged,
        errors = summary.errors,
        "Recalculation completed"
    );

    Json(RecalculateResponse {
        correlation_id,
        year: period.year,
        month: period.month,
        summary,
    })
    .into_response()
}
