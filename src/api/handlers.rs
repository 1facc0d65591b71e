//! HTTP request handlers for the Gratuity Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_with_rules;
use crate::models::GratuityInput;
use crate::presentation::{GratuityForm, ResultView};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/form", post(calculate_form_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Accepts typed numeric input and returns the calculated gratuity.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match payload {
        Ok(Json(request)) => calculate(&state, request.into(), correlation_id),
        Err(rejection) => rejection_response(rejection, correlation_id),
    }
}

/// Handler for POST /calculate/form.
///
/// Accepts raw form text, sanitizes it the way the calculator form does,
/// and then calculates.
async fn calculate_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<GratuityForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing form calculation request");

    match payload {
        Ok(Json(form)) => calculate(&state, form.sanitize(), correlation_id),
        Err(rejection) => rejection_response(rejection, correlation_id),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Runs the calculation and builds the response envelope.
fn calculate(state: &AppState, input: GratuityInput, correlation_id: Uuid) -> Response {
    let rules = state.rules();
    let start_time = Instant::now();

    match compute_with_rules(&input, rules) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                service_years = %result.service_years,
                total_gratuity = %result.total_gratuity,
                was_capped = result.was_capped,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );

            let view = ResultView::from_result(&result, &rules.currency);
            let response = CalculationResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                input,
                result,
                view,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
