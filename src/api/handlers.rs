//! HTTP request handlers for the Benefit Simulation Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! simulation endpoint validates its input at the boundary, runs the pure
//! calculation, appends the result to the shared bounded history, and
//! returns the result record verbatim.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_pension, calculate_retirement, calculate_severance, validate_pension_input,
    validate_retirement_input, validate_severance_input,
};
use crate::models::PersonProfile;

use super::request::{PensionRequest, RetirementRequest, SeveranceRequest};
use super::response::{ApiError, ApiErrorResponse, HistoryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate/retirement", post(retirement_handler))
        .route("/simulate/pension", post(pension_handler))
        .route("/simulate/severance", post(severance_handler))
        .route("/history", get(history_handler).delete(clear_history_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for the POST /simulate/retirement endpoint.
async fn retirement_handler(
    State(state): State<AppState>,
    payload: Result<Json<RetirementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing retirement simulation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let profile: PersonProfile = request.into();
    let rules = state.rules().inss();

    if let Err(err) = validate_retirement_input(&profile, rules) {
        warn!(correlation_id = %correlation_id, error = %err, "Retirement input rejected");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_retirement(&profile, rules, Utc::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        simulation_id = %result.id,
        remaining_years = result.remaining_years,
        estimated_benefit = %result.estimated_benefit,
        "Retirement simulation completed"
    );

    match state.history().write() {
        Ok(mut history) => history.push_retirement(result.clone()),
        Err(_) => warn!(correlation_id = %correlation_id, "History lock poisoned, result not stored"),
    }

    ok_json(result)
}

/// Handler for the POST /simulate/pension endpoint.
async fn pension_handler(
    State(state): State<AppState>,
    payload: Result<Json<PensionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pension simulation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_pension_input(
        request.monthly_contribution,
        request.duration_years,
        request.annual_rate,
        request.current_age,
    ) {
        warn!(correlation_id = %correlation_id, error = %err, "Pension input rejected");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_pension(
        request.monthly_contribution,
        request.duration_years,
        request.annual_rate,
        request.current_age,
    );
    info!(
        correlation_id = %correlation_id,
        simulation_id = %result.id,
        final_balance = %result.final_balance,
        projection_years = result.projection.len(),
        "Pension simulation completed"
    );

    match state.history().write() {
        Ok(mut history) => history.push_pension(result.clone()),
        Err(_) => warn!(correlation_id = %correlation_id, "History lock poisoned, result not stored"),
    }

    ok_json(result)
}

/// Handler for the POST /simulate/severance endpoint.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance simulation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_severance_input(
        request.wage,
        request.tenure_months,
        request.unused_vacation_days,
        state.rules().inss(),
    ) {
        warn!(correlation_id = %correlation_id, error = %err, "Severance input rejected");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let result = calculate_severance(
        request.wage,
        request.tenure_months,
        request.unused_vacation_days,
        request.termination_type,
        state.rules().labour(),
    );
    info!(
        correlation_id = %correlation_id,
        simulation_id = %result.id,
        total = %result.amounts.total,
        "Severance simulation completed"
    );

    match state.history().write() {
        Ok(mut history) => history.push_severance(result.clone()),
        Err(_) => warn!(correlation_id = %correlation_id, "History lock poisoned, result not stored"),
    }

    ok_json(result)
}

/// Handler for the GET /history endpoint.
async fn history_handler(State(state): State<AppState>) -> Response {
    match state.history().read() {
        Ok(history) => ok_json(HistoryResponse::from(history.clone())),
        Err(_) => {
            let error = ApiError::new("HISTORY_UNAVAILABLE", "History lock poisoned");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Handler for the DELETE /history endpoint.
async fn clear_history_handler(State(state): State<AppState>) -> Response {
    match state.history().write() {
        Ok(mut history) => {
            history.clear();
            StatusCode::NO_CONTENT.into_response()
        }
        Err(_) => {
            let error = ApiError::new("HISTORY_UNAVAILABLE", "History lock poisoned");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
