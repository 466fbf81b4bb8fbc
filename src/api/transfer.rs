//! Transfer endpoints under `/api/transfer`

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use super::{error::ApiError, AppState};
use crate::cache::CacheStats;
use crate::payments::traits::PayoutProcessor;
use crate::payments::types::{PayoutRequest, PayoutResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/send", post(send_money))
        .route("/supported-methods", get(supported_methods))
        .route("/validate", get(validate_combination))
        .route("/factory-stats", get(factory_stats))
        .route("/clear-cache", post(clear_cache))
}

/// Route the request to a processor and run it.
///
/// 200 on success, 400 when the body is unreadable or the processor rejects
/// the request.
pub async fn send_money(
    State(state): State<AppState>,
    payload: Result<Json<PayoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PayoutResponse>), ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))?;

    info!(
        method = %request.payout_method,
        country = %request.destination_country,
        currency = %request.currency,
        "Received transfer request"
    );

    let violations = request.violations();
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let processor = state
        .selector
        .resolve(&request.payout_method, &request.destination_country)?;
    let response = processor.process(&request).await;

    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(response)))
}

pub async fn supported_methods(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.selector.list_supported_combinations())
}

#[derive(Debug, Deserialize)]
pub struct ValidateParams {
    pub method: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub method: String,
    pub country: String,
    pub supported: bool,
    pub message: String,
}

pub async fn validate_combination(
    State(state): State<AppState>,
    Query(params): Query<ValidateParams>,
) -> Json<ValidateResponse> {
    let supported = state.selector.is_supported(&params.method, &params.country);
    let message = if supported {
        "Combination is supported"
    } else {
        "Combination is not supported"
    };

    Json(ValidateResponse {
        method: params.method,
        country: params.country,
        supported,
        message: message.to_string(),
    })
}

pub async fn factory_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.selector.cache_stats())
}

pub async fn clear_cache(State(state): State<AppState>) -> &'static str {
    state.selector.clear_cache();
    "Factory cache cleared successfully"
}
