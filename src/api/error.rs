use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use tracing::{error, warn};

use crate::error::PayoutError;
use crate::payments::types::PayoutResponse;

/// Provider name reported when no processor was involved
const SYSTEM_PROVIDER: &str = "System";

/// Failures raised before a processor produced a response
#[derive(Debug)]
pub enum ApiError {
    /// Required request fields missing or out of range
    Validation(Vec<String>),
    Payout(PayoutError),
}

impl From<PayoutError> for ApiError {
    fn from(err: PayoutError) -> Self {
        ApiError::Payout(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(violations) => {
                warn!("Rejected invalid payout request: {:?}", violations);
                (
                    StatusCode::BAD_REQUEST,
                    PayoutResponse::failed(
                        "Request validation failed",
                        SYSTEM_PROVIDER,
                        "VALIDATION_ERROR",
                    )
                    .with_error_details(violations.join("; ")),
                )
            }
            ApiError::Payout(err @ PayoutError::UnsupportedCombination { .. }) => (
                StatusCode::BAD_REQUEST,
                PayoutResponse::failed(
                    format!("Unsupported payment method or country: {}", err),
                    SYSTEM_PROVIDER,
                    "UNSUPPORTED_COMBINATION",
                ),
            ),
            ApiError::Payout(err) => {
                error!("Unexpected error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PayoutResponse::failed(
                        "Internal server error occurred",
                        SYSTEM_PROVIDER,
                        "INTERNAL_ERROR",
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unsupported = ApiError::from(PayoutError::unsupported_combination("x", "y"));
        assert_eq!(unsupported.into_response().status(), StatusCode::BAD_REQUEST);

        let invalid = ApiError::Validation(vec!["Currency is required".to_string()]);
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::from(PayoutError::internal("boom"));
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
