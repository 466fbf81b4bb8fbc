//! Paytm payout processor
//!
//! Mobile and digital wallet transfers to India. The recipient is reached by
//! phone or email; a phone number, when given, must be an Indian mobile number.

use super::{compiled, generate_transaction_id, internal_failure, is_blank, rejected};
use crate::error::PayoutResult;
use crate::payments::traits::PayoutProcessor;
use crate::payments::types::{PayoutRequest, PayoutResponse};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::info;

const PROVIDER_NAME: &str = "Paytm India";
const SUPPORTED_COUNTRIES: &[&str] = &["india", "in"];
const SUPPORTED_METHODS: &[&str] = &["mobile_wallet", "digital_wallet"];

const TRANSACTION_PREFIX: &str = "PTM";
const VALIDATION_ERROR: &str = "PAYTM_VALIDATION_ERROR";
const API_ERROR: &str = "PAYTM_API_ERROR";
const DAILY_LIMIT: i64 = 100_000;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\+91|91|0)?[6-9][0-9]{9}$").ok());

/// Paytm India processor
#[derive(Debug, Clone)]
pub struct PaytmProcessor {
    latency: Duration,
}

impl Default for PaytmProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl PaytmProcessor {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn validate(&self, request: &PayoutRequest) -> PayoutResult<Option<String>> {
        let amount = match request.amount {
            Some(amount) if self.is_valid(request) => amount,
            _ => return Ok(Some("Amount must be greater than 0".to_string())),
        };

        let phone = request.recipient_phone.as_deref();
        if is_blank(phone) && is_blank(request.recipient_email.as_deref()) {
            return Ok(Some("Paytm requires recipient phone or email".to_string()));
        }

        if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
            if !compiled(&PHONE_PATTERN, "India phone")?.is_match(phone) {
                return Ok(Some(format!("Invalid India phone number format: {}", phone)));
            }
        }

        if amount > Decimal::from(DAILY_LIMIT) {
            return Ok(Some("Amount exceeds Paytm daily limit".to_string()));
        }

        Ok(None)
    }

    /// Simulated gateway call. Infallible today; a live provider client
    /// reports its transport and API errors through the `Err` arm.
    async fn execute(&self) -> PayoutResult<String> {
        let transaction_id = generate_transaction_id(TRANSACTION_PREFIX);
        super::simulate_latency(self.latency).await;
        Ok(transaction_id)
    }
}

#[async_trait]
impl PayoutProcessor for PaytmProcessor {
    async fn process(&self, request: &PayoutRequest) -> PayoutResponse {
        info!(recipient = %request.recipient_name, "Processing Paytm transfer");

        match self.validate(request) {
            Ok(None) => {}
            Ok(Some(reason)) => {
                return rejected(
                    PROVIDER_NAME,
                    "Invalid Paytm request parameters",
                    VALIDATION_ERROR,
                    reason,
                )
            }
            Err(e) => return internal_failure("Paytm", PROVIDER_NAME, API_ERROR, e),
        }

        match self.execute().await {
            Ok(transaction_id) => {
                info!(transaction_id = %transaction_id, "Paytm transfer successful");
                PayoutResponse::success(transaction_id, PROVIDER_NAME, request)
            }
            Err(e) => internal_failure("Paytm", PROVIDER_NAME, API_ERROR, e),
        }
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn supported_countries(&self) -> Vec<String> {
        super::to_owned_list(SUPPORTED_COUNTRIES)
    }

    fn supported_methods(&self) -> Vec<String> {
        super::to_owned_list(SUPPORTED_METHODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn processor() -> PaytmProcessor {
        PaytmProcessor::new(Duration::ZERO)
    }

    fn base_request(amount: Decimal) -> PayoutRequest {
        PayoutRequest::new("digital_wallet", "india", amount, "INR", "Asha Rao")
    }

    #[tokio::test]
    async fn test_phone_only_succeeds() {
        for phone in ["+919876543210", "919876543210", "09876543210", "6123456789"] {
            let req = base_request(dec!(2500)).with_phone(phone);
            let response = processor().process(&req).await;
            assert!(response.is_success(), "phone {} should be accepted", phone);
            assert!(response.transaction_id.unwrap().starts_with("PTM"));
        }
    }

    #[tokio::test]
    async fn test_email_only_succeeds() {
        let req = base_request(dec!(2500)).with_email("asha@example.in");
        let response = processor().process(&req).await;
        assert!(response.is_success());
        assert_eq!(response.provider_name, "Paytm India");
    }

    #[tokio::test]
    async fn test_neither_phone_nor_email_fails() {
        let req = base_request(dec!(2500)).with_phone("  ");
        let response = processor().process(&req).await;
        assert_eq!(response.error_code.as_deref(), Some("PAYTM_VALIDATION_ERROR"));
        assert_eq!(
            response.error_details.as_deref(),
            Some("Paytm requires recipient phone or email")
        );
    }

    #[tokio::test]
    async fn test_invalid_phone_fails_even_with_email() {
        let req = base_request(dec!(2500))
            .with_email("asha@example.in")
            .with_phone("5123456789");
        let response = processor().process(&req).await;
        assert_eq!(response.error_code.as_deref(), Some("PAYTM_VALIDATION_ERROR"));
        assert_eq!(response.message, "Invalid Paytm request parameters");
    }

    #[tokio::test]
    async fn test_non_ascii_digits_rejected() {
        for phone in ["9८७६५४३२१०", "+91९८७६५४३२१०", "6١٢٣٤٥٦٧٨٩"] {
            let req = base_request(dec!(2500)).with_phone(phone);
            let response = processor().process(&req).await;
            assert_eq!(
                response.error_code.as_deref(),
                Some("PAYTM_VALIDATION_ERROR"),
                "phone {}",
                phone
            );
        }
    }

    #[tokio::test]
    async fn test_daily_limit_boundary() {
        let ok = base_request(dec!(100000)).with_email("asha@example.in");
        assert!(processor().process(&ok).await.is_success());

        let over = base_request(dec!(100000.01)).with_email("asha@example.in");
        let response = processor().process(&over).await;
        assert_eq!(
            response.error_details.as_deref(),
            Some("Amount exceeds Paytm daily limit")
        );
    }

    #[test]
    fn test_supports_both_wallet_methods() {
        let p = processor();
        assert!(p.supports("India", "mobile_wallet"));
        assert!(p.supports("IN", "Digital_Wallet"));
        assert!(!p.supports("india", "bank_transfer"));
        assert!(!p.supports("ph", "mobile_wallet"));
    }
}
