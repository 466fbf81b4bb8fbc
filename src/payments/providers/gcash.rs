//! GCash payout processor
//!
//! Mobile wallet transfers to the Philippines. Requires a Philippine mobile
//! number and caps a single payout at the GCash daily limit.

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

const PROVIDER_NAME: &str = "GCash Philippines";
const SUPPORTED_COUNTRIES: &[&str] = &["philippines", "ph"];
const SUPPORTED_METHODS: &[&str] = &["mobile_wallet"];

const TRANSACTION_PREFIX: &str = "GC";
const VALIDATION_ERROR: &str = "GCASH_VALIDATION_ERROR";
const API_ERROR: &str = "GCASH_API_ERROR";
const DAILY_LIMIT: i64 = 50_000;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\+63|63|0)?9[0-9]{9}$").ok());

/// GCash Philippines processor
#[derive(Debug, Clone)]
pub struct GCashProcessor {
    latency: Duration,
}

impl Default for GCashProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl GCashProcessor {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// `Ok(Some(reason))` when the request breaks a GCash rule
    fn validate(&self, request: &PayoutRequest) -> PayoutResult<Option<String>> {
        let amount = match request.amount {
            Some(amount) if self.is_valid(request) => amount,
            _ => return Ok(Some("Amount must be greater than 0".to_string())),
        };

        let phone = request.recipient_phone.as_deref();
        if is_blank(phone) {
            return Ok(Some("GCash requires recipient phone number".to_string()));
        }
        let phone = phone.unwrap_or_default();
        if !compiled(&PHONE_PATTERN, "Philippines phone")?.is_match(phone) {
            return Ok(Some(format!(
                "Invalid Philippines phone number format: {}",
                phone
            )));
        }

        if amount > Decimal::from(DAILY_LIMIT) {
            return Ok(Some("Amount exceeds GCash daily limit".to_string()));
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
impl PayoutProcessor for GCashProcessor {
    async fn process(&self, request: &PayoutRequest) -> PayoutResponse {
        info!(recipient = %request.recipient_name, "Processing GCash transfer");

        match self.validate(request) {
            Ok(None) => {}
            Ok(Some(reason)) => {
                return rejected(
                    PROVIDER_NAME,
                    "Invalid GCash request parameters",
                    VALIDATION_ERROR,
                    reason,
                )
            }
            Err(e) => return internal_failure("GCash", PROVIDER_NAME, API_ERROR, e),
        }

        match self.execute().await {
            Ok(transaction_id) => {
                info!(transaction_id = %transaction_id, "GCash transfer successful");
                PayoutResponse::success(transaction_id, PROVIDER_NAME, request)
            }
            Err(e) => internal_failure("GCash", PROVIDER_NAME, API_ERROR, e),
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
