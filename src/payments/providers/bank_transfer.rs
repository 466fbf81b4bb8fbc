//! Bank transfer payout processor
//!
//! Bank and wire transfers to South Asian and Southeast Asian countries.
//! Needs a bank account and a bank/SWIFT code; amounts are bounded on both sides.

use super::{generate_transaction_id, internal_failure, is_blank, rejected};
use crate::error::PayoutResult;
use crate::payments::traits::PayoutProcessor;
use crate::payments::types::{PayoutRequest, PayoutResponse};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

const PROVIDER_NAME: &str = "International Bank Transfer";
const SUPPORTED_COUNTRIES: &[&str] = &[
    "india",
    "philippines",
    "bangladesh",
    "nepal",
    "sri lanka",
    "in",
    "ph",
    "bd",
    "np",
    "lk",
];
const SUPPORTED_METHODS: &[&str] = &["bank_transfer", "wire_transfer"];

const TRANSACTION_PREFIX: &str = "BT";
const VALIDATION_ERROR: &str = "BANK_VALIDATION_ERROR";
const API_ERROR: &str = "BANK_API_ERROR";
const MINIMUM_AMOUNT: i64 = 10;
const DAILY_LIMIT: i64 = 500_000;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// International bank transfer processor
#[derive(Debug, Clone)]
pub struct BankTransferProcessor {
    latency: Duration,
}

impl Default for BankTransferProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl BankTransferProcessor {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn validate(&self, request: &PayoutRequest) -> Option<String> {
        let amount = match request.amount {
            Some(amount) if self.is_valid(request) => amount,
            _ => return Some("Amount must be greater than 0".to_string()),
        };

        if is_blank(request.bank_account.as_deref()) {
            return Some("Bank transfer requires recipient bank account".to_string());
        }
        if is_blank(request.bank_code.as_deref()) {
            return Some("Bank transfer requires bank code/SWIFT code".to_string());
        }
        if amount < Decimal::from(MINIMUM_AMOUNT) {
            return Some(format!(
                "Minimum amount for bank transfer is {}",
                MINIMUM_AMOUNT
            ));
        }
        if amount > Decimal::from(DAILY_LIMIT) {
            return Some("Amount exceeds bank transfer daily limit".to_string());
        }

        None
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
impl PayoutProcessor for BankTransferProcessor {
    async fn process(&self, request: &PayoutRequest) -> PayoutResponse {
        info!(
            recipient = %request.recipient_name,
            country = %request.destination_country,
            "Processing bank transfer"
        );

        if let Some(reason) = self.validate(request) {
            return rejected(
                PROVIDER_NAME,
                "Invalid bank transfer request parameters",
                VALIDATION_ERROR,
                reason,
            );
        }

        match self.execute().await {
            Ok(transaction_id) => {
                info!(transaction_id = %transaction_id, "Bank transfer initiated");
                PayoutResponse::success(transaction_id, PROVIDER_NAME, request).with_message(
                    "Bank transfer initiated successfully. Processing time: 1-3 business days",
                )
            }
            Err(e) => internal_failure("Bank transfer", PROVIDER_NAME, API_ERROR, e),
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
