//! Payout processor implementations
//!
//! Concrete implementations of the PayoutProcessor trait for each provider
//! family, plus the closed `Processor` enum the selector hands out.

pub mod bank_transfer;
pub mod gcash;
pub mod paytm;

pub use bank_transfer::BankTransferProcessor;
pub use gcash::GCashProcessor;
pub use paytm::PaytmProcessor;

use crate::error::PayoutError;
use crate::payments::traits::PayoutProcessor;
use crate::payments::types::{PayoutRequest, PayoutResponse, ProviderKind};
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{error, warn};
use uuid::Uuid;

/// One variant per provider family
#[derive(Debug, Clone)]
pub enum Processor {
    GCash(GCashProcessor),
    Paytm(PaytmProcessor),
    BankTransfer(BankTransferProcessor),
}

impl Processor {
    /// Build the processor for a provider family, with or without its
    /// simulated network latency.
    pub fn for_kind(kind: ProviderKind, simulate_latency: bool) -> Self {
        match kind {
            ProviderKind::GCash => Processor::GCash(GCashProcessor::new(latency_or_zero(
                gcash::DEFAULT_LATENCY,
                simulate_latency,
            ))),
            ProviderKind::Paytm => Processor::Paytm(PaytmProcessor::new(latency_or_zero(
                paytm::DEFAULT_LATENCY,
                simulate_latency,
            ))),
            ProviderKind::BankTransfer => Processor::BankTransfer(BankTransferProcessor::new(
                latency_or_zero(bank_transfer::DEFAULT_LATENCY, simulate_latency),
            )),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Processor::GCash(_) => ProviderKind::GCash,
            Processor::Paytm(_) => ProviderKind::Paytm,
            Processor::BankTransfer(_) => ProviderKind::BankTransfer,
        }
    }

    fn inner(&self) -> &dyn PayoutProcessor {
        match self {
            Processor::GCash(p) => p,
            Processor::Paytm(p) => p,
            Processor::BankTransfer(p) => p,
        }
    }
}

#[async_trait]
impl PayoutProcessor for Processor {
    async fn process(&self, request: &PayoutRequest) -> PayoutResponse {
        self.inner().process(request).await
    }

    fn supports(&self, country: &str, method: &str) -> bool {
        self.inner().supports(country, method)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn supported_countries(&self) -> Vec<String> {
        self.inner().supported_countries()
    }

    fn supported_methods(&self) -> Vec<String> {
        self.inner().supported_methods()
    }

    fn is_valid(&self, request: &PayoutRequest) -> bool {
        self.inner().is_valid(request)
    }
}

fn latency_or_zero(latency: Duration, simulate: bool) -> Duration {
    if simulate {
        latency
    } else {
        Duration::ZERO
    }
}

/// `<prefix><unix micros><8 uppercase hex chars>`
pub(crate) fn generate_transaction_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("{}{}{}", prefix, Utc::now().timestamp_micros(), suffix)
}

pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub(crate) fn compiled(
    pattern: &'static LazyLock<Option<Regex>>,
    name: &str,
) -> Result<&'static Regex, PayoutError> {
    pattern
        .as_ref()
        .ok_or_else(|| PayoutError::internal(format!("{} pattern failed to compile", name)))
}

/// Validation failure response. The message names the category; the
/// specific problem goes into `errorDetails`.
pub(crate) fn rejected(
    provider_name: &str,
    message: &str,
    error_code: &str,
    detail: String,
) -> PayoutResponse {
    warn!(provider = provider_name, error_code, "Payout rejected: {}", detail);
    PayoutResponse::failed(message, provider_name, error_code).with_error_details(detail)
}

/// Unexpected failure while executing a payout
pub(crate) fn internal_failure(
    provider_label: &str,
    provider_name: &str,
    error_code: &str,
    err: PayoutError,
) -> PayoutResponse {
    error!(provider = provider_name, error_code, "Payout failed: {}", err);
    PayoutResponse::failed(
        format!("{} processing failed: {}", provider_label, err),
        provider_name,
        error_code,
    )
    .with_error_details(err.to_string())
}
