//! Payout types and data structures
//!
//! Common types shared by every payout processor for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payout request handed to a processor
///
/// Field names follow the camelCase wire format used by existing API consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    /// Transfer method (mobile_wallet, bank_transfer, ...)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payout_method: String,
    /// Destination country, full name or 2-letter code
    #[serde(default, deserialize_with = "null_as_empty")]
    pub destination_country: String,
    /// Amount in major currency units
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Currency code (PHP, INR, USD, ...)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    /// Bank code or SWIFT code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// JSON `null` in a required text field reads as an empty string, so it is
/// reported by `violations()` instead of failing deserialization.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PayoutRequest {
    pub fn new(
        payout_method: impl Into<String>,
        destination_country: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        recipient_name: impl Into<String>,
    ) -> Self {
        Self {
            payout_method: payout_method.into(),
            destination_country: destination_country.into(),
            amount: Some(amount),
            currency: currency.into(),
            recipient_name: recipient_name.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.recipient_phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.recipient_email = Some(email.into());
        self
    }

    pub fn with_bank_details(
        mut self,
        bank_account: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        self.bank_account = Some(bank_account.into());
        self.bank_code = Some(bank_code.into());
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Field-level violations checked before the request is routed.
    ///
    /// Returns an empty list when every required field is present.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.payout_method.trim().is_empty() {
            violations.push("Payout method is required".to_string());
        }
        if self.destination_country.trim().is_empty() {
            violations.push("Destination country is required".to_string());
        }
        match self.amount {
            None => violations.push("Amount is required".to_string()),
            Some(amount) if amount < Decimal::new(1, 2) => {
                violations.push("Amount must be greater than 0".to_string())
            }
            Some(_) => {}
        }
        if self.currency.trim().is_empty() {
            violations.push("Currency is required".to_string());
        }
        if self.recipient_name.trim().is_empty() {
            violations.push("Recipient name is required".to_string());
        }

        violations
    }
}

/// Terminal status of a payout
///
/// `Pending` and `Cancelled` are reserved: no current processor produces them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    Success,
    Failed,
    Pending,
    Cancelled,
}

/// Payout response returned by every processor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResponse {
    pub status: PayoutStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub message: String,
    pub provider_name: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    pub processed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl PayoutResponse {
    /// Successful payout echoing the request's amount, currency and recipient
    pub fn success(
        transaction_id: impl Into<String>,
        provider_name: impl Into<String>,
        request: &PayoutRequest,
    ) -> Self {
        Self {
            status: PayoutStatus::Success,
            transaction_id: Some(transaction_id.into()),
            message: "Transfer completed successfully".to_string(),
            provider_name: provider_name.into(),
            amount: request.amount,
            currency: Some(request.currency.clone()),
            recipient_name: Some(request.recipient_name.clone()),
            processed_at: Utc::now(),
            error_code: None,
            error_details: None,
        }
    }

    pub fn failed(
        message: impl Into<String>,
        provider_name: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            status: PayoutStatus::Failed,
            transaction_id: None,
            message: message.into(),
            provider_name: provider_name.into(),
            amount: None,
            currency: None,
            recipient_name: None,
            processed_at: Utc::now(),
            error_code: Some(error_code.into()),
            error_details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == PayoutStatus::Success
    }
}

/// Known transfer methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    MobileWallet,
    BankTransfer,
    CashPickup,
    DigitalWallet,
}

impl PayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutMethod::MobileWallet => "mobile_wallet",
            PayoutMethod::BankTransfer => "bank_transfer",
            PayoutMethod::CashPickup => "cash_pickup",
            PayoutMethod::DigitalWallet => "digital_wallet",
        }
    }
}

impl fmt::Display for PayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            PayoutMethod::MobileWallet,
            PayoutMethod::BankTransfer,
            PayoutMethod::CashPickup,
            PayoutMethod::DigitalWallet,
        ]
        .into_iter()
        .find(|method| method.as_str().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| format!("Unknown payout method: {}", value))
    }
}

/// Provider family a routing key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    GCash,
    Paytm,
    BankTransfer,
}

impl ProviderKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::GCash => "GCash Philippines",
            ProviderKind::Paytm => "Paytm India",
            ProviderKind::BankTransfer => "International Bank Transfer",
        }
    }
}
