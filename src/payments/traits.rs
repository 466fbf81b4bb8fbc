//! Payout processor trait definitions
//!
//! Defines the common interface that all payout processors must implement.

use crate::payments::types::{PayoutRequest, PayoutResponse};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for payout processor implementations
///
/// All processors (GCash, Paytm, bank transfer) implement this trait so that
/// callers can work with whichever processor the selector hands back.
#[async_trait]
pub trait PayoutProcessor: Send + Sync {
    /// Validate and execute a payout
    ///
    /// Always returns a terminal response. Validation problems and internal
    /// failures are reported as `FAILED` responses carrying an error code,
    /// never as an `Err`.
    ///
    /// # Arguments
    /// * `request` - Payout request with amount, currency and recipient details
    async fn process(&self, request: &PayoutRequest) -> PayoutResponse;

    /// Check whether this processor handles the given country and method
    ///
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    /// Both the country and the method must be supported.
    fn supports(&self, country: &str, method: &str) -> bool {
        let country = country.trim();
        let method = method.trim();

        let country_supported = self
            .supported_countries()
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country));
        let method_supported = self
            .supported_methods()
            .iter()
            .any(|m| m.eq_ignore_ascii_case(method));

        country_supported && method_supported
    }

    /// Provider display name
    fn name(&self) -> &'static str;

    /// Countries this processor pays out to
    ///
    /// Returns an owned copy; callers cannot mutate the processor's table.
    fn supported_countries(&self) -> Vec<String>;

    /// Transfer methods this processor accepts
    fn supported_methods(&self) -> Vec<String>;

    /// Baseline request check shared by every processor: the amount is
    /// present and strictly positive.
    fn is_valid(&self, request: &PayoutRequest) -> bool {
        request.amount.is_some_and(|amount| amount > Decimal::ZERO)
    }
}
