//! Payout routing service
//!
//! Routes a payout request (transfer method + destination country) to one of
//! several mock remittance processors, validates it against that provider's
//! rules and returns a structured result.

#[cfg(feature = "server")]
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod payments;

pub use error::{PayoutError, PayoutResult};
pub use payments::{PayoutProcessor, PayoutRequest, PayoutResponse, ProcessorSelector};
