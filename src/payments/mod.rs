//! Payout processing module
//!
//! This module provides a unified interface for payout providers (GCash, Paytm,
//! international bank transfer) and the selector that routes a request to one.

pub mod providers;
pub mod selector;
pub mod traits;
pub mod types;

pub use providers::Processor;
pub use selector::ProcessorSelector;
pub use traits::PayoutProcessor;
pub use types::{PayoutMethod, PayoutRequest, PayoutResponse, PayoutStatus, ProviderKind};
