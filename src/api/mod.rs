//! HTTP adapter over the processor selector

pub mod error;
pub mod health;
pub mod transfer;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::payments::ProcessorSelector;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub selector: Arc<ProcessorSelector>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let selector = ProcessorSelector::new(config.payouts.simulate_latency);
        Self {
            config,
            selector: Arc::new(selector),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/transfer", transfer::routes())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
