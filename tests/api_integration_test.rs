//! Integration tests for the HTTP adapter
//!
//! Requests are driven in-process through the router with `tower::ServiceExt`.

#[cfg(feature = "server")]
mod api_tests {
    use axum::body::{to_bytes, Body};
    use axum::Router;
    use http::{Request, StatusCode};
    use payout_router::api::{router, AppState};
    use payout_router::config::Config;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut config = Config::default();
        config.payouts.simulate_latency = false;
        router(AppState::new(config))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_send_money_success() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/transfer/send",
                json!({
                    "payoutMethod": "mobile_wallet",
                    "destinationCountry": "philippines",
                    "amount": 1000,
                    "currency": "PHP",
                    "recipientName": "Test User",
                    "recipientPhone": "09123456789"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["providerName"], "GCash Philippines");
        assert_eq!(body["amount"], 1000.0);
        assert_eq!(body["recipientName"], "Test User");
        assert!(body["transactionId"].as_str().unwrap().starts_with("GC"));
    }

    #[tokio::test]
    async fn test_send_money_provider_rejection_is_bad_request() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/transfer/send",
                json!({
                    "payoutMethod": "bank_transfer",
                    "destinationCountry": "bd",
                    "amount": "9.99",
                    "currency": "USD",
                    "recipientName": "Rahim",
                    "bankAccount": "123",
                    "bankCode": "BRAKBDDH"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["errorCode"], "BANK_VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_send_money_unsupported_combination() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/transfer/send",
                json!({
                    "payoutMethod": "cryptocurrency",
                    "destinationCountry": "philippines",
                    "amount": 100,
                    "currency": "PHP",
                    "recipientName": "Test User"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["errorCode"], "UNSUPPORTED_COMBINATION");
        assert_eq!(body["providerName"], "System");
        assert!(body["message"].as_str().unwrap().contains("cryptocurrency"));
    }

    #[tokio::test]
    async fn test_send_money_missing_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/transfer/send",
                json!({ "payoutMethod": "mobile_wallet", "destinationCountry": "ph" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], "VALIDATION_ERROR");
        let details = body["errorDetails"].as_str().unwrap();
        assert!(details.contains("Amount is required"));
        assert!(details.contains("Currency is required"));
    }

    #[tokio::test]
    async fn test_send_money_null_field_is_validation_error() {
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/transfer/send",
                json!({
                    "payoutMethod": null,
                    "destinationCountry": "philippines",
                    "amount": 1000,
                    "currency": "PHP",
                    "recipientName": "Test User"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["errorCode"], "VALIDATION_ERROR");
        assert_eq!(body["errorDetails"], "Payout method is required");
    }

    #[tokio::test]
    async fn test_send_money_malformed_body_is_validation_error() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/transfer/send")
            .header("content-type", "application/json")
            .body(Body::from("{\"payoutMethod\": \"mobile_wallet\","))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["errorCode"], "VALIDATION_ERROR");
        assert_eq!(body["providerName"], "System");
        assert!(!body["errorDetails"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_supported_methods() {
        let app = test_app();
        let (status, body) = send(&app, get("/api/transfer/supported-methods")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mobile_wallet_philippines"], "GCash Philippines");
        assert_eq!(body["mobile_wallet_india"], "Paytm India");
        assert_eq!(body["bank_transfer_philippines"], "International Bank Transfer");
    }

    #[tokio::test]
    async fn test_validate_combination() {
        let app = test_app();
        let (status, body) = send(
            &app,
            get("/api/transfer/validate?method=mobile_wallet&country=philippines"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], "mobile_wallet");
        assert_eq!(body["country"], "philippines");
        assert_eq!(body["supported"], true);
        assert_eq!(body["message"], "Combination is supported");

        let (_, body) = send(
            &app,
            get("/api/transfer/validate?method=cash_pickup&country=india"),
        )
        .await;
        assert_eq!(body["supported"], false);
        assert_eq!(body["message"], "Combination is not supported");
    }

    #[tokio::test]
    async fn test_factory_stats_and_clear_cache() {
        let app = test_app();
        send(&app, get("/api/transfer/validate?method=mobile_wallet&country=ph")).await;

        let (status, body) = send(&app, get("/api/transfer/factory-stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cacheSize"], 1);
        assert_eq!(body["cachedKeys"], json!(["mobile_wallet_ph"]));

        let (status, body) = send(&app, post_json("/api/transfer/clear-cache", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Factory cache cleared successfully");

        let (_, body) = send(&app, get("/api/transfer/factory-stats")).await;
        assert_eq!(body["cacheSize"], 0);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app();
        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "development");
        assert!(body["version"].is_string());
        assert!(body.get("simulate_latency").is_none());
    }
}
