use std::sync::Arc;

use serde_json::Value;

use currency_dashboard::config::Settings;
use currency_dashboard::routes::routes;
use currency_dashboard::services::store::SessionStore;

fn test_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Settings::default()))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body should be JSON")
}

#[tokio::test]
async fn currencies_lists_the_full_catalog() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/currencies")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let catalog = body_json(res.body());
    assert_eq!(catalog.as_array().unwrap().len(), 15);
    assert!(catalog
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["code"] == "USD" && c["name"] == "US Dollar"));
}

#[tokio::test]
async fn history_returns_requested_horizon() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/history/USD/INR?days=30")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let body = body_json(res.body());
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 30);
    assert_eq!(points[0]["change_pct"], 0.0);
}

#[tokio::test]
async fn history_defaults_to_thirty_days() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/history/EUR/USD")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let body = body_json(res.body());
    assert_eq!(body["days"], 30);
    assert_eq!(body["points"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn repeated_history_requests_chart_identically() {
    let api = routes(test_store());

    let first = warp::test::request()
        .method("GET")
        .path("/api/v1/history/USD/INR?days=90")
        .reply(&api)
        .await;
    let second = warp::test::request()
        .method("GET")
        .path("/api/v1/history/USD/INR?days=90")
        .reply(&api)
        .await;

    assert_eq!(first.body(), second.body());
}

#[tokio::test]
async fn zero_day_horizon_yields_no_chart_data() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/history/USD/INR?days=0")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let body = body_json(res.body());
    assert!(body["points"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn analytics_summarizes_the_series() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/analytics/USD/INR?days=30")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let summary = body_json(res.body());
    assert!(summary["current_rate"].as_f64().unwrap() > 0.0);
    assert!(summary["volatility"].as_f64().unwrap() >= 0.0);
    assert!(summary["min_rate"].as_f64().unwrap() <= summary["max_rate"].as_f64().unwrap());
    assert!(summary["volatility_level"].is_string());
}

#[tokio::test]
async fn analytics_with_no_data_is_not_found() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/analytics/USD/INR?days=0")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 404);
    assert_eq!(body_json(res.body())["error"], "no chart data available");
}

#[tokio::test]
async fn converting_a_currency_to_itself_is_rejected() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("POST")
        .path("/api/v1/convert")
        .json(&serde_json::json!({"from": "USD", "to": "USD", "amount": 100.0}))
        .reply(&api)
        .await;

    assert_eq!(res.status(), 400);
    assert_eq!(
        body_json(res.body())["error"],
        "source and target currency must differ"
    );
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let api = routes(test_store());

    for amount in [0.0, -5.0] {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/convert")
            .json(&serde_json::json!({"from": "USD", "to": "INR", "amount": amount}))
            .reply(&api)
            .await;

        assert_eq!(res.status(), 400);
    }
}

#[tokio::test]
async fn rejected_conversions_leave_no_history() {
    let api = routes(test_store());

    warp::test::request()
        .method("POST")
        .path("/api/v1/convert")
        .json(&serde_json::json!({"from": "EUR", "to": "EUR", "amount": 10.0}))
        .reply(&api)
        .await;

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/conversions")
        .reply(&api)
        .await;

    let body = body_json(res.body());
    assert_eq!(body["total"], 0);
    assert!(body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn clearing_an_empty_ledger_is_fine() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("DELETE")
        .path("/api/v1/conversions")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    assert_eq!(body_json(res.body())["cleared"], true);
}

#[tokio::test]
async fn session_starts_with_default_pair() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/session")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);
    let session = body_json(res.body());
    assert_eq!(session["pair"]["from"], "USD");
    assert_eq!(session["pair"]["to"], "INR");
    assert_eq!(session["history_len"], 0);
    assert!(session["last_update"].is_null());
}

#[tokio::test]
async fn selected_pair_can_be_changed() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("PUT")
        .path("/api/v1/session/pair")
        .json(&serde_json::json!({"from": "eur", "to": "usd"}))
        .reply(&api)
        .await;

    assert_eq!(res.status(), 200);

    let session = warp::test::request()
        .method("GET")
        .path("/api/v1/session")
        .reply(&api)
        .await;
    let body = body_json(session.body());
    assert_eq!(body["pair"]["from"], "EUR");
    assert_eq!(body["pair"]["to"], "USD");
}

#[tokio::test]
async fn unknown_codes_cannot_be_selected() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("PUT")
        .path("/api/v1/session/pair")
        .json(&serde_json::json!({"from": "USD", "to": "XYZ"}))
        .reply(&api)
        .await;

    assert_eq!(res.status(), 400);
    assert_eq!(body_json(res.body())["error"], "unknown currency code: XYZ");
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let api = routes(test_store());

    let res = warp::test::request()
        .method("GET")
        .path("/api/v1/nope")
        .reply(&api)
        .await;

    assert_eq!(res.status(), 404);
}
