//! Integration tests for the horoscope API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, with the built-in analytic engine behind it.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use horoscope_api::router::build_router;
use horoscope_api::state::AppState;
use horoscope_core::ChartDefaults;
use horoscope_ephemeris::AnalyticEphemeris;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> Router {
    let state = AppState::new(
        Arc::new(AnalyticEphemeris::default()),
        ChartDefaults::default(),
    );
    build_router(Arc::new(state))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = make_router().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn birth() -> Value {
    json!({
        "name": "Ada",
        "year": 1990,
        "month": 6,
        "day": 15,
        "hour": 14,
        "minute": 30,
        "lat": 40.7128,
        "lng": -74.006,
        "tz": "America/New_York"
    })
}

async fn natal_chart_json() -> Value {
    let (status, json) = send(post_json("/natal-chart", &birth())).await;
    assert_eq!(status, StatusCode::OK);
    json["chart"].clone()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_health() {
    let (status, json) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "analytic-kepler");
}

#[tokio::test]
async fn test_natal_chart() {
    let (status, json) = send(post_json("/natal-chart", &birth())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let chart = &json["chart"];
    assert_eq!(chart["name"], "Ada");
    assert_eq!(chart["sun_sign"], "Gemini");
    assert_eq!(chart["planets"].as_array().unwrap().len(), 10);
    assert_eq!(chart["houses"].as_array().unwrap().len(), 12);
    assert_eq!(chart["birth_data"]["tz"], "America/New_York");
    assert_eq!(chart["birth_data"]["hour"], 14);
    assert_eq!(chart["rising_sign"], chart["houses"][0]["sign"]);
    assert!(chart["moon_phase_at_birth"].is_string());

    for planet in chart["planets"].as_array().unwrap() {
        let abs_pos = planet["abs_pos"].as_f64().unwrap();
        assert!((0.0..360.0).contains(&abs_pos));
        let house = planet["house"].as_u64().unwrap();
        assert!((1..=12).contains(&house));
    }
}

#[tokio::test]
async fn test_natal_chart_minimal_body_uses_defaults() {
    let payload = json!({"name": "Noon", "year": 2000, "month": 1, "day": 1});
    let (status, json) = send(post_json("/natal-chart", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    let birth_data = &json["chart"]["birth_data"];
    assert_eq!(birth_data["hour"], 12);
    assert_eq!(birth_data["minute"], 0);
    assert_eq!(birth_data["tz"], "UTC");
    assert!(birth_data["lat"].is_null());
    assert_eq!(json["chart"]["sun_sign"], "Capricorn");
}

#[tokio::test]
async fn test_natal_chart_rejects_unknown_timezone() {
    let mut payload = birth();
    payload["tz"] = json!("Atlantis/Capital");
    let (status, json) = send(post_json("/natal-chart", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("Atlantis/Capital"));
}

#[tokio::test]
async fn test_natal_chart_rejects_invalid_coordinates() {
    let mut payload = birth();
    payload["lat"] = json!(123.0);
    let (status, json) = send(post_json("/natal-chart", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_natal_chart_rejects_malformed_body() {
    let payload = json!({"name": "Ada", "month": 6, "day": 15});
    let (status, json) = send(post_json("/natal-chart", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);

    let request = Request::post("/natal-chart")
        .body(Body::from("not json"))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_daily_transits() {
    let chart = natal_chart_json().await;
    let payload = json!({"natal_chart": chart, "date": "2024-01-01"});
    let (status, json) = send(post_json("/daily-transits", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let transits = &json["transits"];
    assert_eq!(transits["date"], "2024-01-01");
    assert_eq!(transits["current_planets"].as_array().unwrap().len(), 10);
    assert!(transits["summary"].as_str().unwrap().starts_with("Moon in "));
    for aspect in transits["transit_to_natal"].as_array().unwrap() {
        assert!(aspect["orb"].as_f64().unwrap() <= 8.0);
    }
}

#[tokio::test]
async fn test_daily_transits_defaults_to_today() {
    let payload = json!({"natal_chart": {"name": "Nobody"}});
    let (status, json) = send(post_json("/daily-transits", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    let date = json["transits"]["date"].as_str().unwrap();
    assert_eq!(date.len(), "YYYY-MM-DD".len());
    assert!(json["transits"]["transit_to_natal"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_daily_transits_rejects_bad_date() {
    let payload = json!({"natal_chart": {}, "date": "yesterday"});
    let (status, json) = send(post_json("/daily-transits", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("yesterday"));
}

#[tokio::test]
async fn test_daily_transits_requires_chart() {
    let payload = json!({"date": "2024-01-01"});
    let (status, _) = send(post_json("/daily-transits", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_current_sky() {
    let (status, json) = send(Request::get("/current-sky").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let sky = &json["sky"];
    assert!(sky["timestamp"].is_string());
    assert_eq!(sky["planets"].as_array().unwrap().len(), 10);
    assert!(sky["sky_aspects"].as_array().unwrap().len() <= 10);
    assert!(sky["sun_sign"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = make_router()
        .oneshot(Request::get("/horoscope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
