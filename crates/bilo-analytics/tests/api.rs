#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeDelta, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use bilo_analytics::{app_state::AppState, config::AnalyticsConfig, router};
use bilo_core::time;

fn app() -> Router {
    router::build_router(AppState::new(AnalyticsConfig::default()))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let v = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, v)
}

#[tokio::test]
async fn track_then_aggregate_single_value() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/metrics",
        Some(json!({ "metric_name": "page_views", "value": 12.5, "tags": { "page": "/home" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["metric_name"], "page_views");
    assert_eq!(body["value"], 12.5);
    assert_eq!(body["service"], "analytics-service");
    assert!(body["metric_id"].as_str().unwrap().starts_with("metric_"));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let (status, agg) = call(&app, Method::GET, "/metrics/page_views?hours=1000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agg["count"], 1);
    for key in ["sum", "average", "min", "max"] {
        assert_eq!(agg[key], 12.5, "{key}");
    }
}

#[tokio::test]
async fn aggregation_window_excludes_old_records() {
    let app = app();
    let old = time::canonical(&(Utc::now() - TimeDelta::hours(30)));
    let recent = time::canonical(&(Utc::now() - TimeDelta::hours(2)));
    for (v, ts) in [(1.0, &old), (2.0, &recent), (6.0, &recent)] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/metrics",
            Some(json!({ "metric_name": "api_calls", "value": v, "timestamp": ts })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, agg) = call(&app, Method::GET, "/metrics/api_calls", None).await;
    assert_eq!(agg["count"], 2);
    assert_eq!(agg["sum"], 8.0);
    assert_eq!(agg["average"], 4.0);
    assert_eq!(agg["min"], 2.0);
    assert_eq!(agg["max"], 6.0);

    let (_, agg) = call(&app, Method::GET, "/metrics/api_calls?hours=48", None).await;
    assert_eq!(agg["count"], 3);

    let (status, err) = call(&app, Method::GET, "/metrics/api_calls?hours=1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "No data found for metric 'api_calls' in the last 1 hours");
    assert_eq!(err["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_metric_is_404() {
    let app = app();
    let (status, err) = call(&app, Method::GET, "/metrics/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "Metric 'nope' not found");

    let (status, _) = call(&app, Method::DELETE, "/metrics/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_metric_then_aggregation_is_404() {
    let app = app();
    for v in [1.0, 2.0, 3.0] {
        call(&app, Method::POST, "/metrics", Some(json!({ "metric_name": "errors", "value": v }))).await;
    }
    call(&app, Method::POST, "/metrics", Some(json!({ "metric_name": "signups", "value": 1 }))).await;

    let (_, list) = call(&app, Method::GET, "/metrics", None).await;
    assert_eq!(list, json!({ "metrics": ["errors", "signups"], "count": 2 }));

    let (status, body) = call(&app, Method::DELETE, "/metrics/errors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cleared 3 data points for metric 'errors'");

    let (status, _) = call(&app, Method::GET, "/metrics/errors", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = call(&app, Method::GET, "/metrics", None).await;
    assert_eq!(list, json!({ "metrics": ["signups"], "count": 1 }));
}

#[tokio::test]
async fn malformed_submissions_are_rejected() {
    let app = app();
    let (status, err) = call(&app, Method::POST, "/metrics", Some(json!({ "value": 1 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], "VALIDATION_ERROR");

    let (status, _) = call(
        &app,
        Method::POST,
        "/metrics",
        Some(json!({ "metric_name": "x", "value": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, err) = call(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "event_name": "x", "timestamp": "last tuesday" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err["detail"].as_str().unwrap().contains("last tuesday"));

    let (status, _) = call(&app, Method::GET, "/events?limit=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // nothing was stored
    let (_, dash) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(dash["total_metrics_tracked"], 0);
    assert_eq!(dash["total_events_tracked"], 0);
}

#[tokio::test]
async fn track_event_then_list_by_name() {
    let app = app();
    call(&app, Method::POST, "/events", Some(json!({ "event_name": "page_view" }))).await;
    let (status, tracked) = call(
        &app,
        Method::POST,
        "/events",
        Some(json!({
            "event_name": "purchase",
            "user_id": "user_42",
            "properties": { "amount": 19.99, "items": ["a", "b"] }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(tracked["event_id"].as_str().unwrap().starts_with("event_"));

    let (_, page) = call(&app, Method::GET, "/events?event_name=purchase", None).await;
    assert_eq!(page["count"], 1);
    assert_eq!(page["total"], 2);
    let ev = &page["events"][0];
    assert_eq!(ev["id"], tracked["event_id"]);
    assert_eq!(ev["user_id"], "user_42");
    assert_eq!(ev["properties"]["amount"], 19.99);
    assert_eq!(ev["timestamp"], tracked["timestamp"]);
}

#[tokio::test]
async fn list_events_sorted_and_limited() {
    let app = app();
    let base = Utc::now();
    for minutes in [5, 50, 15, 30, 1] {
        let ts = time::canonical(&(base - TimeDelta::minutes(minutes)));
        call(
            &app,
            Method::POST,
            "/events",
            Some(json!({ "event_name": "click", "timestamp": ts })),
        )
        .await;
    }

    let (_, page) = call(&app, Method::GET, "/events?limit=3", None).await;
    assert_eq!(page["count"], 3);
    assert_eq!(page["matched"], 5);
    assert_eq!(page["total"], 5);
    let stamps: Vec<&str> = page["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["timestamp"].as_str().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(stamps[0], time::canonical(&(base - TimeDelta::minutes(1))));

    let (status, body) = call(&app, Method::DELETE, "/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cleared 5 events");

    let (_, page) = call(&app, Method::GET, "/events", None).await;
    assert_eq!(page["count"], 0);
    assert_eq!(page["total"], 0);
}

#[tokio::test]
async fn dashboard_overview() {
    let app = app();
    for (name, v) in [("cpu", 0.5), ("cpu", 0.7), ("mem", 512.0)] {
        call(&app, Method::POST, "/metrics", Some(json!({ "metric_name": name, "value": v }))).await;
    }
    call(&app, Method::POST, "/events", Some(json!({ "event_name": "deploy" }))).await;

    let (status, dash) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dash["total_metrics_tracked"], 3);
    assert_eq!(dash["unique_metric_types"], 2);
    assert_eq!(dash["total_events_tracked"], 1);
    assert_eq!(dash["metric_names"], json!(["cpu", "mem"]));
    assert!(time::parse(dash["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn health_reports_service_name() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "analytics-service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
