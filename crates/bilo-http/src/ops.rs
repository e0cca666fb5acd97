//! Endpoints every Bilo service carries.
//!
//! - `/`, `/health`, `/health-check` : banner and liveness
//! - `/shared-utils-demo`            : shared helper round-trip
//! - `/ops/metrics`                  : Prometheus text format

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use bilo_core::shared;

use crate::obs::HttpMetrics;

/// Static identity of a service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    /// Reported as `service` in health and result bodies.
    pub name: &'static str,
    /// Returned by `GET /`.
    pub banner: &'static str,
    /// Name greeted by `/shared-utils-demo`; may differ from `name`.
    pub shared_utils_name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Clone)]
struct OpsState {
    info: ServiceInfo,
    metrics: Arc<HttpMetrics>,
}

/// Routes shared by both services; merged into each service router.
pub fn router<S>(info: ServiceInfo, metrics: Arc<HttpMetrics>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health-check", get(health))
        .route("/shared-utils-demo", get(shared_utils_demo))
        .route("/ops/metrics", get(metrics_text))
        .with_state(OpsState { info, metrics })
}

async fn root(State(ops): State<OpsState>) -> Json<Value> {
    Json(json!({ "message": ops.info.banner }))
}

async fn health(State(ops): State<OpsState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: ops.info.name,
        version: ops.info.version,
    })
}

async fn shared_utils_demo(State(ops): State<OpsState>) -> Json<Value> {
    let message = shared::hello_from_shared_utils(ops.info.shared_utils_name);
    Json(shared::success_response(json!({ "message": message })))
}

async fn metrics_text(State(ops): State<OpsState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        ops.metrics.render(),
    )
        .into_response()
}
