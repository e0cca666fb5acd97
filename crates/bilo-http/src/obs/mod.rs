//! Request observability: counters/histograms plus a debug log line per
//! request. Exposed at `/ops/metrics`.

pub mod metrics;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

pub use metrics::HttpMetrics;

/// Middleware recording route/method/status for every request.
pub async fn track_requests(
    State(metrics): State<Arc<HttpMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();
    let start = Instant::now();

    let resp = next.run(req).await;

    let elapsed = start.elapsed();
    let status = resp.status().as_u16().to_string();
    metrics
        .requests
        .inc(&[("route", &route), ("method", &method), ("status", &status)]);
    metrics
        .request_duration
        .observe(&[("route", &route), ("method", &method)], elapsed);
    tracing::debug!(%method, %route, %status, micros = elapsed.as_micros() as u64, "request");
    resp
}
