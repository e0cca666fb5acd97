//! Analytics HTTP handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use bilo_core::time;
use bilo_http::{ApiResult, ValidJson, ValidQuery};

use crate::app_state::AppState;
use crate::model::{
    Aggregation, AggregationQuery, Cleared, Dashboard, EventPage, EventRequest, EventResponse,
    EventsQuery, MetricList, MetricRequest, MetricResponse,
};
use crate::SERVICE;

/// `POST /metrics`
pub async fn track_metric(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<MetricRequest>,
) -> ApiResult<Json<MetricResponse>> {
    let timestamp = time::resolve(req.timestamp.as_deref(), time::now())?;
    let record = state.metrics().track(
        &req.metric_name,
        req.value,
        req.tags.unwrap_or_default(),
        timestamp,
    )?;

    tracing::info!(metric = %record.name, metric_id = %record.id, value = record.value, "metric tracked");

    Ok(Json(MetricResponse {
        success: true,
        metric_id: record.id,
        metric_name: record.name,
        value: record.value,
        timestamp: time::canonical(&record.timestamp),
        service: SERVICE.name,
    }))
}

/// `GET /metrics/{metric_name}?hours=`
pub async fn get_metric_aggregation(
    State(state): State<AppState>,
    Path(metric_name): Path<String>,
    ValidQuery(q): ValidQuery<AggregationQuery>,
) -> ApiResult<Json<Aggregation>> {
    let hours = q
        .hours
        .unwrap_or(state.cfg().analytics.default_window_hours);
    let agg = state.metrics().aggregate(&metric_name, hours, time::now())?;
    tracing::debug!(metric = %metric_name, hours, count = agg.count, "metric aggregated");
    Ok(Json(agg))
}

/// `GET /metrics`
pub async fn list_metrics(State(state): State<AppState>) -> ApiResult<Json<MetricList>> {
    let metrics = state.metrics().names()?;
    Ok(Json(MetricList {
        count: metrics.len(),
        metrics,
    }))
}

/// `DELETE /metrics/{metric_name}`
pub async fn clear_metric(
    State(state): State<AppState>,
    Path(metric_name): Path<String>,
) -> ApiResult<Json<Cleared>> {
    let removed = state.metrics().clear(&metric_name)?;
    tracing::info!(metric = %metric_name, removed, "metric cleared");
    Ok(Json(Cleared {
        success: true,
        message: format!("Cleared {removed} data points for metric '{metric_name}'"),
    }))
}

/// `POST /events`
pub async fn track_event(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<EventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let timestamp = time::resolve(req.timestamp.as_deref(), time::now())?;
    let record = state.events().track(
        &req.event_name,
        req.user_id,
        req.properties.unwrap_or_default(),
        timestamp,
    )?;

    tracing::info!(event = %record.event_name, event_id = %record.id, "event tracked");

    Ok(Json(EventResponse {
        success: true,
        event_id: record.id,
        event_name: record.event_name,
        timestamp: time::canonical(&record.timestamp),
        service: SERVICE.name,
    }))
}

/// `GET /events?limit=&event_name=`
pub async fn list_events(
    State(state): State<AppState>,
    ValidQuery(q): ValidQuery<EventsQuery>,
) -> ApiResult<Json<EventPage>> {
    let limit = q.limit.unwrap_or(state.cfg().analytics.default_event_limit);
    let page = state.events().list(limit, q.event_name.as_deref())?;
    tracing::debug!(limit, count = page.count, total = page.total, "events listed");
    Ok(Json(page))
}

/// `DELETE /events`
pub async fn clear_events(State(state): State<AppState>) -> ApiResult<Json<Cleared>> {
    let removed = state.events().clear()?;
    tracing::info!(removed, "events cleared");
    Ok(Json(Cleared {
        success: true,
        message: format!("Cleared {removed} events"),
    }))
}

/// `GET /dashboard`
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<Dashboard>> {
    let summary = state.metrics().summary()?;
    let total_events_tracked = state.events().len()?;
    Ok(Json(Dashboard {
        total_metrics_tracked: summary.total_records,
        unique_metric_types: summary.names.len(),
        total_events_tracked,
        metric_names: summary.names,
        timestamp: time::canonical(&time::now()),
    }))
}
