//! Records, request bodies and response bodies of the analytics API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use bilo_core::time::serialize_canonical;

pub type Tags = BTreeMap<String, String>;
pub type Properties = Map<String, Value>;

/// One stored metric observation.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRecord {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub tags: Tags,
    #[serde(serialize_with = "serialize_canonical")]
    pub timestamp: DateTime<Utc>,
}

/// One stored event.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub id: String,
    pub event_name: String,
    pub user_id: Option<String>,
    pub properties: Properties,
    #[serde(serialize_with = "serialize_canonical")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MetricRequest {
    pub metric_name: String,
    pub value: f64,
    pub tags: Option<Tags>,
    /// ISO-8601; defaults to submission time.
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MetricResponse {
    pub success: bool,
    pub metric_id: String,
    pub metric_name: String,
    pub value: f64,
    pub timestamp: String,
    pub service: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub event_name: String,
    pub user_id: Option<String>,
    pub properties: Option<Properties>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub success: bool,
    pub event_id: String,
    pub event_name: String,
    pub timestamp: String,
    pub service: &'static str,
}

/// Statistics over the records of one metric inside the trailing window.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregation {
    pub metric_name: String,
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    #[serde(serialize_with = "serialize_canonical")]
    pub period_start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_canonical")]
    pub period_end: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MetricList {
    pub metrics: Vec<String>,
    pub count: usize,
}

/// `count` is the number returned, `matched` the number passing the name
/// filter before truncation, `total` everything stored.
#[derive(Debug, Serialize)]
pub struct EventPage {
    pub events: Vec<EventRecord>,
    pub count: usize,
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub total_metrics_tracked: usize,
    pub unique_metric_types: usize,
    pub total_events_tracked: usize,
    pub metric_names: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Cleared {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AggregationQuery {
    pub hours: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub limit: Option<usize>,
    pub event_name: Option<String>,
}
