use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, TimeDelta, Utc};

use bilo_core::error::{BiloError, Result};
use bilo_core::ids;

use crate::model::{Aggregation, MetricRecord, Tags};

/// Metric name -> insertion-ordered records. Names are reported in
/// first-insertion order.
#[derive(Default)]
struct MetricSeries {
    order: Vec<String>,
    series: HashMap<String, Vec<MetricRecord>>,
}

#[derive(Default)]
pub struct MetricStore {
    inner: RwLock<MetricSeries>,
}

/// Consistent view for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub total_records: usize,
    pub names: Vec<String>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation to `name`, creating the series on first use.
    pub fn track(
        &self,
        name: &str,
        value: f64,
        tags: Tags,
        timestamp: DateTime<Utc>,
    ) -> Result<MetricRecord> {
        let record = MetricRecord {
            id: ids::metric_id(),
            name: name.to_string(),
            value,
            tags,
            timestamp,
        };

        let mut inner = self.inner.write().map_err(|_| BiloError::poisoned("metric store"))?;
        let MetricSeries { order, series } = &mut *inner;
        series
            .entry(name.to_string())
            .or_insert_with(|| {
                order.push(name.to_string());
                Vec::new()
            })
            .push(record.clone());

        Ok(record)
    }

    /// Count/sum/mean/min/max over records with `timestamp >= now - hours`.
    pub fn aggregate(&self, name: &str, hours: u32, now: DateTime<Utc>) -> Result<Aggregation> {
        let period_start = now
            .checked_sub_signed(TimeDelta::hours(i64::from(hours)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let inner = self.inner.read().map_err(|_| BiloError::poisoned("metric store"))?;
        let records = inner
            .series
            .get(name)
            .ok_or_else(|| not_found(name))?;

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in records.iter().filter(|r| r.timestamp >= period_start) {
            count += 1;
            sum += r.value;
            min = min.min(r.value);
            max = max.max(r.value);
        }

        if count == 0 {
            return Err(BiloError::NotFound(format!(
                "No data found for metric '{name}' in the last {hours} hours"
            )));
        }

        Ok(Aggregation {
            metric_name: name.to_string(),
            count,
            sum,
            average: sum / count as f64,
            min,
            max,
            period_start,
            period_end: now,
        })
    }

    pub fn names(&self) -> Result<Vec<String>> {
        let inner = self.inner.read().map_err(|_| BiloError::poisoned("metric store"))?;
        Ok(inner.order.clone())
    }

    /// Drop the whole series; returns how many records it held.
    pub fn clear(&self, name: &str) -> Result<usize> {
        let mut inner = self.inner.write().map_err(|_| BiloError::poisoned("metric store"))?;
        let removed = inner.series.remove(name).ok_or_else(|| not_found(name))?;
        inner.order.retain(|n| n != name);
        Ok(removed.len())
    }

    pub fn summary(&self) -> Result<MetricSummary> {
        let inner = self.inner.read().map_err(|_| BiloError::poisoned("metric store"))?;
        Ok(MetricSummary {
            total_records: inner.series.values().map(Vec::len).sum(),
            names: inner.order.clone(),
        })
    }
}

fn not_found(name: &str) -> BiloError {
    BiloError::NotFound(format!("Metric '{name}' not found"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn single_value_aggregates_to_itself() {
        let store = MetricStore::new();
        store.track("latency", 42.5, Tags::new(), now()).unwrap();

        let agg = store.aggregate("latency", 24, now()).unwrap();
        assert_eq!(agg.count, 1);
        assert_eq!(agg.sum, 42.5);
        assert_eq!(agg.average, 42.5);
        assert_eq!(agg.min, 42.5);
        assert_eq!(agg.max, 42.5);
        assert_eq!(agg.period_end, now());
        assert_eq!(agg.period_start, now() - TimeDelta::hours(24));
    }

    #[test]
    fn aggregates_many_values() {
        let store = MetricStore::new();
        for v in [3.0, -1.0, 10.0, 4.0] {
            store.track("calls", v, Tags::new(), now()).unwrap();
        }
        let agg = store.aggregate("calls", 1, now()).unwrap();
        assert_eq!(agg.count, 4);
        assert_eq!(agg.sum, 16.0);
        assert_eq!(agg.average, 4.0);
        assert_eq!(agg.min, -1.0);
        assert_eq!(agg.max, 10.0);
    }

    #[test]
    fn window_start_is_inclusive() {
        let store = MetricStore::new();
        let edge = now() - TimeDelta::hours(24);
        store.track("m", 1.0, Tags::new(), edge).unwrap();
        store
            .track("m", 100.0, Tags::new(), edge - TimeDelta::microseconds(1))
            .unwrap();

        let agg = store.aggregate("m", 24, now()).unwrap();
        assert_eq!(agg.count, 1);
        assert_eq!(agg.sum, 1.0);
    }

    #[test]
    fn empty_window_is_not_found() {
        let store = MetricStore::new();
        store
            .track("m", 1.0, Tags::new(), now() - TimeDelta::hours(48))
            .unwrap();
        let err = store.aggregate("m", 24, now()).unwrap_err();
        assert_eq!(err.detail(), "No data found for metric 'm' in the last 24 hours");
    }

    #[test]
    fn huge_window_does_not_overflow() {
        let store = MetricStore::new();
        store
            .track("m", 7.0, Tags::new(), now() - TimeDelta::days(3650))
            .unwrap();
        let agg = store.aggregate("m", u32::MAX, now()).unwrap();
        assert_eq!(agg.count, 1);
    }

    #[test]
    fn clear_removes_series_and_name() {
        let store = MetricStore::new();
        store.track("a", 1.0, Tags::new(), now()).unwrap();
        store.track("b", 1.0, Tags::new(), now()).unwrap();
        store.track("a", 2.0, Tags::new(), now()).unwrap();

        assert_eq!(store.clear("a").unwrap(), 2);
        assert_eq!(store.names().unwrap(), vec!["b".to_string()]);
        let err = store.aggregate("a", 24, now()).unwrap_err();
        assert_eq!(err.detail(), "Metric 'a' not found");
        assert!(store.clear("a").is_err());
    }

    #[test]
    fn names_keep_first_insertion_order() {
        let store = MetricStore::new();
        for name in ["z", "a", "z", "m"] {
            store.track(name, 0.0, Tags::new(), now()).unwrap();
        }
        let summary = store.summary().unwrap();
        assert_eq!(summary.names, vec!["z", "a", "m"]);
        assert_eq!(summary.total_records, 4);
    }

    #[test]
    fn concurrent_tracks_are_not_lost() {
        let store = std::sync::Arc::new(MetricStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..250 {
                        store.track("hits", i as f64, Tags::new(), now()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.summary().unwrap().total_records, 2000);
    }
}
