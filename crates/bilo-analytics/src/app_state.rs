//! Shared application state for the analytics service.
//!
//! Stores are built once at startup and dropped at process exit; handlers
//! reach them only through this state.

use std::sync::Arc;

use crate::config::AnalyticsConfig;
use crate::store::{EventStore, MetricStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AnalyticsConfig,
    metrics: MetricStore,
    events: EventStore,
}

impl AppState {
    pub fn new(cfg: AnalyticsConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: MetricStore::new(),
                events: EventStore::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &AnalyticsConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricStore {
        &self.inner.metrics
    }

    pub fn events(&self) -> &EventStore {
        &self.inner.events
    }
}
