use std::sync::RwLock;

use chrono::{DateTime, Utc};

use bilo_core::error::{BiloError, Result};
use bilo_core::ids;

use crate::model::{EventPage, EventRecord, Properties};

/// Insertion-ordered event log.
#[derive(Default)]
pub struct EventStore {
    inner: RwLock<Vec<EventRecord>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(
        &self,
        event_name: &str,
        user_id: Option<String>,
        properties: Properties,
        timestamp: DateTime<Utc>,
    ) -> Result<EventRecord> {
        let record = EventRecord {
            id: ids::event_id(),
            event_name: event_name.to_string(),
            user_id,
            properties,
            timestamp,
        };
        self.inner
            .write()
            .map_err(|_| BiloError::poisoned("event store"))?
            .push(record.clone());
        Ok(record)
    }

    /// Most recent first, optionally restricted to one event name (an empty
    /// name means no filter), truncated to `limit`.
    pub fn list(&self, limit: usize, event_name: Option<&str>) -> Result<EventPage> {
        let filter = event_name.filter(|n| !n.is_empty());

        let inner = self.inner.read().map_err(|_| BiloError::poisoned("event store"))?;
        let total = inner.len();
        let mut events: Vec<EventRecord> = inner
            .iter()
            .filter(|e| filter.map_or(true, |n| e.event_name == n))
            .cloned()
            .collect();
        drop(inner);

        // Stable: equal timestamps keep insertion order.
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let matched = events.len();
        events.truncate(limit);

        Ok(EventPage {
            count: events.len(),
            events,
            matched,
            total,
        })
    }

    pub fn clear(&self) -> Result<usize> {
        let mut inner = self.inner.write().map_err(|_| BiloError::poisoned("event store"))?;
        let removed = inner.len();
        inner.clear();
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self
            .inner
            .read()
            .map_err(|_| BiloError::poisoned("event store"))?
            .len())
    }
}
