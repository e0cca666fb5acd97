//! Prefixed record identifiers (`metric_<uuid>`, `event_<uuid>`, `calc_<uuid>`).

use uuid::Uuid;

/// Generate a process-unique id with the given prefix.
pub fn prefixed(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4())
}

pub fn metric_id() -> String {
    prefixed("metric")
}

pub fn event_id() -> String {
    prefixed("event")
}

pub fn calculation_id() -> String {
    prefixed("calc")
}
