//! Analytics service library entry.
//!
//! Metric and event ingestion over process-local stores, with aggregation,
//! listing and deletion endpoints. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod model;
pub mod router;
pub mod store;

use bilo_http::ServiceInfo;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "analytics-service",
    banner: "Analytics Service - Rust/axum Edition",
    shared_utils_name: "analytics-service",
    version: env!("CARGO_PKG_VERSION"),
};

pub const DEFAULT_PORT: u16 = 3011;
