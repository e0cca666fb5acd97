//! Calculator service library entry.
//!
//! Converts an activity quantity into kg CO2 with a fixed per-activity
//! emission factor. Stateless apart from its config.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod calculator;
pub mod config;
pub mod factors;
pub mod handlers;
pub mod router;

use bilo_http::ServiceInfo;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "calculation-service",
    banner: "Calculation Service - Rust/axum Edition",
    shared_utils_name: "calculator-service",
    version: env!("CARGO_PKG_VERSION"),
};

pub const DEFAULT_PORT: u16 = 4005;
