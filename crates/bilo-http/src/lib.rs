//! Shared HTTP plumbing for the Bilo services.
//!
//! Both services are small axum applications with the same outer shape:
//! strict YAML config, JSON error bodies, validated extractors, the common
//! `/`, `/health`, `/health-check` endpoints, per-route request metrics and
//! a graceful-shutdown serve loop. That shape lives here so the service
//! crates only carry their own routes and state.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod extract;
pub mod obs;
pub mod ops;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use extract::{ValidJson, ValidQuery};
pub use ops::ServiceInfo;
