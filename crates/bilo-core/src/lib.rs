//! Bilo core: transport-agnostic primitives shared by the Bilo services.
//!
//! This crate defines the error surface, id generation, and UTC timestamp
//! handling used by the analytics and calculator services. It carries no
//! HTTP or runtime dependencies so the domain logic can be tested without
//! a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `BiloError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod ids;
pub mod shared;
pub mod time;

/// Shared result type.
pub use error::{BiloError, ClientCode, Result};
