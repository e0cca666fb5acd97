//! Process-local stores.
//!
//! Each store owns its data behind one `RwLock`; every append, delete,
//! clear and read runs entirely inside that lock and never across an
//! `.await`, so concurrent handlers cannot lose updates or observe a
//! half-applied change.

pub mod events;
pub mod metrics;

pub use events::EventStore;
pub use metrics::{MetricStore, MetricSummary};
