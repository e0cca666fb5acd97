//! Top-level facade crate for the Bilo services.
//!
//! Re-exports the core types, the shared HTTP plumbing and both service
//! libraries so users can depend on a single crate.

pub mod core {
    pub use bilo_core::*;
}

pub mod http {
    pub use bilo_http::*;
}

pub mod analytics {
    pub use bilo_analytics::*;
}

pub mod calculator {
    pub use bilo_calculator::*;
}
