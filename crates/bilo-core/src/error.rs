//! Shared error type across Bilo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unknown resource (metric name, empty aggregation window).
    NotFound,
    /// Well-formed request with an unsupported value.
    InvalidArgument,
    /// Malformed body, query string or timestamp.
    ValidationError,
    /// Startup configuration rejected.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidArgument => "INVALID_ARGUMENT",
            ClientCode::ValidationError => "VALIDATION_ERROR",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BiloError>;

/// Unified error type used by core, http plumbing and both services.
///
/// The `Display` output of the request-facing variants is the bare detail
/// message, since it is shown to callers verbatim.
#[derive(Debug, Error)]
pub enum BiloError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Validation(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BiloError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BiloError::NotFound(_) => ClientCode::NotFound,
            BiloError::InvalidArgument(_) => ClientCode::InvalidArgument,
            BiloError::Validation(_) => ClientCode::ValidationError,
            BiloError::BadConfig(_) => ClientCode::BadConfig,
            BiloError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Human-readable detail without any variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            BiloError::NotFound(m)
            | BiloError::InvalidArgument(m)
            | BiloError::Validation(m)
            | BiloError::BadConfig(m)
            | BiloError::Internal(m) => m,
        }
    }

    /// A poisoned store lock means a writer panicked mid-update.
    pub fn poisoned(store: &str) -> Self {
        BiloError::Internal(format!("{store} lock poisoned"))
    }
}
