//! HTTP mapping of `BiloError`.
//!
//! Every failure leaves the service as `{"detail": ..., "code": ...}` with a
//! status derived from the stable client code.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use bilo_core::error::{BiloError, ClientCode};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Newtype so `BiloError` (transport-agnostic) can become an axum response.
#[derive(Debug)]
pub struct ApiError(pub BiloError);

impl From<BiloError> for ApiError {
    fn from(e: BiloError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        Self(BiloError::Validation(rej.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rej: QueryRejection) -> Self {
        Self(BiloError::Validation(rej.body_text()))
    }
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ClientCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
        ClientCode::BadConfig | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        if status.is_server_error() {
            tracing::error!(code = code.as_str(), error = %self.0, "request failed");
        } else {
            tracing::debug!(code = code.as_str(), detail = self.0.detail(), "request rejected");
        }
        let body = json!({
            "detail": self.0.detail(),
            "code": code.as_str(),
        });
        (status, Json(body)).into_response()
    }
}
