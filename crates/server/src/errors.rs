use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::StoreError;
use thiserror::Error;

pub const MSG_UNAUTHORIZED: &str = "Unauthorized";
pub const MSG_NOT_FOUND: &str = "Value not found.";
pub const MSG_SAVE_FAILED: &str = "Failed to save reference values.";
pub const MSG_BAD_REQUEST: &str = "Invalid request body.";

/// Request-level failure rendered as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn unauthorized() -> Self { Self::new(StatusCode::UNAUTHORIZED, MSG_UNAUTHORIZED) }
    pub fn not_found() -> Self { Self::new(StatusCode::NOT_FOUND, MSG_NOT_FOUND) }
    pub fn bad_request() -> Self { Self::new(StatusCode::BAD_REQUEST, MSG_BAD_REQUEST) }
    pub fn save_failed() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED) }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => Self::not_found(),
            _ => Self::save_failed(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot load reference values: {0}")]
    Store(#[from] StoreError),
    #[error("cannot bind listener: {0}")]
    Bind(#[from] std::io::Error),
}
