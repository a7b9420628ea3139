use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const INVALID_TEXT_MESSAGE: &str = "text too short or invalid";
pub const NOT_FOUND_MESSAGE: &str = "prediction not found";
pub const DELETED_MESSAGE: &str = "prediction deleted successfully";

/// Failures of the gateway core, independent of the transport.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("text too short or invalid")]
    InvalidInput,
    #[error("prediction not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    public_message: String,
}

impl ApiError {
    fn new(status: StatusCode, public_message: impl Into<String>) -> Self {
        Self {
            status,
            public_message: public_message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.public_message
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Not found: {}", msg);
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    /// The detail is logged, never returned to the caller.
    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            error: &'a str,
        }

        (
            self.status,
            Json(ErrorBody {
                error: &self.public_message,
            }),
        )
            .into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidInput => Self::bad_request(INVALID_TEXT_MESSAGE),
            GatewayError::NotFound(id) => {
                tracing::debug!(id = %id, "Unknown prediction id");
                Self::not_found(NOT_FOUND_MESSAGE)
            }
            GatewayError::Storage(msg) => Self::internal(msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.public_message)
    }
}
