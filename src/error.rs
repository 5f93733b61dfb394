use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The service's error taxonomy. Every failure a handler can surface is one
/// of these three; the carried message is forwarded to the client verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Conflict(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

/// Store and hasher failures cross into the taxonomy here, prefixed with
/// "Error: ". An underlying message that already starts with "Error:" comes
/// out doubled ("Error: Error: ..."); that doubling is the documented wire
/// contract, inherited from the service this replaces. Typed errors never
/// pass through this impl, so Conflict/NotFound cannot be re-wrapped.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("Error: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, message = %self.message(), "request failed");
        } else {
            tracing::warn!(%status, message = %self.message(), "request rejected");
        }
        (status, Json(json!({ "message": self.message() }))).into_response()
    }
}
