use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures a handler can report. Every variant renders as `{ ok: false, msg }`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// The resource already exists (duplicate signup email).
    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Request body too large")]
    PayloadTooLarge,

    /// `msg` goes to the client, `cause` only to the log.
    #[error("{msg}")]
    Internal { msg: String, cause: anyhow::Error },
}

impl AppError {
    pub fn internal(msg: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            msg: msg.into(),
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { msg, cause } = &self {
            error!(error = %cause, "{}", msg);
        }
        let body = Json(json!({
            "ok": false,
            "msg": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
