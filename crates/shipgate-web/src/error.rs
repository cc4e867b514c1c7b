use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shipgate_core::CalculateError;
use thiserror::Error;

/// Platform module error body: `{ error, message }`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Maps core failures onto the platform's HTTP error responses.
#[derive(Debug)]
pub struct ModuleFailure(pub CalculateError);

impl From<CalculateError> for ModuleFailure {
    fn from(error: CalculateError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ModuleFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::CONFLICT);
        let body = ModuleErrorBody {
            error: self.0.code(),
            message: self.0.platform_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Startup and serve failures for the binary entrypoint.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
