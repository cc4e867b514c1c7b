use thiserror::Error;

/// Platform-facing calculate-shipping failures.
///
/// Each variant maps onto the `{error, message}` JSON body and HTTP status the
/// platform expects from module endpoints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculateError {
    #[error("token unset on app hidden data (merchant must configure the app)")]
    MissingToken,

    #[error("cannot calculate shipping without cart items")]
    EmptyCart,

    /// Carrier body that does not decode as JSON. The raw text is kept so the
    /// platform message shows exactly what the carrier sent.
    #[error("carrier returned a body that is not valid JSON")]
    InvalidResponse { body: String },

    /// Upstream semantic or transport failure: non-200 status, unexpected
    /// payload shape, timeout, or connection error.
    #[error("carrier quote request failed: {message}")]
    Unavailable { message: String },
}

impl CalculateError {
    pub fn invalid_response(body: impl Into<String>) -> Self {
        Self::InvalidResponse { body: body.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Machine-readable error code for the platform response body.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "CALCULATE_AUTH_ERR",
            Self::EmptyCart => "CALCULATE_EMPTY_CART",
            Self::InvalidResponse { .. } => "CALCULATE_INVALID_RES",
            Self::Unavailable { .. } => "CALCULATE_FAILED",
        }
    }

    /// HTTP status the platform expects for this failure.
    pub const fn status(&self) -> u16 {
        match self {
            Self::EmptyCart => 400,
            Self::MissingToken | Self::InvalidResponse { .. } | Self::Unavailable { .. } => 409,
        }
    }

    /// Message for the platform response body.
    pub fn platform_message(&self) -> String {
        match self {
            Self::InvalidResponse { body } => body.clone(),
            other => other.to_string(),
        }
    }
}
