use std::sync::Arc;

use serde_json::Value;

use crate::error::CalculateError;
use crate::http_client::{HttpClient, HttpRequest};

/// Production Boxlink quoting endpoint.
pub const DEFAULT_BASE_URL: &str = "https://boxtray.boxlink.com.br";

/// Boxlink carrier adapter.
///
/// Issues exactly one quote request per invocation, no retries. The merchant
/// token is part of the endpoint path, so no auth headers are attached.
#[derive(Clone)]
pub struct BoxlinkAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl BoxlinkAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    pub fn with_base_url(http_client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Request quotes for the forwarded platform params.
    ///
    /// The carrier payload is returned verbatim when accepted: HTTP 200 with
    /// either a JSON array of services or an object carrying a
    /// `shipping_services` array. Undecodable bodies keep their raw text in
    /// the error; everything else upstream collapses into `Unavailable`.
    pub async fn quote(
        &self,
        token: &str,
        body: &Value,
        timeout_ms: u64,
    ) -> Result<Value, CalculateError> {
        let endpoint = format!("{}/e-com/{}", self.base_url, token);
        let request = HttpRequest::post(endpoint)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .with_timeout_ms(timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(timed_out = error.timed_out(), "boxlink transport error: {error}");
            CalculateError::unavailable(format!("boxlink transport error: {}", error.message()))
        })?;

        tracing::debug!(status = response.status, "boxlink response received");

        let payload = decode_payload(&response.body)?;

        if response.status != 200 {
            tracing::warn!(status = response.status, "boxlink rejected quote request");
            return Err(CalculateError::unavailable(format!(
                "boxlink returned status {}",
                response.status
            )));
        }

        match shape_of(&payload) {
            PayloadShape::ServiceArray | PayloadShape::ServiceObject => Ok(payload),
            PayloadShape::Other(found) => {
                tracing::warn!(found, "boxlink payload has an unexpected shape");
                Err(CalculateError::unavailable(format!(
                    "boxlink returned an unexpected {found} payload"
                )))
            }
        }
    }
}

/// Strict JSON decode with one unwrap pass for double-encoded string bodies.
fn decode_payload(body: &str) -> Result<Value, CalculateError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| CalculateError::invalid_response(body))?;

    match value {
        Value::String(text) => {
            serde_json::from_str(&text).map_err(|_| CalculateError::invalid_response(text))
        }
        other => Ok(other),
    }
}

enum PayloadShape {
    /// Bare array of shipping services (current API revision).
    ServiceArray,
    /// Object wrapping a `shipping_services` array (earlier revision).
    ServiceObject,
    Other(&'static str),
}

fn shape_of(payload: &Value) -> PayloadShape {
    match payload {
        Value::Array(_) => PayloadShape::ServiceArray,
        Value::Object(fields) => match fields.get("shipping_services") {
            Some(Value::Array(_)) => PayloadShape::ServiceObject,
            _ => PayloadShape::Other("object"),
        },
        Value::Null => PayloadShape::Other("null"),
        Value::Bool(_) => PayloadShape::Other("boolean"),
        Value::Number(_) => PayloadShape::Other("number"),
        Value::String(_) => PayloadShape::Other("string"),
    }
}
