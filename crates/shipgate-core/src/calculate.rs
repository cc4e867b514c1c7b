//! Calculate-shipping module flow.
//!
//! One webhook invocation maps to at most one carrier call: preview requests
//! (no destination) and validation failures never leave the process.

use serde::Serialize;
use serde_json::Value;

use crate::adapters::BoxlinkAdapter;
use crate::domain::{sanitize_zip, Address, Application, ShippingParams};
use crate::error::CalculateError;

/// Preview response: no destination yet, only free-shipping metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FreeShippingPreview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_from_value: Option<f64>,
    pub shipping_services: Vec<Value>,
}

/// The two response shapes the platform accepts from this module. Never a
/// mix: previews carry an empty service list, full responses are the carrier
/// payload verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Preview(FreeShippingPreview),
    Quotes(Value),
}

/// Run the calculate-shipping flow for one webhook invocation.
pub async fn calculate(
    params: ShippingParams,
    application: &Application,
    carrier: &BoxlinkAdapter,
) -> Result<CalculateResponse, CalculateError> {
    let config = application.merged();
    let mut params = params;

    if params.to.is_none() {
        // no shipping address yet: respond with the free shipping preview only
        return Ok(CalculateResponse::Preview(FreeShippingPreview {
            free_shipping_from_value: config.free_shipping_from_value(),
            shipping_services: Vec::new(),
        }));
    }

    let Some(token) = config.token().map(str::to_owned) else {
        return Err(CalculateError::MissingToken);
    };

    if !params.has_items() {
        return Err(CalculateError::EmptyCart);
    }

    apply_origin_zip(&mut params, config.zip());

    let timeout_ms = params.timeout_ms();
    let body = serde_json::to_value(&params).map_err(|error| {
        CalculateError::unavailable(format!("failed to encode carrier request: {error}"))
    })?;

    tracing::info!(timeout_ms, "requesting boxlink quotes");

    let payload = carrier.quote(&token, &body, timeout_ms).await?;
    Ok(CalculateResponse::Quotes(payload))
}

/// Override the origin postal code with a digits-only value, preferring the
/// request origin and falling back to the merchant-configured zip.
fn apply_origin_zip(params: &mut ShippingParams, merchant_zip: Option<&str>) {
    let zip = params
        .from
        .as_ref()
        .and_then(|from| from.zip.as_deref())
        .or(merchant_zip)
        .map(sanitize_zip);

    if let Some(zip) = zip {
        match params.from.as_mut() {
            Some(from) => from.zip = Some(zip),
            None => params.from = Some(Address::with_zip(zip)),
        }
    }
}
