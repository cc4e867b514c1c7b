use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Calculate-shipping request sent by the platform.
///
/// Only the fields this module inspects are typed. Everything else lands in
/// `extra` and is forwarded to the carrier untouched, so new platform fields
/// never get dropped on the way through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CartItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_checkout_confirmation: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShippingParams {
    /// True when the cart carries at least one item.
    pub fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }

    /// Carrier call timeout: checkout confirmations get more headroom.
    pub fn timeout_ms(&self) -> u64 {
        if self.is_checkout_confirmation.unwrap_or(false) {
            8_000
        } else {
            5_000
        }
    }
}

/// Origin or destination address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    pub fn with_zip(zip: impl Into<String>) -> Self {
        Self {
            zip: Some(zip.into()),
            extra: Map::new(),
        }
    }
}

/// Cart line item. Quantities and prices stay optional: the carrier consumes
/// whatever subset the merchant's storefront sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Strip everything but ASCII digits from a postal code.
pub fn sanitize_zip(zip: &str) -> String {
    zip.chars().filter(char::is_ascii_digit).collect()
}
