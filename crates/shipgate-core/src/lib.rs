//! Core contracts for shipgate.
//!
//! This crate contains:
//! - Platform request models and merchant configuration
//! - The calculate-shipping module flow and its two response shapes
//! - The HTTP transport seam and the Boxlink carrier adapter

pub mod adapters;
pub mod calculate;
pub mod domain;
pub mod error;
pub mod http_client;

pub use adapters::BoxlinkAdapter;
pub use calculate::{calculate, CalculateResponse, FreeShippingPreview};
pub use domain::{sanitize_zip, Address, Application, CartItem, MerchantConfig, ShippingParams};
pub use error::CalculateError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
