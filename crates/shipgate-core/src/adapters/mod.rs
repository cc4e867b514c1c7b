//! Carrier adapters.

pub mod boxlink;

pub use boxlink::BoxlinkAdapter;
