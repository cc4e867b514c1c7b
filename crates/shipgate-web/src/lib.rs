//! Webhook surface for the calculate-shipping module.
//!
//! The router is built over an [`AppState`] holding the carrier adapter so
//! tests can drive the same handlers against a fake transport.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ModuleFailure, ServerError};
pub use routes::router;
pub use state::AppState;
