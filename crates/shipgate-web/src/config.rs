use std::net::SocketAddr;

use crate::error::ServerError;

/// Server configuration sourced from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub carrier_base_url: String,
}

impl ServerConfig {
    /// Read `SHIPGATE_BIND` and `SHIPGATE_CARRIER_URL`, defaulting to
    /// `0.0.0.0:8080` and the production carrier endpoint.
    pub fn from_env() -> Result<Self, ServerError> {
        let bind = std::env::var("SHIPGATE_BIND").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
        let bind_addr = bind
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr {
                value: bind,
                source,
            })?;

        let carrier_base_url = std::env::var("SHIPGATE_CARRIER_URL")
            .unwrap_or_else(|_| String::from(shipgate_core::adapters::boxlink::DEFAULT_BASE_URL));

        Ok(Self {
            bind_addr,
            carrier_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_carrier() {
        let config = ServerConfig {
            bind_addr: "0.0.0.0:8080".parse().expect("valid addr"),
            carrier_base_url: String::from(shipgate_core::adapters::boxlink::DEFAULT_BASE_URL),
        };
        assert!(config.carrier_base_url.starts_with("https://"));
    }
}
