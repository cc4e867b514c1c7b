use std::sync::Arc;

use shipgate_core::{BoxlinkAdapter, ReqwestHttpClient};

/// Shared handler state: the carrier adapter handle.
///
/// Merchant configuration is NOT cached here; it arrives on every webhook
/// body, so invocations stay independent.
#[derive(Clone)]
pub struct AppState {
    carrier: Arc<BoxlinkAdapter>,
}

impl AppState {
    pub fn new(carrier: BoxlinkAdapter) -> Self {
        Self {
            carrier: Arc::new(carrier),
        }
    }

    /// Production state wired to the real carrier endpoint.
    pub fn production(carrier_base_url: impl Into<String>) -> Self {
        let client = Arc::new(ReqwestHttpClient::new());
        Self::new(BoxlinkAdapter::with_base_url(client, carrier_base_url))
    }

    pub fn carrier(&self) -> &BoxlinkAdapter {
        &self.carrier
    }
}
