use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use shipgate_core::{calculate, Application, CalculateResponse, ShippingParams};

use crate::error::ModuleFailure;
use crate::state::AppState;

/// Webhook body delivered by the platform for module endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleRequest {
    pub params: ShippingParams,
    #[serde(default)]
    pub application: Application,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ecom/modules/calculate-shipping", post(calculate_shipping))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn calculate_shipping(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ModuleRequest>,
) -> Result<Json<CalculateResponse>, ModuleFailure> {
    let request_id = Uuid::new_v4();
    let store_id = store_id_from(&headers);
    let span = tracing::info_span!("calculate_shipping", %request_id, store_id);

    let result = calculate(request.params, &request.application, state.carrier())
        .instrument(span)
        .await;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::warn!(%request_id, code = error.code(), "calculate shipping failed: {error}");
            Err(ModuleFailure(error))
        }
    }
}

/// Tenant identifier forwarded by the platform. Logged for correlation only;
/// platform auth happens upstream of this service.
fn store_id_from(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("x-store-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn store_id_parses_from_the_platform_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-store-id", HeaderValue::from_static("51244"));
        assert_eq!(store_id_from(&headers), Some(51_244));
    }

    #[test]
    fn malformed_store_ids_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-store-id", HeaderValue::from_static("not-a-number"));
        assert_eq!(store_id_from(&headers), None);
        assert_eq!(store_id_from(&HeaderMap::new()), None);
    }
}
