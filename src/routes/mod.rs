//! Definición de rutas de la API

pub mod auth_routes;
pub mod bus_routes;
pub mod request_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Router completo de la API. Toda la superficie de la consola exige
/// sesión de admin; solo /api/auth y el health check quedan fuera de
/// la puerta.
pub fn create_api_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/buses", bus_routes::create_bus_router())
        .nest("/api/requests", request_routes::create_request_router())
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth_middleware::require_admin,
        ));

    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", auth_routes::create_auth_router())
        .merge(protected)
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet_console",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
