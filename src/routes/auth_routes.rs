use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::models::auth::{IdentityUser, LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// La puerta de admin responde 401 con el cuerpo de denegación; el
/// cliente muestra el mensaje tal cual.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let controller = AuthController::new(state);
    let response = controller.login(request).await;
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    (status, Json(response))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer(&headers)?;
    let controller = AuthController::new(state);
    let user = controller.current_user(token).await?;
    let removed = controller.logout(&user.id).await;
    Ok(Json(serde_json::json!({ "success": removed })))
}

async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<IdentityUser>, AppError> {
    let token = bearer(&headers)?;
    let controller = AuthController::new(state);
    let user = controller.current_user(token).await?;
    Ok(Json(user))
}

fn bearer(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))
}
