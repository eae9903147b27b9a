//! Middleware de autenticación
//!
//! Valida el Bearer token contra el servicio de autenticación y deja el
//! usuario en las extensiones del request. Toda la API de la consola es
//! solo para admins; un token válido de un no admin se rechaza con 403.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Extrae el token del header Authorization
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get("Authorization")?.to_str().ok()?;
    auth_header.strip_prefix("Bearer ")
}

/// Middleware que exige una sesión de admin válida
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(&headers).ok_or(StatusCode::UNAUTHORIZED)?;

    let auth = state.auth.lock().await;
    let user = auth
        .current_user(token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    drop(auth);

    if !user.is_admin {
        return Err(StatusCode::FORBIDDEN);
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
