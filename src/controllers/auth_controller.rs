use crate::models::auth::{IdentityUser, LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Login con puerta de admin: credenciales inválidas y usuarios no
    /// admin reciben la misma forma de respuesta, con success en false.
    pub async fn login(&self, request: LoginRequest) -> LoginResponse {
        let mut auth = self.state.auth.lock().await;
        auth.login(&request)
    }

    pub async fn logout(&self, user_id: &str) -> bool {
        let mut auth = self.state.auth.lock().await;
        auth.logout(user_id)
    }

    /// Usuario de la sesión del token presentado
    pub async fn current_user(&self, token: &str) -> Result<IdentityUser, AppError> {
        let auth = self.state.auth.lock().await;
        auth.current_user(token)
            .map_err(AppError::Unauthorized)
    }
}
