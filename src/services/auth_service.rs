use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{IdentityUser, LoginRequest, LoginResponse, SessionInfo};
use crate::services::jwt_service::JwtService;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use std::collections::HashMap;

pub const NOT_ADMIN_MESSAGE: &str = "Access Denied: You are not an admin.";

/// Contrato mínimo con el proveedor de identidad externo
pub trait IdentityProvider: Send + Sync {
    /// Devuelve el usuario si las credenciales son válidas
    fn authenticate(&self, email: &str, password: &str) -> Option<IdentityUser>;

    /// Cierra la sesión en el lado del proveedor
    fn sign_out(&self, user_id: &str);
}

/// Proveedor de identidad en memoria con usuarios semilla.
/// En producción sería un directorio corporativo real.
pub struct SeedIdentityProvider {
    users: Vec<SeedUser>,
}

struct SeedUser {
    user: IdentityUser,
    password_hash: String,
}

impl SeedIdentityProvider {
    pub fn new() -> Self {
        let users = vec![
            SeedUser {
                user: IdentityUser {
                    id: "user_admin_001".to_string(),
                    name: "Fleet Admin".to_string(),
                    email: "admin@fleet.local".to_string(),
                    is_admin: true,
                },
                password_hash: hash("admin123", DEFAULT_COST)
                    .unwrap_or_else(|_| String::new()),
            },
            SeedUser {
                user: IdentityUser {
                    id: "user_attendant_001".to_string(),
                    name: "Bus Attendant".to_string(),
                    email: "attendant@fleet.local".to_string(),
                    is_admin: false,
                },
                password_hash: hash("attendant123", DEFAULT_COST)
                    .unwrap_or_else(|_| String::new()),
            },
        ];

        Self { users }
    }
}

impl Default for SeedIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SeedIdentityProvider {
    fn authenticate(&self, email: &str, password: &str) -> Option<IdentityUser> {
        let seed = self
            .users
            .iter()
            .find(|s| s.user.email.eq_ignore_ascii_case(email))?;

        match verify(password, &seed.password_hash) {
            Ok(true) => Some(seed.user.clone()),
            _ => None,
        }
    }

    fn sign_out(&self, _user_id: &str) {
        // El proveedor semilla no mantiene estado de sesión propio
    }
}

/// Servicio de autenticación de la consola
pub struct AuthService {
    jwt_service: JwtService,
    provider: Box<dyn IdentityProvider>,
    // Cache de sesiones activas
    active_sessions: HashMap<String, SessionInfo>,
}

impl AuthService {
    pub fn new(env: &EnvironmentConfig) -> Self {
        Self::with_provider(env, Box::new(SeedIdentityProvider::new()))
    }

    pub fn with_provider(env: &EnvironmentConfig, provider: Box<dyn IdentityProvider>) -> Self {
        Self {
            jwt_service: JwtService::new(env),
            provider,
            active_sessions: HashMap::new(),
        }
    }

    /// Autentica al usuario y aplica la puerta de admin: cualquier
    /// usuario válido que no sea admin queda desconectado de inmediato.
    pub fn login(&mut self, request: &LoginRequest) -> LoginResponse {
        let user = match self.provider.authenticate(&request.email, &request.password) {
            Some(user) => user,
            None => return LoginResponse::denied("Invalid credentials"),
        };

        if !user.is_admin {
            log::warn!("Non-admin login attempt rejected for {}", user.email);
            self.provider.sign_out(&user.id);
            return LoginResponse::denied(NOT_ADMIN_MESSAGE);
        }

        let token = match self.jwt_service.generate_access_token(&user) {
            Ok(token) => token,
            Err(e) => {
                log::error!("JWT generation failed: {}", e);
                return LoginResponse::denied("Authentication error");
            }
        };
        let expires_at = Utc::now() + self.jwt_service.expires_in();

        let session = SessionInfo {
            user_id: user.id.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
            last_activity: Utc::now(),
        };
        self.active_sessions.insert(user.id.clone(), session);

        LoginResponse {
            success: true,
            token: Some(token),
            user: Some(user),
            error: None,
            expires_at: Some(expires_at),
        }
    }

    /// Valida un token y devuelve el usuario de la sesión
    pub fn current_user(&self, token: &str) -> Result<IdentityUser, String> {
        self.jwt_service.get_user(token)
    }

    /// Cierra una sesión
    pub fn logout(&mut self, user_id: &str) -> bool {
        self.provider.sign_out(user_id);
        self.active_sessions.remove(user_id).is_some()
    }

    /// Actualiza la última actividad de una sesión
    pub fn update_last_activity(&mut self, user_id: &str) {
        if let Some(session) = self.active_sessions.get_mut(user_id) {
            session.last_activity = Utc::now();
        }
    }

    /// Obtiene información de una sesión activa
    pub fn get_session(&self, user_id: &str) -> Option<&SessionInfo> {
        self.active_sessions.get(user_id)
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt_service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&EnvironmentConfig::default())
    }

    #[test]
    fn test_admin_login() {
        let mut auth = service();

        let request = LoginRequest {
            email: "admin@fleet.local".to_string(),
            password: "admin123".to_string(),
        };

        let response = auth.login(&request);
        assert!(response.success);
        assert!(response.token.is_some());

        let user = response.user.unwrap();
        assert!(user.is_admin);
        assert!(auth.get_session(&user.id).is_some());
    }

    #[test]
    fn test_non_admin_is_signed_out() {
        let mut auth = service();

        let request = LoginRequest {
            email: "attendant@fleet.local".to_string(),
            password: "attendant123".to_string(),
        };

        let response = auth.login(&request);
        assert!(!response.success);
        assert!(response.token.is_none());
        assert_eq!(response.error.as_deref(), Some(NOT_ADMIN_MESSAGE));
        assert!(auth.get_session("user_attendant_001").is_none());
    }

    #[test]
    fn test_invalid_credentials() {
        let mut auth = service();

        let request = LoginRequest {
            email: "admin@fleet.local".to_string(),
            password: "wrong_password".to_string(),
        };

        let response = auth.login(&request);
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_logout_removes_session() {
        let mut auth = service();

        let request = LoginRequest {
            email: "admin@fleet.local".to_string(),
            password: "admin123".to_string(),
        };
        let response = auth.login(&request);
        let user = response.user.unwrap();

        assert!(auth.logout(&user.id));
        assert!(auth.get_session(&user.id).is_none());
        assert!(!auth.logout(&user.id));
    }

    #[test]
    fn test_current_user_round_trip() {
        let mut auth = service();

        let request = LoginRequest {
            email: "admin@fleet.local".to_string(),
            password: "admin123".to_string(),
        };
        let response = auth.login(&request);
        let token = response.token.unwrap();

        let user = auth.current_user(&token).unwrap();
        assert_eq!(user.email, "admin@fleet.local");
        assert!(user.is_admin);
    }
}
