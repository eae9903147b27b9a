//! Modelos de autenticación
//!
//! El proveedor de identidad es un colaborador externo con un contrato
//! mínimo (login/logout/usuario actual); estos tipos definen ese contrato
//! y las claims de sesión propias de la consola.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usuario tal como lo devuelve el proveedor de identidad
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Request de login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl LoginResponse {
    pub fn denied(error: &str) -> Self {
        Self {
            success: false,
            token: None,
            user: None,
            error: Some(error.to_string()),
            expires_at: None,
        }
    }
}

/// Claims del JWT de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Sesión activa registrada por la consola
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}
