use jsonwebtoken::{encode, decode, Header, Algorithm, Validation, EncodingKey, DecodingKey};
use chrono::{Utc, Duration};
use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{IdentityUser, JwtClaims};

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(config.jwt_expiration_hours),
        }
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(env: &EnvironmentConfig) -> Self {
        let config = JwtConfig::from_environment(env);
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de sesión para la consola
    pub fn generate_access_token(&self, user: &IdentityUser) -> Result<String, String> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| format!("Error generating access token: {}", e))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, String> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Invalid token: {}", e))
    }

    /// Verifica si un token está expirado
    pub fn is_token_expired(&self, token: &str) -> bool {
        match self.validate_token(token) {
            Ok(claims) => {
                let now = Utc::now().timestamp();
                now >= claims.exp
            }
            Err(_) => true, // Si no se puede decodificar, considerarlo expirado
        }
    }

    /// Reconstruye el usuario desde los claims del token
    pub fn get_user(&self, token: &str) -> Result<IdentityUser, String> {
        let claims = self.validate_token(token)?;

        Ok(IdentityUser {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            is_admin: claims.is_admin,
        })
    }

    pub fn expires_in(&self) -> Duration {
        self.config.access_token_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_env() -> EnvironmentConfig {
        EnvironmentConfig::default()
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new(&test_env());

        let user = IdentityUser {
            id: "user_admin_001".to_string(),
            name: "Fleet Admin".to_string(),
            email: "admin@fleet.local".to_string(),
            is_admin: true,
        };

        let token = jwt_service.generate_access_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user_admin_001");
        assert_eq!(claims.email, "admin@fleet.local");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_token_expiration() {
        let jwt_service = JwtService::new(&test_env());

        let user = IdentityUser {
            id: "user_admin_001".to_string(),
            name: "Fleet Admin".to_string(),
            email: "admin@fleet.local".to_string(),
            is_admin: true,
        };

        let token = jwt_service.generate_access_token(&user).unwrap();

        // Token recién creado no debería estar expirado
        assert!(!jwt_service.is_token_expired(&token));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let jwt_service = JwtService::new(&test_env());
        assert!(jwt_service.validate_token("not-a-token").is_err());
        assert!(jwt_service.is_token_expired("not-a-token"));
    }
}
