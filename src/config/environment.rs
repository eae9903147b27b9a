//! Configuración de variables de entorno
//!
//! La configuración se lee una sola vez al arranque. Los switches de
//! origen de datos son por feature: la flota y las solicitudes pueden
//! apuntar a backends distintos. Todo tiene default para poder levantar
//! la consola sin entorno (backend local, datos de muestra).

use std::env;
use std::path::PathBuf;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub cors_origins: Vec<String>,
    /// Origen de datos de la flota: "local" o "remote"
    pub fleet_data_source: String,
    /// Origen de datos de las solicitudes: "local" o "remote"
    pub requests_data_source: String,
    /// Nombre de la colección remota de solicitudes
    pub requests_collection: String,
    /// URL base del almacén remoto de documentos
    pub remote_store_url: String,
    /// Directorio de los blobs del backend local
    pub data_dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "fleet-console-dev-secret-change-in-production".to_string()),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            fleet_data_source: env::var("FLEET_DATA_SOURCE")
                .unwrap_or_else(|_| "local".to_string()),
            requests_data_source: env::var("REQUESTS_DATA_SOURCE")
                .unwrap_or_else(|_| "local".to_string()),
            requests_collection: env::var("REQUESTS_COLLECTION")
                .unwrap_or_else(|_| "activationRequests".to_string()),
            remote_store_url: env::var("REMOTE_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
