//! Adaptador de persistencia
//!
//! Dos backends intercambiables elegidos por configuración al arranque:
//! un almacén local de blobs con nombre (snapshot completo de cada
//! colección) y un almacén remoto de documentos (un documento por
//! registro). Los fallos de escritura remotos son errores reales; las
//! escrituras locales siempre se consideran exitosas.

pub mod local;
pub mod remote;
pub mod sample;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::environment::EnvironmentConfig;
use crate::models::bus::Bus;
use crate::models::request::{ActivationRequest, RequestStatus};
use local::LocalStore;
use remote::RemoteStore;

/// Errores del adaptador de persistencia
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Malformed store payload: {0}")]
    Malformed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Snapshot de ambas colecciones de la flota
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    pub active: Vec<Bus>,
    pub archived: Vec<Bus>,
}

/// Persistencia de buses.
///
/// El backend local escribe las colecciones completas en `flush_fleet` y
/// trata las operaciones por registro como no-ops exitosos; el remoto
/// persiste por registro y no necesita flush.
#[async_trait]
pub trait BusStore: Send + Sync {
    async fn load_fleet(&self) -> StoreResult<FleetSnapshot>;

    /// Upsert de un registro en su colección (según su estado)
    async fn persist_bus(&self, bus: &Bus) -> StoreResult<()>;

    /// Eliminación permanente de un registro archivado
    async fn remove_bus(&self, id: u32) -> StoreResult<()>;

    /// Escritura completa de ambas colecciones (backend local)
    async fn flush_fleet(&self, snapshot: &FleetSnapshot) -> StoreResult<()>;
}

/// Persistencia de solicitudes de activación. Solo se muta el status.
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn fetch_requests(&self) -> StoreResult<Vec<ActivationRequest>>;

    async fn update_request_status(&self, id: &str, status: RequestStatus) -> StoreResult<()>;
}

/// Origen de datos por feature, leído de la configuración
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Local,
    Remote,
}

impl DataSource {
    /// Cualquier valor distinto de "remote" cae al backend local.
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "remote" => DataSource::Remote,
            _ => DataSource::Local,
        }
    }
}

/// Construye los adaptadores según la configuración. Cada feature
/// (flota y solicitudes) elige su backend por separado.
pub fn build_stores(
    config: &EnvironmentConfig,
) -> (Arc<dyn BusStore>, Arc<dyn RequestStore>) {
    let local = Arc::new(LocalStore::new(config.data_dir.clone()));

    let bus_store: Arc<dyn BusStore> = match DataSource::from_config(&config.fleet_data_source) {
        DataSource::Local => local.clone(),
        DataSource::Remote => Arc::new(RemoteStore::new(
            config.remote_store_url.clone(),
            config.requests_collection.clone(),
        )),
    };

    let request_store: Arc<dyn RequestStore> =
        match DataSource::from_config(&config.requests_data_source) {
            DataSource::Local => local,
            DataSource::Remote => Arc::new(RemoteStore::new(
                config.remote_store_url.clone(),
                config.requests_collection.clone(),
            )),
        };

    (bus_store, request_store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_defaults_to_local() {
        assert_eq!(DataSource::from_config("remote"), DataSource::Remote);
        assert_eq!(DataSource::from_config("Remote"), DataSource::Remote);
        assert_eq!(DataSource::from_config("local"), DataSource::Local);
        assert_eq!(DataSource::from_config("firebase"), DataSource::Local);
        assert_eq!(DataSource::from_config(""), DataSource::Local);
    }
}
