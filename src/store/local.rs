//! Backend local de blobs
//!
//! Dos blobs JSON con nombre bajo el directorio de datos: la colección
//! activa y la archivada, cada una serializada completa. Una lectura
//! ausente o corrupta degrada a los datos de muestra embebidos; las
//! escrituras locales nunca fallan hacia afuera: el error se registra y
//! la operación se reporta exitosa.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{sample, BusStore, FleetSnapshot, RequestStore, StoreResult};
use crate::models::bus::Bus;
use crate::models::request::{ActivationRequest, RequestStatus};

const BUS_BLOB: &str = "admin_buses.json";
const ARCHIVED_BUS_BLOB: &str = "admin_archived_buses.json";

pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }

    /// Lee un blob de colección. `None` cuando el blob no existe o no
    /// parsea; el llamador decide el respaldo.
    async fn read_blob(&self, key: &str) -> Option<Vec<Bus>> {
        let path = self.blob_path(key);
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(_) => return None,
        };

        match serde_json::from_slice::<Vec<Bus>>(&raw) {
            Ok(buses) => Some(buses),
            Err(e) => {
                log::error!("Blob {} corrupto, usando respaldo: {}", key, e);
                None
            }
        }
    }

    async fn write_blob(&self, key: &str, buses: &[Bus]) {
        if let Err(e) = self.ensure_data_dir(&self.data_dir).await {
            log::error!("No se pudo crear el directorio de datos: {}", e);
            return;
        }

        match serde_json::to_vec_pretty(buses) {
            Ok(raw) => {
                if let Err(e) = fs::write(self.blob_path(key), raw).await {
                    log::error!("No se pudo escribir el blob {}: {}", key, e);
                }
            }
            Err(e) => log::error!("No se pudo serializar el blob {}: {}", key, e),
        }
    }

    async fn ensure_data_dir(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir).await
    }
}

#[async_trait]
impl BusStore for LocalStore {
    async fn load_fleet(&self) -> StoreResult<FleetSnapshot> {
        let active = match self.read_blob(BUS_BLOB).await {
            Some(buses) => buses,
            None => sample::sample_buses(),
        };
        let archived = self.read_blob(ARCHIVED_BUS_BLOB).await.unwrap_or_default();

        Ok(FleetSnapshot { active, archived })
    }

    // Backend local: las operaciones por registro son no-ops; la escritura
    // real ocurre en flush_fleet con las colecciones completas.
    async fn persist_bus(&self, _bus: &Bus) -> StoreResult<()> {
        Ok(())
    }

    async fn remove_bus(&self, _id: u32) -> StoreResult<()> {
        Ok(())
    }

    async fn flush_fleet(&self, snapshot: &FleetSnapshot) -> StoreResult<()> {
        self.write_blob(BUS_BLOB, &snapshot.active).await;
        self.write_blob(ARCHIVED_BUS_BLOB, &snapshot.archived).await;
        Ok(())
    }
}

#[async_trait]
impl RequestStore for LocalStore {
    async fn fetch_requests(&self) -> StoreResult<Vec<ActivationRequest>> {
        Ok(sample::sample_requests())
    }

    // No-op exitoso: con el backend local activo no hay documento remoto
    // que actualizar.
    async fn update_request_status(&self, _id: &str, _status: RequestStatus) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bus::BusStatus;
    use tempfile::TempDir;

    fn snapshot_with_one_archived() -> FleetSnapshot {
        let mut active = sample::sample_buses();
        let mut archived_bus = active.remove(0);
        archived_bus.previous_status = Some(archived_bus.status);
        archived_bus.status = BusStatus::Archived;
        archived_bus.archived_at = Some(2_000);
        FleetSnapshot {
            active,
            archived: vec![archived_bus],
        }
    }

    #[tokio::test]
    async fn test_flush_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path().to_path_buf());

        let snapshot = snapshot_with_one_archived();
        store.flush_fleet(&snapshot).await.unwrap();

        let loaded = store.load_fleet().await.unwrap();
        assert_eq!(loaded.active, snapshot.active);
        assert_eq!(loaded.archived, snapshot.archived);
    }

    #[tokio::test]
    async fn test_missing_blobs_fall_back_to_sample_data() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path().join("nonexistent"));

        let loaded = store.load_fleet().await.unwrap();
        assert_eq!(loaded.active, sample::sample_buses());
        assert!(loaded.archived.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_blob_falls_back_to_sample_data() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join(BUS_BLOB), b"not json at all")
            .await
            .unwrap();
        let store = LocalStore::new(dir.path().to_path_buf());

        let loaded = store.load_fleet().await.unwrap();
        assert_eq!(loaded.active, sample::sample_buses());
    }

    #[tokio::test]
    async fn test_local_writes_always_report_success() {
        // Directorio imposible de crear: la escritura igual reporta éxito
        let store = LocalStore::new(PathBuf::from("/dev/null/impossible"));
        let snapshot = FleetSnapshot::default();
        assert!(store.flush_fleet(&snapshot).await.is_ok());

        let request_store: &dyn RequestStore = &store;
        assert!(request_store
            .update_request_status("REQ-1", RequestStatus::Approved)
            .await
            .is_ok());
    }
}
