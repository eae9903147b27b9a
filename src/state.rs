//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Las vistas viven detrás de locks porque
//! toda mutación optimista escribe primero en memoria y reconcilia
//! después contra la persistencia.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::config::environment::EnvironmentConfig;
use crate::console::{BusConsole, RequestBoard};
use crate::services::auth_service::AuthService;
use crate::store::{BusStore, RequestStore};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub bus_store: Arc<dyn BusStore>,
    pub request_store: Arc<dyn RequestStore>,
    pub buses: Arc<RwLock<BusConsole>>,
    pub requests: Arc<RwLock<RequestBoard>>,
    pub auth: Arc<Mutex<AuthService>>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        bus_store: Arc<dyn BusStore>,
        request_store: Arc<dyn RequestStore>,
        buses: BusConsole,
        requests: RequestBoard,
    ) -> Self {
        let auth = AuthService::new(&config);

        Self {
            config,
            bus_store,
            request_store,
            buses: Arc::new(RwLock::new(buses)),
            requests: Arc::new(RwLock::new(requests)),
            auth: Arc::new(Mutex::new(auth)),
        }
    }
}

/// Epoch millis actual, el formato de timestamp de los registros
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
