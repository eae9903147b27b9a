//! Lógica de consola
//!
//! Núcleo puro de la consola de administración: pipeline de listado,
//! modelo de selección, protocolo de mutación optimista y máquina de
//! estados de archivo. Nada en este árbol hace I/O; los controladores
//! aplican estas operaciones sobre el estado compartido y ejecutan los
//! efectos de persistencia que correspondan.

pub mod mutation;
pub mod pipeline;
pub mod roster;
pub mod selection;

use serde::{Deserialize, Serialize};

use crate::models::bus::Bus;
use crate::models::request::{ActivationRequest, RequestStatus};
use roster::FleetRoster;
use selection::Selection;

/// Colección visible en la vista de buses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Active,
    Archived,
}

/// Estado de la vista de buses: colecciones, selección, modo de vista
/// y el registro abierto en el detalle.
#[derive(Debug, Clone)]
pub struct BusConsole {
    pub roster: FleetRoster,
    pub selection: Selection<u32>,
    pub view_mode: ViewMode,
    pub open_detail: Option<u32>,
}

impl BusConsole {
    pub fn new(roster: FleetRoster) -> Self {
        Self {
            roster,
            selection: Selection::new(),
            view_mode: ViewMode::Active,
            open_detail: None,
        }
    }

    /// Colección correspondiente al modo de vista actual
    pub fn visible(&self) -> &[Bus] {
        match self.view_mode {
            ViewMode::Active => &self.roster.active,
            ViewMode::Archived => &self.roster.archived,
        }
    }

    /// Cambiar de vista reinicia la selección por completo y cierra
    /// cualquier detalle abierto.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            self.selection.clear();
            self.open_detail = None;
        }
    }

    /// Cierra el detalle si el registro abierto está entre los mutados.
    /// Solo las acciones individuales exitosas lo invocan; las acciones
    /// por lote dejan el detalle como está.
    pub fn close_detail_if_among(&mut self, ids: &[u32]) {
        if let Some(open) = self.open_detail {
            if ids.contains(&open) {
                self.open_detail = None;
            }
        }
    }
}

/// Estado de la vista de solicitudes de activación
#[derive(Debug, Clone)]
pub struct RequestBoard {
    pub requests: Vec<ActivationRequest>,
    pub selection: Selection<String>,
    pub open_detail: Option<String>,
}

impl RequestBoard {
    pub fn new(requests: Vec<ActivationRequest>) -> Self {
        Self {
            requests,
            selection: Selection::new(),
            open_detail: None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&ActivationRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    pub fn status_of(&self, id: &str) -> Option<RequestStatus> {
        self.find(id).map(|request| request.status)
    }

    /// Fase de aplicación optimista: escribe el nuevo estado en memoria
    pub fn apply_status(&mut self, id: &str, status: RequestStatus) {
        if let Some(request) = self.requests.iter_mut().find(|request| request.id == id) {
            request.status = status;
        }
    }
}
