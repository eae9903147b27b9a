use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::console::pipeline::{BusSortKey, Page, SortOrder};
use crate::console::ViewMode;
use crate::models::bus::Bus;

// Request para registrar un bus
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusRequest {
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub bus_number: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub route: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub bus_company: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub status: String,

    #[validate(custom = "crate::utils::validation::validate_plate_number")]
    pub plate_number: String,

    pub capacity: u32,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub bus_attendant: String,

    #[validate(email)]
    pub bus_company_email: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub bus_company_contact: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub registered_destination: String,

    pub bus_photo: Option<String>,
}

// Parámetros de query para el listado de buses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusListParams {
    pub search: Option<String>,
    pub sort_by: Option<BusSortKey>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub view: Option<ViewMode>,
}

// Response de una página de la tabla de buses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusPageResponse {
    pub buses: Vec<Bus>,
    /// Registros que pasaron el filtro
    pub total_items: usize,
    /// Largo de la colección visible antes del filtro
    pub filtered_from: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    pub view: ViewMode,
}

impl BusPageResponse {
    pub fn from_page(page: Page<Bus>, filtered_from: usize, view: ViewMode) -> Self {
        Self {
            buses: page.items,
            total_items: page.total_items,
            filtered_from,
            total_pages: page.total_pages,
            current_page: page.current_page,
            showing_from: page.showing_from,
            showing_to: page.showing_to,
            view,
        }
    }
}

// Response de registro de un bus
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusResponse {
    pub success: bool,
    pub message: String,
    pub bus: Bus,
}

impl CreateBusResponse {
    pub fn registered(bus: Bus) -> Self {
        Self {
            success: true,
            message: format!("Bus {} registered successfully", bus.bus_number),
            bus,
        }
    }
}

// Cambio de la colección visible
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewRequest {
    pub view: ViewMode,
}

// Ids objetivo de una acción por lote sobre buses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusBatchRequest {
    pub ids: Vec<u32>,
}

// Request de eliminación permanente; exige confirmación explícita
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBusesRequest {
    pub ids: Vec<u32>,
    #[serde(default)]
    pub confirm: bool,
}

// Resultado de una mutación sobre la flota
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetMutationResponse {
    pub success: bool,
    pub mutated_ids: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FleetMutationResponse {
    pub fn ok(mutated_ids: Vec<u32>) -> Self {
        Self {
            success: true,
            mutated_ids,
            error: None,
        }
    }

    pub fn partial(mutated_ids: Vec<u32>, error: String) -> Self {
        Self {
            success: false,
            mutated_ids,
            error: Some(error),
        }
    }
}
