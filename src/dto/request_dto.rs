use serde::{Deserialize, Serialize};

use crate::console::pipeline::Page;
use crate::models::request::{ActivationRequest, RequestStatus};

// Parámetros de query para el listado de solicitudes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

// Response de una página de la tabla de solicitudes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPageResponse {
    pub requests: Vec<ActivationRequest>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub showing_from: usize,
    pub showing_to: usize,
}

impl RequestPageResponse {
    pub fn from_page(page: Page<ActivationRequest>) -> Self {
        Self {
            requests: page.items,
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            showing_from: page.showing_from,
            showing_to: page.showing_to,
        }
    }
}

// Cambio de estado sobre una solicitud individual
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusRequest {
    pub status: RequestStatus,
}

// Cambio de estado por lote
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequestStatusRequest {
    pub ids: Vec<String>,
    pub status: RequestStatus,
}

// Resultado de una mutación de solicitudes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMutationResponse {
    pub success: bool,
    pub mutated_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestMutationResponse {
    pub fn ok(mutated_ids: Vec<String>) -> Self {
        Self {
            success: true,
            mutated_ids,
            error: None,
        }
    }

    pub fn partial(mutated_ids: Vec<String>, error: String) -> Self {
        Self {
            success: false,
            mutated_ids,
            error: Some(error),
        }
    }
}
