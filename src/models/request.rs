//! Modelo de solicitud de activación
//!
//! Las solicitudes las crea el flujo de activación de los bus attendants
//! (fuera del alcance de la consola); aquí solo se consulta la lista
//! pendiente y se muta el campo status.

use serde::{Deserialize, Serialize};

/// Estado de una solicitud de activación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    /// Normaliza el estado tal como llega de un documento remoto.
    /// Cualquier valor no reconocido vuelve a Pending.
    pub fn from_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Pending,
        }
    }
}

/// Solicitud de activación de cuenta de bus attendant - forma canónica
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub bus_company: String,
    pub route: String,
    pub plate_number: String,
    pub capacity: u32,
    #[serde(default)]
    pub bus_photo: Option<String>,
    pub status: RequestStatus,
    /// Epoch millis de creación de la solicitud
    pub requested_at: i64,
}
