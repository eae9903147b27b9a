//! Modelo de Bus
//!
//! Este módulo contiene el struct Bus (forma canónica del registro) y sus
//! variantes de estado. Los nombres de campo serializados son camelCase
//! porque coinciden con el formato de los blobs y documentos remotos.

use serde::{Deserialize, Serialize};

/// Estado del bus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BusStatus {
    Active,
    Maintenance,
    Inactive,
    Archived,
}

impl BusStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusStatus::Active => "Active",
            BusStatus::Maintenance => "Maintenance",
            BusStatus::Inactive => "Inactive",
            BusStatus::Archived => "Archived",
        }
    }

    /// Interpreta el estado tal como llega de un documento remoto.
    /// Valores desconocidos o ausentes se tratan como Inactive.
    pub fn from_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => BusStatus::Active,
            "maintenance" => BusStatus::Maintenance,
            "archived" => BusStatus::Archived,
            _ => BusStatus::Inactive,
        }
    }

    /// Interpreta un estado operativo venido de un formulario. `Archived`
    /// no es asignable directamente: solo la operación de archivado lo
    /// produce, junto con su `previousStatus`.
    pub fn from_operational(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(BusStatus::Active),
            "maintenance" => Some(BusStatus::Maintenance),
            "inactive" => Some(BusStatus::Inactive),
            _ => None,
        }
    }
}

/// Bus principal - forma canónica usada por toda la consola,
/// independiente del backend de datos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: u32,
    pub bus_number: String,
    pub route: String,
    pub bus_company: String,
    pub status: BusStatus,
    pub plate_number: String,
    pub capacity: u32,
    pub bus_attendant: String,
    pub bus_company_email: String,
    pub bus_company_contact: String,
    pub registered_destination: String,
    #[serde(default)]
    pub bus_photo: Option<String>,
    /// Epoch millis de la última modificación
    pub last_updated: i64,
    /// Solo presente en registros archivados: el estado previo al archivo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<BusStatus>,
    /// Solo presente en registros archivados: epoch millis del archivo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<i64>,
}

impl Bus {
    /// Campos de texto contra los que aplica la búsqueda libre
    pub fn searchable_fields(&self) -> [&str; 6] {
        [
            &self.bus_number,
            &self.route,
            &self.bus_company,
            &self.plate_number,
            &self.bus_attendant,
            self.status.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_loose() {
        assert_eq!(BusStatus::from_loose("active"), BusStatus::Active);
        assert_eq!(BusStatus::from_loose("Maintenance"), BusStatus::Maintenance);
        assert_eq!(BusStatus::from_loose("ARCHIVED"), BusStatus::Archived);
        assert_eq!(BusStatus::from_loose("whatever"), BusStatus::Inactive);
        assert_eq!(BusStatus::from_loose(""), BusStatus::Inactive);
    }

    #[test]
    fn test_status_from_operational_never_yields_archived() {
        assert_eq!(
            BusStatus::from_operational("active"),
            Some(BusStatus::Active)
        );
        assert_eq!(
            BusStatus::from_operational("Maintenance"),
            Some(BusStatus::Maintenance)
        );
        assert_eq!(
            BusStatus::from_operational("inactive"),
            Some(BusStatus::Inactive)
        );
        assert_eq!(BusStatus::from_operational("Archived"), None);
        assert_eq!(BusStatus::from_operational("whatever"), None);
    }

    #[test]
    fn test_bus_serializes_camel_case() {
        let bus = Bus {
            id: 1,
            bus_number: "OA-101".to_string(),
            route: "One Ayala - BGC".to_string(),
            bus_company: "JAM Transit".to_string(),
            status: BusStatus::Active,
            plate_number: "UVW-823".to_string(),
            capacity: 45,
            bus_attendant: "Juan Dela Cruz".to_string(),
            bus_company_email: "ops@jamtransit.ph".to_string(),
            bus_company_contact: "+63 917 123 4567".to_string(),
            registered_destination: "Bonifacio Global City".to_string(),
            bus_photo: None,
            last_updated: 1_700_000_000_000,
            previous_status: None,
            archived_at: None,
        };

        let value = serde_json::to_value(&bus).unwrap();
        assert_eq!(value["busNumber"], "OA-101");
        assert_eq!(value["plateNumber"], "UVW-823");
        assert_eq!(value["status"], "Active");
        // Los campos de archivo no aparecen en registros activos
        assert!(value.get("previousStatus").is_none());
        assert!(value.get("archivedAt").is_none());
    }
}
