//! Backend remoto de documentos
//!
//! Cada registro es un documento JSON en una colección HTTP
//! (`GET {base}/{coleccion}` lista, `PUT {base}/{coleccion}/{id}` upserta,
//! `DELETE` elimina). Los documentos llegan con nombres de campo y
//! representaciones de timestamp heterogéneos según qué flujo los creó;
//! la normalización a la forma canónica vive entera en este módulo para
//! aislar esa variación del resto de la consola.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};

use super::{BusStore, FleetSnapshot, RequestStore, StoreError, StoreResult};
use crate::models::bus::{Bus, BusStatus};
use crate::models::request::{ActivationRequest, RequestStatus};

const BUS_COLLECTION: &str = "buses";

pub struct RemoteStore {
    client: Client,
    base_url: String,
    requests_collection: String,
}

impl RemoteStore {
    pub fn new(base_url: String, requests_collection: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            requests_collection,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let response = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?
            .error_for_status()?;

        let documents: Vec<Value> = response.json().await?;
        Ok(documents)
    }

    /// Resuelve el documento de una solicitud: por id de documento o por
    /// el campo `requestId` embebido.
    async fn resolve_request_doc_id(&self, request_id: &str) -> StoreResult<String> {
        let documents = self.list_documents(&self.requests_collection).await?;

        documents
            .iter()
            .find(|doc| {
                document_id(doc).as_deref() == Some(request_id)
                    || doc.get("requestId").and_then(Value::as_str) == Some(request_id)
            })
            .and_then(|doc| document_id(doc))
            .ok_or_else(|| StoreError::NotFound(format!("request {}", request_id)))
    }
}

/// Id del documento: acepta string o número bajo la clave `id`.
fn document_id(doc: &Value) -> Option<String> {
    match doc.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Primer valor string presente entre las claves candidatas
fn first_string(doc: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_str))
        .unwrap_or(default)
        .to_string()
}

/// Primer valor numérico presente; acepta números y strings numéricos
fn first_u32(doc: &Value, keys: &[&str]) -> u32 {
    keys.iter()
        .find_map(|key| match doc.get(*key) {
            Some(Value::Number(n)) => n.as_u64().map(|n| n as u32),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        })
        .unwrap_or(0)
}

fn first_photo(doc: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Normaliza las representaciones de timestamp que aparecen en los
/// documentos: epoch numérico en millis, string de fecha, u objeto
/// nativo del backend `{seconds, nanos}`. Ausente o irreconocible
/// cae al instante actual.
pub fn normalize_timestamp(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
        Some(Value::String(s)) => parse_date_string(s)
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
        Some(Value::Object(map)) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64);
            match seconds {
                Some(seconds) => {
                    let nanos = map
                        .get("nanos")
                        .or_else(|| map.get("_nanoseconds"))
                        .and_then(Value::as_i64)
                        .unwrap_or(0);
                    seconds * 1_000 + nanos / 1_000_000
                }
                None => Utc::now().timestamp_millis(),
            }
        }
        _ => Utc::now().timestamp_millis(),
    }
}

fn parse_date_string(s: &str) -> Option<i64> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.with_timezone(&Utc).timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

/// Mapea un documento de bus a la forma canónica, con defaults explícitos
/// para cada campo ausente.
pub fn map_bus_document(fallback_id: u32, doc: &Value) -> Bus {
    let id = match doc.get("id") {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as u32).unwrap_or(fallback_id),
        Some(Value::String(s)) => s.parse().unwrap_or(fallback_id),
        _ => fallback_id,
    };

    let previous_status = doc
        .get("previousStatus")
        .and_then(Value::as_str)
        .map(BusStatus::from_loose);
    let archived_at = doc
        .get("archivedAt")
        .map(|value| normalize_timestamp(Some(value)));

    Bus {
        id,
        bus_number: first_string(doc, &["busNumber"], "N/A"),
        route: first_string(doc, &["route"], "N/A"),
        bus_company: first_string(doc, &["busCompany"], "N/A"),
        status: BusStatus::from_loose(&first_string(doc, &["status"], "Inactive")),
        plate_number: first_string(doc, &["plateNumber"], "N/A"),
        capacity: first_u32(doc, &["capacity"]),
        bus_attendant: first_string(doc, &["busAttendant"], "N/A"),
        bus_company_email: first_string(doc, &["busCompanyEmail"], ""),
        bus_company_contact: first_string(doc, &["busCompanyContact"], ""),
        registered_destination: first_string(doc, &["registeredDestination"], ""),
        bus_photo: first_photo(doc, &["busPhoto", "busPhotoUrl", "photoUrl"]),
        last_updated: normalize_timestamp(doc.get("lastUpdated")),
        previous_status,
        archived_at,
    }
}

/// Mapea un documento de solicitud a la forma canónica. Los flujos de
/// activación escriben nombres de campo distintos según su versión, de
/// ahí la lista de alias por campo.
pub fn map_request_document(fallback_id: &str, doc: &Value) -> ActivationRequest {
    let id = first_string(doc, &["requestId"], "");
    let id = if id.is_empty() {
        document_id(doc).unwrap_or_else(|| fallback_id.to_string())
    } else {
        id
    };

    ActivationRequest {
        id,
        full_name: first_string(doc, &["fullName", "name"], "N/A"),
        email: first_string(doc, &["email"], "N/A"),
        role: first_string(doc, &["role", "userRole"], "User"),
        bus_company: first_string(doc, &["busCompany", "company", "companyName"], "N/A"),
        route: first_string(doc, &["route", "registeredRoute"], "N/A"),
        plate_number: first_string(doc, &["plateNumber", "busPlateNumber"], "N/A"),
        capacity: first_u32(doc, &["capacity", "busCapacity"]),
        bus_photo: first_photo(doc, &["busPhoto", "busPhotoUrl", "photoUrl"]),
        status: RequestStatus::from_loose(&first_string(doc, &["status"], "Pending")),
        requested_at: normalize_timestamp(
            doc.get("requestedAt")
                .or_else(|| doc.get("createdAt"))
                .or_else(|| doc.get("lastUpdated")),
        ),
    }
}

#[async_trait]
impl BusStore for RemoteStore {
    /// La colección remota guarda activos y archivados juntos; se separan
    /// por el estado del documento al cargar.
    async fn load_fleet(&self) -> StoreResult<FleetSnapshot> {
        let documents = self.list_documents(BUS_COLLECTION).await?;

        let mut snapshot = FleetSnapshot::default();
        for (index, doc) in documents.iter().enumerate() {
            let bus = map_bus_document(index as u32 + 1, doc);
            if bus.status == BusStatus::Archived {
                snapshot.archived.push(bus);
            } else {
                snapshot.active.push(bus);
            }
        }

        Ok(snapshot)
    }

    async fn persist_bus(&self, bus: &Bus) -> StoreResult<()> {
        self.client
            .put(self.document_url(BUS_COLLECTION, &bus.id.to_string()))
            .json(bus)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove_bus(&self, id: u32) -> StoreResult<()> {
        self.client
            .delete(self.document_url(BUS_COLLECTION, &id.to_string()))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // Backend remoto: la persistencia ya ocurrió por registro
    async fn flush_fleet(&self, _snapshot: &FleetSnapshot) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl RequestStore for RemoteStore {
    async fn fetch_requests(&self) -> StoreResult<Vec<ActivationRequest>> {
        let documents = self.list_documents(&self.requests_collection).await?;
        Ok(documents
            .iter()
            .enumerate()
            .map(|(index, doc)| map_request_document(&format!("doc-{}", index + 1), doc))
            .collect())
    }

    /// Escritura parcial: solo `status` y `updatedAt` sobre el documento
    /// resuelto por id o por `requestId` embebido.
    async fn update_request_status(&self, id: &str, status: RequestStatus) -> StoreResult<()> {
        let doc_id = self.resolve_request_doc_id(id).await?;

        self.client
            .patch(self.document_url(&self.requests_collection, &doc_id))
            .json(&json!({
                "status": status.as_str(),
                "updatedAt": Utc::now().timestamp_millis(),
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_timestamp_accepts_epoch_number() {
        let value = json!(1_771_410_600_000i64);
        assert_eq!(normalize_timestamp(Some(&value)), 1_771_410_600_000);
    }

    #[test]
    fn test_normalize_timestamp_accepts_date_strings() {
        let rfc3339 = json!("2026-02-18T10:30:00Z");
        let expected = DateTime::parse_from_rfc3339("2026-02-18T10:30:00Z")
            .unwrap()
            .timestamp_millis();
        assert_eq!(normalize_timestamp(Some(&rfc3339)), expected);

        let date_only = json!("2026-02-18");
        let expected = NaiveDate::from_ymd_opt(2026, 2, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(normalize_timestamp(Some(&date_only)), expected);
    }

    #[test]
    fn test_normalize_timestamp_accepts_native_object() {
        let value = json!({ "seconds": 1_771_410_600i64, "nanos": 500_000_000 });
        assert_eq!(normalize_timestamp(Some(&value)), 1_771_410_600_500);

        let value = json!({ "_seconds": 10, "_nanoseconds": 0 });
        assert_eq!(normalize_timestamp(Some(&value)), 10_000);
    }

    #[test]
    fn test_normalize_timestamp_falls_back_to_now() {
        let before = Utc::now().timestamp_millis();
        let normalized = normalize_timestamp(None);
        let after = Utc::now().timestamp_millis();
        assert!(normalized >= before && normalized <= after);

        let garbage = json!("not a date");
        let normalized = normalize_timestamp(Some(&garbage));
        assert!(normalized >= before);
    }

    #[test]
    fn test_map_request_document_handles_field_aliases() {
        let doc = json!({
            "requestId": "REQ-77",
            "name": "Liza Navarro",
            "companyName": "RRCG Transport",
            "registeredRoute": "One Ayala - Ortigas",
            "busPlateNumber": "XED-901",
            "busCapacity": "50",
            "photoUrl": "https://cdn.example/bus.jpg",
            "status": "approved",
            "createdAt": 1_771_420_200_000i64,
        });

        let request = map_request_document("doc-1", &doc);
        assert_eq!(request.id, "REQ-77");
        assert_eq!(request.full_name, "Liza Navarro");
        assert_eq!(request.bus_company, "RRCG Transport");
        assert_eq!(request.route, "One Ayala - Ortigas");
        assert_eq!(request.plate_number, "XED-901");
        assert_eq!(request.capacity, 50);
        assert_eq!(request.bus_photo.as_deref(), Some("https://cdn.example/bus.jpg"));
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.requested_at, 1_771_420_200_000);
    }

    #[test]
    fn test_map_request_document_uses_defaults_for_missing_fields() {
        let doc = json!({ "id": "abc123" });
        let request = map_request_document("doc-9", &doc);
        assert_eq!(request.id, "abc123");
        assert_eq!(request.full_name, "N/A");
        assert_eq!(request.role, "User");
        assert_eq!(request.capacity, 0);
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_map_bus_document_defaults_and_id_fallback() {
        let doc = json!({ "busNumber": "OA-120", "status": "maintenance" });
        let bus = map_bus_document(42, &doc);
        assert_eq!(bus.id, 42);
        assert_eq!(bus.bus_number, "OA-120");
        assert_eq!(bus.status, BusStatus::Maintenance);
        assert_eq!(bus.route, "N/A");
        assert_eq!(bus.capacity, 0);
        assert_eq!(bus.bus_photo, None);
    }

    #[test]
    fn test_map_bus_document_keeps_archive_fields() {
        let doc = json!({
            "id": 7,
            "busNumber": "OA-107",
            "status": "Archived",
            "previousStatus": "Active",
            "archivedAt": 1_771_000_000_000i64,
            "lastUpdated": 1_771_000_000_000i64,
        });
        let bus = map_bus_document(1, &doc);
        assert_eq!(bus.id, 7);
        assert_eq!(bus.status, BusStatus::Archived);
        assert_eq!(bus.previous_status, Some(BusStatus::Active));
        assert_eq!(bus.archived_at, Some(1_771_000_000_000));
    }
}
