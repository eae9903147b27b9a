//! Pipeline de listado: filtrar -> ordenar -> paginar
//!
//! Funciones puras sobre las colecciones en memoria. Las colecciones son
//! pequeñas, así que recalcular el pipeline completo en cada cambio de
//! entrada es aceptable y mantiene el estado libre de caches ocultos.

use serde::Deserialize;
use std::cmp::Ordering;

use crate::models::bus::Bus;
use crate::models::request::{ActivationRequest, RequestStatus};

/// Clave de ordenamiento para la tabla de buses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusSortKey {
    BusNumber,
    Route,
    BusCompany,
    Status,
    Capacity,
    LastUpdated,
}

impl Default for BusSortKey {
    fn default() -> Self {
        BusSortKey::LastUpdated
    }
}

/// Dirección de ordenamiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

/// Una página del pipeline, con los totales que la tabla necesita
/// para el resumen "Showing X to Y of Z".
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Largo de la colección después del filtro
    pub total_items: usize,
    pub total_pages: usize,
    /// Página efectiva (la pedida, ajustada al rango válido)
    pub current_page: usize,
    pub showing_from: usize,
    pub showing_to: usize,
}

/// Filtra buses por subcadena, sin distinguir mayúsculas, contra el
/// conjunto fijo de campos de texto de la tabla.
pub fn filter_buses<'a>(buses: &'a [Bus], query: &str) -> Vec<&'a Bus> {
    let query = query.to_lowercase();
    buses
        .iter()
        .filter(|bus| {
            bus.searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

fn compare_buses(a: &Bus, b: &Bus, key: BusSortKey) -> Ordering {
    match key {
        BusSortKey::BusNumber => a.bus_number.cmp(&b.bus_number),
        BusSortKey::Route => a.route.cmp(&b.route),
        BusSortKey::BusCompany => a.bus_company.cmp(&b.bus_company),
        BusSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        BusSortKey::Capacity => a.capacity.cmp(&b.capacity),
        BusSortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
    }
}

/// Ordena la vista filtrada. Capacity y lastUpdated comparan numéricamente,
/// el resto lexicográficamente; Desc invierte el comparador.
pub fn sort_buses(buses: &mut [&Bus], key: BusSortKey, order: SortOrder) {
    buses.sort_by(|a, b| {
        let ordering = compare_buses(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Pagina una secuencia ya filtrada y ordenada.
///
/// `total_pages` nunca baja de 1; una página pedida fuera de rango se
/// ajusta al borde más cercano (cuando la colección se encoge, la página
/// actual baja con ella). Un tamaño de página cero se trata como 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = (total_items.div_ceil(per_page)).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let page_items: Vec<T> = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let showing_from = if total_items == 0 { 0 } else { start + 1 };
    let showing_to = end;

    Page {
        items: page_items,
        total_items,
        total_pages,
        current_page,
        showing_from,
        showing_to,
    }
}

/// Pipeline completo para la tabla de buses.
pub fn bus_page(
    buses: &[Bus],
    query: &str,
    sort_by: BusSortKey,
    sort_order: SortOrder,
    page: usize,
    per_page: usize,
) -> Page<Bus> {
    let mut filtered = filter_buses(buses, query);
    sort_buses(&mut filtered, sort_by, sort_order);
    let owned: Vec<Bus> = filtered.into_iter().cloned().collect();
    paginate(&owned, page, per_page)
}

/// Pipeline para la tabla de solicitudes: solo las pendientes,
/// más recientes primero. No aplica búsqueda libre.
pub fn pending_request_page(
    requests: &[ActivationRequest],
    page: usize,
    per_page: usize,
) -> Page<ActivationRequest> {
    let mut pending: Vec<ActivationRequest> = requests
        .iter()
        .filter(|request| request.status == RequestStatus::Pending)
        .cloned()
        .collect();
    pending.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
    paginate(&pending, page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bus::BusStatus;

    fn bus(id: u32, number: &str, capacity: u32, updated: i64) -> Bus {
        Bus {
            id,
            bus_number: number.to_string(),
            route: format!("One Ayala - Route {}", id),
            bus_company: "JAM Transit".to_string(),
            status: BusStatus::Active,
            plate_number: format!("PLT-{:03}", id),
            capacity,
            bus_attendant: "Juan Dela Cruz".to_string(),
            bus_company_email: "ops@jamtransit.ph".to_string(),
            bus_company_contact: "+63 917 000 0000".to_string(),
            registered_destination: "BGC, Taguig".to_string(),
            bus_photo: None,
            last_updated: updated,
            previous_status: None,
            archived_at: None,
        }
    }

    fn fleet() -> Vec<Bus> {
        vec![
            bus(1, "OA-101", 45, 300),
            bus(2, "OA-102", 50, 100),
            bus(3, "OA-103", 42, 200),
            bus(4, "OA-104", 48, 400),
            bus(5, "OA-105", 45, 500),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_and_exact() {
        let mut buses = fleet();
        buses[2].bus_attendant = "Maria Santos".to_string();

        let matched = filter_buses(&buses, "maria");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 3);

        // Todo registro del resultado contiene la consulta en algún campo
        // designado, y ninguno fuera del resultado la contiene.
        let matched_ids: Vec<u32> = matched.iter().map(|b| b.id).collect();
        for bus in &buses {
            let contains = bus
                .searchable_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("maria"));
            assert_eq!(contains, matched_ids.contains(&bus.id));
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let buses = fleet();
        assert_eq!(filter_buses(&buses, "").len(), buses.len());
    }

    #[test]
    fn test_sort_capacity_is_numeric() {
        let buses = fleet();
        let mut view: Vec<&Bus> = buses.iter().collect();
        sort_buses(&mut view, BusSortKey::Capacity, SortOrder::Asc);
        let capacities: Vec<u32> = view.iter().map(|b| b.capacity).collect();
        assert_eq!(capacities, vec![42, 45, 45, 48, 50]);

        sort_buses(&mut view, BusSortKey::Capacity, SortOrder::Desc);
        let capacities: Vec<u32> = view.iter().map(|b| b.capacity).collect();
        assert_eq!(capacities, vec![50, 48, 45, 45, 42]);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let buses = fleet();
        let first = bus_page(&buses, "oa", BusSortKey::LastUpdated, SortOrder::Desc, 1, 3);
        let second = bus_page(&buses, "oa", BusSortKey::LastUpdated, SortOrder::Desc, 1, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pagination_counts() {
        let buses = fleet();
        let page = paginate(&buses, 1, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 5);

        // max(1, ceil) con colección vacía
        let empty: Vec<Bus> = Vec::new();
        let page = paginate(&empty, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.showing_from, 0);
        assert_eq!(page.showing_to, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_pages_concatenate_without_gaps_or_duplicates() {
        let buses = fleet();
        let mut view: Vec<&Bus> = buses.iter().collect();
        sort_buses(&mut view, BusSortKey::LastUpdated, SortOrder::Desc);
        let sorted: Vec<Bus> = view.into_iter().cloned().collect();

        let mut rebuilt = Vec::new();
        let total_pages = paginate(&sorted, 1, 2).total_pages;
        for page_number in 1..=total_pages {
            rebuilt.extend(paginate(&sorted, page_number, 2).items);
        }
        assert_eq!(rebuilt, sorted);
    }

    #[test]
    fn test_out_of_range_page_clamps_down() {
        let buses = fleet();
        let page = paginate(&buses, 99, 2);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_pending_request_page_filters_and_sorts() {
        use crate::models::request::{ActivationRequest, RequestStatus};

        let request = |id: &str, status: RequestStatus, at: i64| ActivationRequest {
            id: id.to_string(),
            full_name: "Ana Reyes".to_string(),
            email: "ana@example.ph".to_string(),
            role: "Bus Attendant".to_string(),
            bus_company: "RRCG Transport".to_string(),
            route: "One Ayala - Ortigas".to_string(),
            plate_number: "XYZ-456".to_string(),
            capacity: 50,
            bus_photo: None,
            status,
            requested_at: at,
        };

        let requests = vec![
            request("REQ-1", RequestStatus::Pending, 100),
            request("REQ-2", RequestStatus::Approved, 400),
            request("REQ-3", RequestStatus::Pending, 300),
            request("REQ-4", RequestStatus::Rejected, 200),
        ];

        let page = pending_request_page(&requests, 1, 10);
        assert_eq!(page.total_items, 2);
        let ids: Vec<&str> = page.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ-3", "REQ-1"]);
    }
}
