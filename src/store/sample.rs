//! Datos de muestra embebidos
//!
//! Respaldo determinista para cuando el backend de datos todavía no tiene
//! contenido o una lectura remota falla: la consola degrada a esta flota
//! de ejemplo en lugar de quedar vacía o caerse.

use lazy_static::lazy_static;

use crate::models::bus::{Bus, BusStatus};
use crate::models::request::{ActivationRequest, RequestStatus};

fn seed_bus(
    id: u32,
    bus_number: &str,
    route: &str,
    company: &str,
    status: BusStatus,
    plate: &str,
    capacity: u32,
    attendant: &str,
    email: &str,
    contact: &str,
    destination: &str,
    last_updated: i64,
) -> Bus {
    Bus {
        id,
        bus_number: bus_number.to_string(),
        route: route.to_string(),
        bus_company: company.to_string(),
        status,
        plate_number: plate.to_string(),
        capacity,
        bus_attendant: attendant.to_string(),
        bus_company_email: email.to_string(),
        bus_company_contact: contact.to_string(),
        registered_destination: destination.to_string(),
        bus_photo: None,
        last_updated,
        previous_status: None,
        archived_at: None,
    }
}

lazy_static! {
    static ref SAMPLE_FLEET: Vec<Bus> = vec![
        seed_bus(
            1, "OA-101", "One Ayala - BGC", "JAM Transit", BusStatus::Active,
            "UVW-823", 45, "Juan Dela Cruz", "operations@jamtransit.com.ph",
            "+63 917 123 4567", "Bonifacio Global City, Taguig", 1_771_410_600_000,
        ),
        seed_bus(
            2, "OA-102", "One Ayala - Ortigas", "RRCG Transport", BusStatus::Active,
            "XYZ-456", 50, "Maria Santos", "info@rrcgtransport.ph",
            "+63 918 234 5678", "Ortigas Center, Pasig City", 1_771_406_100_000,
        ),
        seed_bus(
            3, "OA-103", "One Ayala - Quezon City", "Froehlich Tours", BusStatus::Maintenance,
            "ABC-789", 48, "Pedro Ramirez", "contact@froehlich.com.ph",
            "+63 919 345 6789", "Quezon City Circle, QC", 1_771_337_600_000,
        ),
        seed_bus(
            4, "OA-104", "One Ayala - Mandaluyong", "HM Transport", BusStatus::Active,
            "DEF-234", 42, "Rosa Garcia", "support@hmtransport.ph",
            "+63 920 456 7890", "Mandaluyong City Center", 1_771_404_300_000,
        ),
        seed_bus(
            5, "OA-105", "One Ayala - BGC", "JAM Transit", BusStatus::Active,
            "GHI-567", 45, "Carlos Reyes", "operations@jamtransit.com.ph",
            "+63 917 123 4567", "Bonifacio Global City, Taguig", 1_771_259_400_000,
        ),
        seed_bus(
            6, "OA-106", "One Ayala - Alabang", "Partas Transport", BusStatus::Inactive,
            "JKL-890", 52, "N/A", "dispatch@partas.com.ph",
            "+63 921 567 8901", "Alabang Town Center, Muntinlupa", 1_771_153_200_000,
        ),
        seed_bus(
            7, "OA-107", "One Ayala - Pasig", "RRCG Transport", BusStatus::Active,
            "MNO-123", 50, "Ana Mendoza", "info@rrcgtransport.ph",
            "+63 918 234 5678", "Pasig City Hall Area", 1_771_399_200_000,
        ),
        seed_bus(
            8, "OA-108", "One Ayala - Cubao", "Genesis Transport", BusStatus::Active,
            "PQR-456", 48, "Ramon Cruz", "operations@genesistransport.ph",
            "+63 922 678 9012", "Araneta Center, Cubao QC", 1_771_415_400_000,
        ),
        seed_bus(
            9, "OA-109", "One Ayala - Ortigas", "Froehlich Tours", BusStatus::Maintenance,
            "STU-789", 48, "N/A", "contact@froehlich.com.ph",
            "+63 919 345 6789", "Ortigas Center, Pasig City", 1_771_074_600_000,
        ),
        seed_bus(
            10, "OA-110", "One Ayala - Marikina", "HM Transport", BusStatus::Active,
            "YZA-345", 42, "Jose Villaruz", "support@hmtransport.ph",
            "+63 920 456 7890", "Marikina City Center", 1_771_342_800_000,
        ),
    ];

    static ref SAMPLE_REQUESTS: Vec<ActivationRequest> = vec![
        seed_request("REQ-2101", "Liza Navarro", "liza.navarro@rrcgtransport.ph",
            "RRCG Transport", "One Ayala - Ortigas", "XED-901", 50, 1_771_420_200_000),
        seed_request("REQ-2102", "Marco Aquino", "marco.aquino@jamtransit.com.ph",
            "JAM Transit", "One Ayala - BGC", "TFG-334", 45, 1_771_417_500_000),
        seed_request("REQ-2103", "Cecilia Bautista", "cecilia.bautista@genesistransport.ph",
            "Genesis Transport", "One Ayala - Cubao", "RHK-772", 48, 1_771_409_700_000),
        seed_request("REQ-2104", "Dante Salazar", "dante.salazar@hmtransport.ph",
            "HM Transport", "One Ayala - Mandaluyong", "QWM-518", 42, 1_771_351_900_000),
        seed_request("REQ-2105", "Imelda Ferrer", "imelda.ferrer@partas.com.ph",
            "Partas Transport", "One Ayala - Alabang", "LPN-206", 52, 1_771_330_700_000),
        seed_request("REQ-2106", "Benjie Ocampo", "benjie.ocampo@froehlich.com.ph",
            "Froehlich Tours", "One Ayala - Quezon City", "VBC-645", 48, 1_771_262_300_000),
    ];
}

fn seed_request(
    id: &str,
    full_name: &str,
    email: &str,
    company: &str,
    route: &str,
    plate: &str,
    capacity: u32,
    requested_at: i64,
) -> ActivationRequest {
    ActivationRequest {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        role: "Bus Attendant".to_string(),
        bus_company: company.to_string(),
        route: route.to_string(),
        plate_number: plate.to_string(),
        capacity,
        bus_photo: None,
        status: RequestStatus::Pending,
        requested_at,
    }
}

/// Flota de ejemplo (copia fresca, mutable por quien la recibe)
pub fn sample_buses() -> Vec<Bus> {
    SAMPLE_FLEET.clone()
}

/// Solicitudes de ejemplo, todas pendientes
pub fn sample_requests() -> Vec<ActivationRequest> {
    SAMPLE_REQUESTS.clone()
}
