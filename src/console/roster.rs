//! Colecciones de flota y máquina de estados de archivo
//!
//! Un bus vive en la colección activa o en la archivada, nunca en ambas.
//! Archivar mueve el registro conservando su estado previo para poder
//! restaurarlo; eliminar solo existe sobre la colección archivada
//! (no hay transición directa de activo a eliminado).

use crate::models::bus::{Bus, BusStatus};

/// Las dos colecciones paralelas de la flota
#[derive(Debug, Clone, Default)]
pub struct FleetRoster {
    pub active: Vec<Bus>,
    pub archived: Vec<Bus>,
}

impl FleetRoster {
    pub fn new(active: Vec<Bus>, archived: Vec<Bus>) -> Self {
        Self { active, archived }
    }

    /// Siguiente id entero: máximo sobre ambas colecciones + 1, o 1 si
    /// la flota está vacía. Considerar también los archivados evita
    /// reutilizar un id que solo salió de la colección activa.
    pub fn next_id(&self) -> u32 {
        self.active
            .iter()
            .chain(self.archived.iter())
            .map(|bus| bus.id)
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
    }

    /// Agrega un bus nuevo a la colección activa y lo devuelve.
    pub fn add_bus(&mut self, bus: Bus) -> &Bus {
        self.active.push(bus);
        self.active.last().expect("bus recién agregado")
    }

    pub fn find_active(&self, id: u32) -> Option<&Bus> {
        self.active.iter().find(|bus| bus.id == id)
    }

    pub fn find_archived(&self, id: u32) -> Option<&Bus> {
        self.archived.iter().find(|bus| bus.id == id)
    }

    /// Archiva los ids presentes en la colección activa: copia cada registro
    /// a la colección archivada con `previousStatus` igual a su estado
    /// actual, estado `Archived` y timestamps frescos, y lo quita de la
    /// activa. Devuelve los registros movidos (en su forma archivada).
    pub fn archive(&mut self, ids: &[u32], now: i64) -> Vec<Bus> {
        let mut moved = Vec::new();

        for id in ids {
            if let Some(position) = self.active.iter().position(|bus| bus.id == *id) {
                let mut bus = self.active.remove(position);
                bus.previous_status = Some(bus.status);
                bus.status = BusStatus::Archived;
                bus.archived_at = Some(now);
                bus.last_updated = now;
                self.archived.push(bus.clone());
                moved.push(bus);
            }
        }

        moved
    }

    /// Restaura los ids presentes en la colección archivada: vuelve al
    /// estado previo (Inactive si no se conservó), descarta los campos de
    /// archivo y mueve el registro de regreso a la colección activa.
    pub fn unarchive(&mut self, ids: &[u32], now: i64) -> Vec<Bus> {
        let mut moved = Vec::new();

        for id in ids {
            if let Some(position) = self.archived.iter().position(|bus| bus.id == *id) {
                let mut bus = self.archived.remove(position);
                bus.status = bus.previous_status.take().unwrap_or(BusStatus::Inactive);
                bus.archived_at = None;
                bus.last_updated = now;
                self.active.push(bus.clone());
                moved.push(bus);
            }
        }

        moved
    }

    /// Elimina permanentemente los ids presentes en la colección archivada.
    /// Irreversible; los ids que no están archivados se ignoran.
    pub fn delete_archived(&mut self, ids: &[u32]) -> Vec<Bus> {
        let mut removed = Vec::new();

        for id in ids {
            if let Some(position) = self.archived.iter().position(|bus| bus.id == *id) {
                removed.push(self.archived.remove(position));
            }
        }

        removed
    }

    /// Rollback de un archivo fallido: el registro vuelve a la colección
    /// activa exactamente como estaba antes del snapshot.
    pub fn restore_to_active(&mut self, prior: Bus) {
        self.archived.retain(|bus| bus.id != prior.id);
        self.active.retain(|bus| bus.id != prior.id);
        self.active.push(prior);
    }

    /// Rollback de una restauración o eliminación fallida: el registro
    /// vuelve a la colección archivada con sus campos de archivo intactos.
    pub fn restore_to_archived(&mut self, prior: Bus) {
        self.active.retain(|bus| bus.id != prior.id);
        self.archived.retain(|bus| bus.id != prior.id);
        self.archived.push(prior);
    }
}
