use futures::future::join_all;
use validator::Validate;

use crate::console::mutation::MutationSnapshot;
use crate::console::pipeline::bus_page;
use crate::console::ViewMode;
use crate::dto::bus_dto::{
    BusListParams, BusPageResponse, CreateBusRequest, FleetMutationResponse,
};
use crate::models::bus::{Bus, BusStatus};
use crate::state::{now_millis, AppState};
use crate::store::FleetSnapshot;
use crate::utils::errors::AppError;
use crate::utils::validation;

const DEFAULT_PER_PAGE: usize = 10;

pub struct BusController {
    state: AppState,
}

impl BusController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Pipeline de listado sobre la colección visible. Pasar `view` en los
    /// parámetros consulta esa colección sin cambiar el modo de vista.
    pub async fn list(&self, params: BusListParams) -> Result<BusPageResponse, AppError> {
        let console = self.state.buses.read().await;
        let view = params.view.unwrap_or(console.view_mode);
        let collection = match view {
            ViewMode::Active => &console.roster.active,
            ViewMode::Archived => &console.roster.archived,
        };

        let filtered_from = collection.len();
        let page = bus_page(
            collection,
            params.search.as_deref().unwrap_or(""),
            params.sort_by.unwrap_or_default(),
            params.sort_order.unwrap_or_default(),
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        );

        Ok(BusPageResponse::from_page(page, filtered_from, view))
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Bus, AppError> {
        let console = self.state.buses.read().await;
        console
            .roster
            .find_active(id)
            .or_else(|| console.roster.find_archived(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Bus {} not found", id)))
    }

    /// Cambia la colección visible; la selección y el detalle abierto
    /// no sobreviven al cambio.
    pub async fn set_view_mode(&self, view: ViewMode) -> Result<(), AppError> {
        let mut console = self.state.buses.write().await;
        console.set_view_mode(view);
        Ok(())
    }

    pub async fn create(&self, request: CreateBusRequest) -> Result<Bus, AppError> {
        request.validate()?;
        validation::validate_capacity(request.capacity)
            .map_err(|_| AppError::BadRequest("Capacity must be between 1 and 150".to_string()))?;
        let status = BusStatus::from_operational(&request.status).ok_or_else(|| {
            AppError::BadRequest("Status must be Active, Maintenance or Inactive".to_string())
        })?;

        let now = now_millis();
        let bus = {
            let mut console = self.state.buses.write().await;

            let plate_taken = console
                .roster
                .active
                .iter()
                .chain(console.roster.archived.iter())
                .any(|bus| bus.plate_number.eq_ignore_ascii_case(&request.plate_number));
            if plate_taken {
                return Err(AppError::Conflict(
                    "Plate number is already registered".to_string(),
                ));
            }

            let bus = Bus {
                id: console.roster.next_id(),
                bus_number: request.bus_number,
                route: request.route,
                bus_company: request.bus_company,
                status,
                plate_number: request.plate_number,
                capacity: request.capacity,
                bus_attendant: request.bus_attendant,
                bus_company_email: request.bus_company_email,
                bus_company_contact: request.bus_company_contact,
                registered_destination: request.registered_destination,
                bus_photo: request.bus_photo,
                last_updated: now,
                previous_status: None,
                archived_at: None,
            };
            console.roster.add_bus(bus.clone());
            bus
        };

        if let Err(e) = self.state.bus_store.persist_bus(&bus).await {
            let mut console = self.state.buses.write().await;
            console.roster.active.retain(|b| b.id != bus.id);
            return Err(AppError::Store(e));
        }

        self.flush_roster().await;
        Ok(bus)
    }

    /// Archiva los ids dados con el protocolo optimista: mueve los
    /// registros en memoria, persiste por registro y devuelve los fallidos
    /// a su colección original.
    pub async fn archive(&self, ids: Vec<u32>) -> Result<FleetMutationResponse, AppError> {
        let now = now_millis();

        let (snapshot, moved) = {
            let mut console = self.state.buses.write().await;
            let snapshot =
                MutationSnapshot::capture(ids.iter(), |id| console.roster.find_active(*id).cloned());
            let moved = console.roster.archive(&ids, now);
            (snapshot, moved)
        };

        if moved.is_empty() {
            return Err(AppError::NotFound(
                "No matching active buses to archive".to_string(),
            ));
        }

        let results = self.persist_all(&moved).await;
        let outcome = snapshot.reconcile(results);

        {
            let mut console = self.state.buses.write().await;
            for (_, prior) in &outcome.failed {
                console.roster.restore_to_active(prior.clone());
            }
            console.selection.remove_ids(&outcome.succeeded);
            if ids.len() == 1 {
                console.close_detail_if_among(&outcome.succeeded);
            }
        }
        self.flush_roster().await;

        Ok(match outcome.error_message("bus") {
            None => FleetMutationResponse::ok(outcome.succeeded),
            Some(msg) => FleetMutationResponse::partial(outcome.succeeded, msg),
        })
    }

    /// Restaura ids archivados a la colección activa.
    pub async fn unarchive(&self, ids: Vec<u32>) -> Result<FleetMutationResponse, AppError> {
        let now = now_millis();

        let (snapshot, moved) = {
            let mut console = self.state.buses.write().await;
            let snapshot = MutationSnapshot::capture(ids.iter(), |id| {
                console.roster.find_archived(*id).cloned()
            });
            let moved = console.roster.unarchive(&ids, now);
            (snapshot, moved)
        };

        if moved.is_empty() {
            return Err(AppError::NotFound(
                "No matching archived buses to restore".to_string(),
            ));
        }

        let results = self.persist_all(&moved).await;
        let outcome = snapshot.reconcile(results);

        {
            let mut console = self.state.buses.write().await;
            for (_, prior) in &outcome.failed {
                console.roster.restore_to_archived(prior.clone());
            }
            console.selection.remove_ids(&outcome.succeeded);
            if ids.len() == 1 {
                console.close_detail_if_among(&outcome.succeeded);
            }
        }
        self.flush_roster().await;

        Ok(match outcome.error_message("bus") {
            None => FleetMutationResponse::ok(outcome.succeeded),
            Some(msg) => FleetMutationResponse::partial(outcome.succeeded, msg),
        })
    }

    /// Eliminación permanente, solo sobre la colección archivada y solo
    /// con confirmación explícita.
    pub async fn delete(
        &self,
        ids: Vec<u32>,
        confirm: bool,
    ) -> Result<FleetMutationResponse, AppError> {
        if !confirm {
            return Err(AppError::BadRequest(
                "Permanent deletion requires explicit confirmation".to_string(),
            ));
        }

        let (snapshot, removed) = {
            let mut console = self.state.buses.write().await;
            let snapshot = MutationSnapshot::capture(ids.iter(), |id| {
                console.roster.find_archived(*id).cloned()
            });
            let removed = console.roster.delete_archived(&ids);
            (snapshot, removed)
        };

        if removed.is_empty() {
            return Err(AppError::NotFound(
                "No matching archived buses to delete".to_string(),
            ));
        }

        let store = self.state.bus_store.clone();
        let results: Vec<(u32, Result<(), _>)> = join_all(removed.iter().map(|bus| {
            let store = store.clone();
            async move { (bus.id, store.remove_bus(bus.id).await) }
        }))
        .await;
        let outcome = snapshot.reconcile(results);

        {
            let mut console = self.state.buses.write().await;
            for (_, prior) in &outcome.failed {
                console.roster.restore_to_archived(prior.clone());
            }
            console.selection.remove_ids(&outcome.succeeded);
            if ids.len() == 1 {
                console.close_detail_if_among(&outcome.succeeded);
            }
        }
        self.flush_roster().await;

        Ok(match outcome.error_message("bus") {
            None => FleetMutationResponse::ok(outcome.succeeded),
            Some(msg) => FleetMutationResponse::partial(outcome.succeeded, msg),
        })
    }

    pub async fn open_detail(&self, id: u32) -> Result<Bus, AppError> {
        let mut console = self.state.buses.write().await;
        let bus = console
            .visible()
            .iter()
            .find(|bus| bus.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Bus {} not found in current view", id)))?;
        console.open_detail = Some(id);
        Ok(bus)
    }

    pub async fn close_detail(&self) {
        let mut console = self.state.buses.write().await;
        console.open_detail = None;
    }

    pub async fn toggle_selection(&self, id: u32) -> Vec<u32> {
        let mut console = self.state.buses.write().await;
        console.selection.toggle(id);
        console.selection.ids()
    }

    pub async fn toggle_page_selection(&self, page_ids: Vec<u32>) -> Vec<u32> {
        let mut console = self.state.buses.write().await;
        console.selection.toggle_page(&page_ids);
        console.selection.ids()
    }

    pub async fn selection(&self) -> Vec<u32> {
        self.state.buses.read().await.selection.ids()
    }

    pub async fn clear_selection(&self) {
        let mut console = self.state.buses.write().await;
        console.selection.clear();
    }

    /// Upsert por registro, en paralelo, conservando el orden de ids
    async fn persist_all(&self, buses: &[Bus]) -> Vec<(u32, Result<(), crate::store::StoreError>)> {
        let store = self.state.bus_store.clone();
        join_all(buses.iter().map(|bus| {
            let store = store.clone();
            async move { (bus.id, store.persist_bus(bus).await) }
        }))
        .await
    }

    /// Escritura completa de ambas colecciones. El backend local la usa
    /// como único mecanismo de persistencia; sus fallos solo se loguean.
    async fn flush_roster(&self) {
        let snapshot = {
            let console = self.state.buses.read().await;
            FleetSnapshot {
                active: console.roster.active.clone(),
                archived: console.roster.archived.clone(),
            }
        };
        if let Err(e) = self.state.bus_store.flush_fleet(&snapshot).await {
            log::error!("Fleet flush failed: {}", e);
        }
    }
}
