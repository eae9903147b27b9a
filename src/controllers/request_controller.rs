use futures::future::join_all;

use crate::console::mutation::MutationSnapshot;
use crate::console::pipeline::pending_request_page;
use crate::dto::request_dto::{RequestListParams, RequestMutationResponse, RequestPageResponse};
use crate::models::request::{ActivationRequest, RequestStatus};
use crate::state::AppState;
use crate::utils::errors::AppError;

const DEFAULT_PER_PAGE: usize = 10;

pub struct RequestController {
    state: AppState,
}

impl RequestController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Solo las solicitudes pendientes, más recientes primero.
    pub async fn list(&self, params: RequestListParams) -> Result<RequestPageResponse, AppError> {
        let board = self.state.requests.read().await;
        let page = pending_request_page(
            &board.requests,
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        );
        Ok(RequestPageResponse::from_page(page))
    }

    /// Mutación optimista de una solicitud individual. Si la persistencia
    /// falla, el estado vuelve a su valor previo; si persiste y la
    /// solicitud estaba abierta en el detalle, el detalle se cierra.
    pub async fn update_status(
        &self,
        id: String,
        status: RequestStatus,
    ) -> Result<RequestMutationResponse, AppError> {
        let ids = vec![id.clone()];

        let snapshot = {
            let mut board = self.state.requests.write().await;
            let snapshot = MutationSnapshot::capture(ids.iter(), |id| board.status_of(id));
            if snapshot.captured_ids().is_empty() {
                return Err(AppError::NotFound(format!("Request {} not found", id)));
            }
            board.apply_status(&id, status);
            snapshot
        };

        let result = self.state.request_store.update_request_status(&id, status).await;
        let outcome = snapshot.reconcile(vec![(id.clone(), result)]);

        {
            let mut board = self.state.requests.write().await;
            for (failed_id, prior) in &outcome.failed {
                board.apply_status(failed_id, *prior);
            }
            if outcome.succeeded.contains(&id) && board.open_detail.as_deref() == Some(id.as_str())
            {
                board.open_detail = None;
            }
        }

        Ok(match outcome.error_message("request") {
            None => RequestMutationResponse::ok(outcome.succeeded),
            Some(msg) => RequestMutationResponse::partial(outcome.succeeded, msg),
        })
    }

    /// Mutación por lote con reconciliación por id: cada solicitud cuyo
    /// update remoto falla vuelve a su estado previo, el resto conserva el
    /// nuevo. La selección se limpia al terminar; el detalle abierto no se
    /// toca.
    pub async fn batch_update_status(
        &self,
        ids: Vec<String>,
        status: RequestStatus,
    ) -> Result<RequestMutationResponse, AppError> {
        let (snapshot, targets) = {
            let mut board = self.state.requests.write().await;
            let snapshot = MutationSnapshot::capture(ids.iter(), |id| board.status_of(id));
            let targets = snapshot.captured_ids();
            for id in &targets {
                board.apply_status(id, status);
            }
            (snapshot, targets)
        };

        if targets.is_empty() {
            return Err(AppError::NotFound(
                "No matching requests to update".to_string(),
            ));
        }

        let store = self.state.request_store.clone();
        let results: Vec<(String, Result<(), _>)> = join_all(targets.iter().map(|id| {
            let store = store.clone();
            let id = id.clone();
            async move {
                let result = store.update_request_status(&id, status).await;
                (id, result)
            }
        }))
        .await;
        let outcome = snapshot.reconcile(results);

        {
            let mut board = self.state.requests.write().await;
            for (failed_id, prior) in &outcome.failed {
                board.apply_status(failed_id, *prior);
            }
            board.selection.clear();
        }

        Ok(match outcome.error_message("request") {
            None => RequestMutationResponse::ok(outcome.succeeded),
            Some(msg) => RequestMutationResponse::partial(outcome.succeeded, msg),
        })
    }

    pub async fn open_detail(&self, id: String) -> Result<ActivationRequest, AppError> {
        let mut board = self.state.requests.write().await;
        let request = board
            .find(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;
        board.open_detail = Some(id);
        Ok(request)
    }

    pub async fn close_detail(&self) {
        let mut board = self.state.requests.write().await;
        board.open_detail = None;
    }

    pub async fn toggle_selection(&self, id: String) -> Vec<String> {
        let mut board = self.state.requests.write().await;
        board.selection.toggle(id);
        board.selection.ids()
    }

    pub async fn toggle_page_selection(&self, page_ids: Vec<String>) -> Vec<String> {
        let mut board = self.state.requests.write().await;
        board.selection.toggle_page(&page_ids);
        board.selection.ids()
    }

    pub async fn selection(&self) -> Vec<String> {
        self.state.requests.read().await.selection.ids()
    }

    pub async fn clear_selection(&self) {
        let mut board = self.state.requests.write().await;
        board.selection.clear();
    }
}
