use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::controllers::request_controller::RequestController;
use crate::dto::request_dto::{
    BatchRequestStatusRequest, RequestListParams, RequestMutationResponse, RequestPageResponse,
    UpdateRequestStatusRequest,
};
use crate::dto::selection_dto::{
    SelectionResponse, TogglePageSelectionRequest, ToggleSelectionRequest,
};
use crate::models::request::ActivationRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_request_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests))
        .route("/batch-status", post(batch_update_status))
        .route("/selection", get(get_selection))
        .route("/selection", delete(clear_selection))
        .route("/selection/toggle", post(toggle_selection))
        .route("/selection/toggle-page", post(toggle_page_selection))
        .route("/detail", delete(close_detail))
        .route("/:id/status", patch(update_status))
        .route("/:id/detail", post(open_detail))
}

async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> Result<Json<RequestPageResponse>, AppError> {
    let controller = RequestController::new(state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRequestStatusRequest>,
) -> Result<Json<RequestMutationResponse>, AppError> {
    let controller = RequestController::new(state);
    let response = controller.update_status(id, request.status).await?;
    Ok(Json(response))
}

async fn batch_update_status(
    State(state): State<AppState>,
    Json(request): Json<BatchRequestStatusRequest>,
) -> Result<Json<RequestMutationResponse>, AppError> {
    let controller = RequestController::new(state);
    let response = controller
        .batch_update_status(request.ids, request.status)
        .await?;
    Ok(Json(response))
}

async fn open_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActivationRequest>, AppError> {
    let controller = RequestController::new(state);
    let request = controller.open_detail(id).await?;
    Ok(Json(request))
}

async fn close_detail(State(state): State<AppState>) -> Json<serde_json::Value> {
    let controller = RequestController::new(state);
    controller.close_detail().await;
    Json(serde_json::json!({ "success": true }))
}

async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse<String>> {
    let controller = RequestController::new(state);
    Json(SelectionResponse::new(controller.selection().await))
}

async fn toggle_selection(
    State(state): State<AppState>,
    Json(request): Json<ToggleSelectionRequest<String>>,
) -> Json<SelectionResponse<String>> {
    let controller = RequestController::new(state);
    Json(SelectionResponse::new(
        controller.toggle_selection(request.id).await,
    ))
}

async fn toggle_page_selection(
    State(state): State<AppState>,
    Json(request): Json<TogglePageSelectionRequest<String>>,
) -> Json<SelectionResponse<String>> {
    let controller = RequestController::new(state);
    Json(SelectionResponse::new(
        controller.toggle_page_selection(request.page_ids).await,
    ))
}

async fn clear_selection(State(state): State<AppState>) -> Json<SelectionResponse<String>> {
    let controller = RequestController::new(state);
    controller.clear_selection().await;
    Json(SelectionResponse::new(Vec::new()))
}
