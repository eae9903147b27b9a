use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::bus_controller::BusController;
use crate::dto::bus_dto::{
    BusBatchRequest, BusListParams, BusPageResponse, CreateBusRequest, CreateBusResponse,
    DeleteBusesRequest, FleetMutationResponse, SetViewRequest,
};
use crate::dto::selection_dto::{
    SelectionResponse, TogglePageSelectionRequest, ToggleSelectionRequest,
};
use crate::models::bus::Bus;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bus_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_buses))
        .route("/", post(create_bus))
        .route("/view", put(set_view_mode))
        .route("/archive", post(archive_buses))
        .route("/unarchive", post(unarchive_buses))
        .route("/delete", post(delete_buses))
        .route("/selection", get(get_selection))
        .route("/selection", delete(clear_selection))
        .route("/selection/toggle", post(toggle_selection))
        .route("/selection/toggle-page", post(toggle_page_selection))
        .route("/detail", delete(close_detail))
        .route("/:id", get(get_bus))
        .route("/:id/detail", post(open_detail))
}

async fn list_buses(
    State(state): State<AppState>,
    Query(params): Query<BusListParams>,
) -> Result<Json<BusPageResponse>, AppError> {
    let controller = BusController::new(state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_bus(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Bus>, AppError> {
    let controller = BusController::new(state);
    let bus = controller.get_by_id(id).await?;
    Ok(Json(bus))
}

async fn create_bus(
    State(state): State<AppState>,
    Json(request): Json<CreateBusRequest>,
) -> Result<Json<CreateBusResponse>, AppError> {
    let controller = BusController::new(state);
    let bus = controller.create(request).await?;
    Ok(Json(CreateBusResponse::registered(bus)))
}

async fn set_view_mode(
    State(state): State<AppState>,
    Json(request): Json<SetViewRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BusController::new(state);
    controller.set_view_mode(request.view).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn archive_buses(
    State(state): State<AppState>,
    Json(request): Json<BusBatchRequest>,
) -> Result<Json<FleetMutationResponse>, AppError> {
    let controller = BusController::new(state);
    let response = controller.archive(request.ids).await?;
    Ok(Json(response))
}

async fn unarchive_buses(
    State(state): State<AppState>,
    Json(request): Json<BusBatchRequest>,
) -> Result<Json<FleetMutationResponse>, AppError> {
    let controller = BusController::new(state);
    let response = controller.unarchive(request.ids).await?;
    Ok(Json(response))
}

async fn delete_buses(
    State(state): State<AppState>,
    Json(request): Json<DeleteBusesRequest>,
) -> Result<Json<FleetMutationResponse>, AppError> {
    let controller = BusController::new(state);
    let response = controller.delete(request.ids, request.confirm).await?;
    Ok(Json(response))
}

async fn open_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Bus>, AppError> {
    let controller = BusController::new(state);
    let bus = controller.open_detail(id).await?;
    Ok(Json(bus))
}

async fn close_detail(State(state): State<AppState>) -> Json<serde_json::Value> {
    let controller = BusController::new(state);
    controller.close_detail().await;
    Json(serde_json::json!({ "success": true }))
}

async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse<u32>> {
    let controller = BusController::new(state);
    Json(SelectionResponse::new(controller.selection().await))
}

async fn toggle_selection(
    State(state): State<AppState>,
    Json(request): Json<ToggleSelectionRequest<u32>>,
) -> Json<SelectionResponse<u32>> {
    let controller = BusController::new(state);
    Json(SelectionResponse::new(
        controller.toggle_selection(request.id).await,
    ))
}

async fn toggle_page_selection(
    State(state): State<AppState>,
    Json(request): Json<TogglePageSelectionRequest<u32>>,
) -> Json<SelectionResponse<u32>> {
    let controller = BusController::new(state);
    Json(SelectionResponse::new(
        controller.toggle_page_selection(request.page_ids).await,
    ))
}

async fn clear_selection(State(state): State<AppState>) -> Json<SelectionResponse<u32>> {
    let controller = BusController::new(state);
    controller.clear_selection().await;
    Json(SelectionResponse::new(Vec::new()))
}
