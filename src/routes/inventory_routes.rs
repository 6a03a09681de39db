use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::inventory_controller::InventoryController;
use crate::dto::api_response::ApiResponse;
use crate::dto::inventory_dto::{CreateInventoryItemRequest, UpdateStockRequest};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{Permission, UserInfo};
use crate::models::inventory::{InventoryFilters, InventoryItem};
use crate::services::authorization_service::AuthorizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inventory_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_item))
        .route("/", get(list_items))
        .route("/:id", get(get_item))
        .route("/:id/stock", put(update_stock))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateInventoryItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    AuthorizationService::require(&user, Permission::InventoryWrite)?;
    let controller = InventoryController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_items(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Query(filters): Query<InventoryFilters>,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, AppError> {
    AuthorizationService::require(&user, Permission::InventoryRead)?;
    let controller = InventoryController::new(&state);
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_item(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    AuthorizationService::require(&user, Permission::InventoryRead)?;
    let controller = InventoryController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_stock(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStockRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    AuthorizationService::require(&user, Permission::InventoryWrite)?;
    let controller = InventoryController::new(&state);
    let response = controller.update_stock(&user, id, request).await?;
    Ok(Json(response))
}
