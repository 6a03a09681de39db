use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::work_order_controller::WorkOrderController;
use crate::dto::api_response::ApiResponse;
use crate::dto::work_order_dto::{
    CreateWorkOrderRequest, QuoteRequest, TotalsResponse, UpdatePricingRequest,
    UpdateStatusRequest, WorkOrderResponse,
};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{Permission, UserInfo};
use crate::models::work_order::WorkOrderFilters;
use crate::services::authorization_service::AuthorizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_work_order_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_work_order))
        .route("/", get(list_work_orders))
        .route("/quote", post(quote))
        .route("/:id", get(get_work_order))
        .route("/:id/status", put(update_status))
        .route("/:id/pricing", put(update_pricing))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn quote(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<TotalsResponse>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersRead)?;
    let controller = WorkOrderController::new(&state);
    let totals = controller.quote(request)?;
    Ok(Json(ApiResponse::success(totals)))
}

async fn create_work_order(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateWorkOrderRequest>,
) -> Result<Json<ApiResponse<WorkOrderResponse>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersWrite)?;
    let controller = WorkOrderController::new(&state);
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_work_orders(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Query(filters): Query<WorkOrderFilters>,
) -> Result<Json<ApiResponse<Vec<WorkOrderResponse>>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersRead)?;
    let controller = WorkOrderController::new(&state);
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_work_order(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WorkOrderResponse>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersRead)?;
    let controller = WorkOrderController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_status(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<WorkOrderResponse>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersUpdate)?;
    let controller = WorkOrderController::new(&state);
    let response = controller.update_status(&user, id, request).await?;
    Ok(Json(response))
}

async fn update_pricing(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePricingRequest>,
) -> Result<Json<ApiResponse<WorkOrderResponse>>, AppError> {
    AuthorizationService::require(&user, Permission::WorkOrdersWrite)?;
    let controller = WorkOrderController::new(&state);
    let response = controller.update_pricing(&user, id, request).await?;
    Ok(Json(response))
}
