use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{Permission, UserInfo};
use crate::models::vehicle::{Vehicle, VehicleFilters};
use crate::services::authorization_service::AuthorizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersWrite)?;
    let controller = VehicleController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersRead)?;
    let controller = VehicleController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersRead)?;
    let controller = VehicleController::new(&state);
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}
