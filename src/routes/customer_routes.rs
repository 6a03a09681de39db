use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::customer_controller::CustomerController;
use crate::dto::api_response::{ApiResponse, PaginatedResponse};
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{Permission, UserInfo};
use crate::models::customer::Customer;
use crate::services::authorization_service::AuthorizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn create_customer(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersWrite)?;
    let controller = CustomerController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<Customer>>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersRead)?;
    let controller = CustomerController::new(&state);
    let response = controller.list(query).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_customer(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersRead)?;
    let controller = CustomerController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_customer(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    AuthorizationService::require(&user, Permission::CustomersWrite)?;
    let controller = CustomerController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
