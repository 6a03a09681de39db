use axum::{
    extract::State,
    middleware,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::auth_middleware::auth_middleware;
use crate::middleware::cors::cors_layer;
use crate::models::analytics::DashboardStats;
use crate::models::auth::{Permission, UserInfo};
use crate::services::authorization_service::AuthorizationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub mod auth_routes;
pub mod customer_routes;
pub mod inventory_routes;
pub mod vehicle_routes;
pub mod work_order_routes;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let dashboard = Router::new()
        .route("/stats", get(dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let api = Router::new()
        .nest("/auth", auth_routes::create_auth_router(&state))
        .nest("/customers", customer_routes::create_customer_router(&state))
        .nest("/vehicles", vehicle_routes::create_vehicle_router(&state))
        .nest("/inventory", inventory_routes::create_inventory_router(&state))
        .nest("/work-orders", work_order_routes::create_work_order_router(&state))
        .nest("/dashboard", dashboard);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-service-shop",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    AuthorizationService::require(&user, Permission::ReportsRead)?;
    let stats = DashboardController::new(&state).stats().await?;
    Ok(Json(ApiResponse::success(stats)))
}
