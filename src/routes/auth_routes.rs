use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::dto::api_response::ApiResponse;
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{LoginRequest, LoginResponse, UserInfo};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().route("/login", post(login)).merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let response = state.auth.authenticate(&request)?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Login successful".to_string(),
    )))
}

async fn me(Extension(user): Extension<UserInfo>) -> Json<ApiResponse<UserInfo>> {
    Json(ApiResponse::success(user))
}
