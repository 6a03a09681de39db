//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los repositorios se inyectan como traits.

use std::sync::Arc;

use chrono::Utc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::customer_repository::{CustomerRepository, InMemoryCustomerRepository};
use crate::repositories::inventory_repository::{
    InMemoryInventoryRepository, InventoryRepository,
};
use crate::repositories::vehicle_repository::{InMemoryVehicleRepository, VehicleRepository};
use crate::repositories::work_order_repository::{
    InMemoryWorkOrderRepository, WorkOrderRepository,
};
use crate::services::auth_service::AuthService;
use crate::services::jwt_service::{JwtConfig, JwtService};
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub auth: Arc<AuthService>,
    pub work_orders: Arc<dyn WorkOrderRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        auth: AuthService,
        work_orders: Arc<dyn WorkOrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            work_orders,
            customers,
            vehicles,
            inventory,
        }
    }

    /// Estado con repositorios en memoria, el personal y el almacén de demostración
    pub fn in_memory(config: EnvironmentConfig) -> Result<Self, AppError> {
        let jwt = JwtService::new(JwtConfig::new(
            config.jwt_secret.clone(),
            config.jwt_expiration_hours,
        ));
        let auth = AuthService::with_seed_users(jwt, &config.seed_user_password, config.bcrypt_cost)?;

        Ok(Self::new(
            config,
            auth,
            Arc::new(InMemoryWorkOrderRepository::new()),
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryVehicleRepository::new()),
            Arc::new(InMemoryInventoryRepository::with_seed_items(Utc::now())),
        ))
    }
}
