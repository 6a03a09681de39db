use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleFilters};
use crate::utils::errors::{conflict_error, AppError};

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError>;

    async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError>;

    async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError>;
}

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<HashMap<Uuid, Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;

        if vehicles.values().any(|v| v.vin == vehicle.vin) {
            return Err(conflict_error("Vehicle", "vin", &vehicle.vin));
        }

        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        Ok(self.vehicles.read().await.get(&id).cloned())
    }

    async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles: Vec<Vehicle> = self
            .vehicles
            .read()
            .await
            .values()
            .filter(|v| filters.matches(v))
            .cloned()
            .collect();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(vehicles)
    }

    async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        Ok(self
            .vehicles
            .read()
            .await
            .values()
            .any(|v| v.license_plate.eq_ignore_ascii_case(license_plate)))
    }
}
