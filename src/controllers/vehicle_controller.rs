use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::{Vehicle, VehicleFilters};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.vehicles.clone(),
            customers: state.customers.clone(),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        // El propietario debe existir
        if self.customers.find_by_id(request.customer_id).await?.is_none() {
            return Err(not_found_error("Customer", &request.customer_id.to_string()));
        }

        let license_plate = request.license_plate.trim().to_uppercase();
        if self.repository.license_plate_exists(&license_plate).await? {
            return Err(conflict_error("Vehicle", "license plate", &license_plate));
        }

        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            customer_id: request.customer_id,
            vin: request.vin.to_uppercase(),
            make: request.make,
            model: request.model,
            year: request.year,
            color: request.color,
            license_plate,
            mileage: request.mileage,
            engine_type: request.engine_type,
            transmission: request.transmission,
            fuel_type: request.fuel_type,
            vehicle_type: request.vehicle_type,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let vehicle = self.repository.create(vehicle).await?;
        info!("🚗 Vehículo registrado: {} [{}]", vehicle.display_name(), vehicle.license_plate);

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle added successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list(&filters).await
    }
}
