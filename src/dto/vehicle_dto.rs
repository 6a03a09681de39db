use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{FuelType, Transmission, VehicleType};
use crate::utils::validation::{validate_license_plate, validate_vin};

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub customer_id: Uuid,

    #[validate(custom = "validate_vin")]
    pub vin: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,

    #[serde(default)]
    pub mileage: u32,

    pub engine_type: Option<String>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub vehicle_type: VehicleType,
}
