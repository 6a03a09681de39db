//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums asociados.
//! Cada vehículo pertenece a un cliente (`customer_id`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
    Cvt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Suv,
    Motorcycle,
    Commercial,
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub license_plate: String,
    pub mileage: u32,
    pub engine_type: Option<String>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub vehicle_type: VehicleType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// "2020 Honda Civic"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleFilters {
    pub customer_id: Option<Uuid>,
    pub fuel_type: Option<FuelType>,
    pub vehicle_type: Option<VehicleType>,
}

impl VehicleFilters {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.customer_id.map_or(true, |id| vehicle.customer_id == id)
            && self.fuel_type.map_or(true, |f| vehicle.fuel_type == f)
            && self.vehicle_type.map_or(true, |t| vehicle.vehicle_type == t)
    }
}
