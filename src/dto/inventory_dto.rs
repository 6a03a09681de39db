use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::work_order::PartCategory;
use crate::utils::validation::{validate_non_negative, validate_not_empty};

/// Request para dar de alta un repuesto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 50), custom = "validate_not_empty")]
    pub part_number: String,

    #[validate(length(min = 1, max = 200), custom = "validate_not_empty")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,

    pub category: PartCategory,

    #[serde(default)]
    pub current_stock: u32,
    #[serde(default)]
    pub minimum_stock: u32,
    #[validate(range(min = 1))]
    pub maximum_stock: u32,

    #[validate(custom = "validate_non_negative")]
    pub unit_price: Decimal,

    #[validate(length(min = 1, max = 100))]
    pub supplier: String,

    #[validate(length(min = 1, max = 20))]
    pub location: String,

    pub bin_number: Option<String>,
}

/// Nuevo stock absoluto de un repuesto
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStockRequest {
    #[validate(range(min = 0))]
    pub quantity: i64,
}
