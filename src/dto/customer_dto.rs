use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::customer::{Address, CustomerType, EmergencyContact};
use crate::utils::validation::{validate_not_empty, validate_phone};

/// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate]
    pub address: Address,

    pub date_of_birth: Option<NaiveDate>,
    pub emergency_contact: Option<EmergencyContact>,

    #[serde(default)]
    pub customer_type: CustomerType,
}

/// Cambios parciales sobre un cliente; los campos ausentes no se tocan
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate]
    pub address: Option<Address>,

    pub emergency_contact: Option<EmergencyContact>,
    pub customer_type: Option<CustomerType>,
    pub is_active: Option<bool>,
}

/// Paginación del listado: `?page=1&limit=10`
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerListQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}
