//! Utilidades de validación
//!
//! Funciones helper usadas por los DTOs (`#[validate(custom = ...)]`) y por
//! el núcleo de órdenes de trabajo.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::WorkOrderError;

lazy_static! {
    // 17 caracteres, sin I, O ni Q
    static ref VIN_REGEX: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").unwrap();
    static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9 \-]{1,9}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(7..=15).contains(&clean_phone) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar VIN (ISO 3779)
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if !VIN_REGEX.is_match(&value.to_uppercase()) {
        let mut error = ValidationError::new("vin");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"17 characters, no I/O/Q".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if !PLATE_REGEX.is_match(&value.trim().to_uppercase()) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if value < &T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Variante de `validate_non_negative` con el error del dominio
pub fn ensure_non_negative(field: &str, value: Decimal) -> Result<(), WorkOrderError> {
    validate_non_negative(&value).map_err(|_| {
        WorkOrderError::validation(field, format!("must be zero or greater, got {}", value))
    })
}

/// La fecha estimada no puede quedar en el pasado
pub fn ensure_not_in_past(
    field: &str,
    value: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), WorkOrderError> {
    if value < now {
        return Err(WorkOrderError::validation(
            field,
            format!("{} is in the past", value.to_rfc3339()),
        ));
    }
    Ok(())
}
