//! Sistema de manejo de errores
//!
//! Este módulo define los errores de dominio de las órdenes de trabajo,
//! los errores de la aplicación y su conversión a respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::work_order::WorkOrderStatus;

/// Errores del núcleo de órdenes de trabajo
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkOrderError {
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Cannot move work order from '{from}' to '{to}'")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },
}

impl WorkOrderError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        WorkOrderError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid status transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

impl From<WorkOrderError> for AppError {
    fn from(error: WorkOrderError) -> Self {
        match error {
            WorkOrderError::Validation { field, message } => {
                AppError::InvalidField { field, message }
            }
            WorkOrderError::InvalidTransition { from, to } => {
                AppError::InvalidTransition { from, to }
            }
            WorkOrderError::NotFound { resource, id } => {
                AppError::NotFound(format!("{} with id '{}' not found", resource, id))
            }
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            details: None,
            code: code.to_string(),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Validation Error",
                        "The provided data is invalid".to_string(),
                        "VALIDATION_ERROR",
                    )
                    .with_details(json!(e)),
                )
            }

            AppError::InvalidField { field, message } => {
                tracing::warn!("⚠️ Invalid field '{}': {}", field, message);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Validation Error", message, "VALIDATION_ERROR")
                        .with_details(json!({ "field": field })),
                )
            }

            AppError::InvalidTransition { from, to } => {
                tracing::warn!("⚠️ Rejected transition {} -> {}", from, to);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new(
                        "Invalid Transition",
                        format!("Cannot move work order from '{}' to '{}'", from, to),
                        "INVALID_TRANSITION",
                    )
                    .with_details(json!({
                        "from": from,
                        "to": to,
                        "allowed": from.allowed_transitions(),
                    })),
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("🔒 Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED"),
                )
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("🔒 Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("Forbidden", msg, "FORBIDDEN"),
                )
            }

            AppError::NotFound(msg) => {
                tracing::info!("🔍 Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("⚠️ Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new("Conflict", msg, "CONFLICT"),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "An unexpected error occurred".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }

            AppError::Jwt(msg) => {
                tracing::warn!("🔒 JWT error: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("JWT Error", msg, "JWT_ERROR"),
                )
            }

            AppError::Hash(msg) => {
                tracing::error!("❌ Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Hash Error",
                        "An error occurred while processing credentials".to_string(),
                        "HASH_ERROR",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str, reason: &str) -> AppError {
    AppError::Forbidden(format!("Cannot {}: {}", operation, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_http_status() {
        let validation: AppError = WorkOrderError::validation("labor_hours", "must be >= 0").into();
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let transition: AppError = WorkOrderError::InvalidTransition {
            from: WorkOrderStatus::Completed,
            to: WorkOrderStatus::InProgress,
        }
        .into();
        assert_eq!(transition.into_response().status(), StatusCode::CONFLICT);

        let missing: AppError = WorkOrderError::NotFound {
            resource: "Customer".to_string(),
            id: "42".to_string(),
        }
        .into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_transition_message_names_both_states() {
        let error = WorkOrderError::InvalidTransition {
            from: WorkOrderStatus::Pending,
            to: WorkOrderStatus::Completed,
        };
        assert_eq!(
            error.to_string(),
            "Cannot move work order from 'pending' to 'completed'"
        );
    }
}
