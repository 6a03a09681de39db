use std::collections::HashSet;

use crate::models::auth::{Permission, UserInfo, UserRole};
use crate::utils::errors::{forbidden_error, AppError};

/// Servicio de autorización: rol -> conjunto de permisos
pub struct AuthorizationService;

impl AuthorizationService {
    /// Obtiene los permisos disponibles para un rol
    pub fn permissions_for_role(role: &UserRole) -> HashSet<Permission> {
        use Permission::*;

        match role {
            UserRole::Admin => Permission::ALL.into_iter().collect(),
            UserRole::Manager => [
                WorkOrdersRead,
                WorkOrdersWrite,
                WorkOrdersUpdate,
                CustomersRead,
                CustomersWrite,
                ReportsRead,
            ]
            .into_iter()
            .collect(),
            UserRole::Advisor => [CustomersRead, CustomersWrite, WorkOrdersRead, WorkOrdersWrite]
                .into_iter()
                .collect(),
            UserRole::Engineer => [WorkOrdersRead, WorkOrdersUpdate, InventoryRead]
                .into_iter()
                .collect(),
            UserRole::Receptionist => [CustomersRead, CustomersWrite, WorkOrdersRead]
                .into_iter()
                .collect(),
        }
    }

    /// Verifica si un usuario tiene un permiso específico
    pub fn has_permission(user_info: &UserInfo, permission: Permission) -> bool {
        user_info.permissions.contains(&permission)
    }

    pub fn require(user_info: &UserInfo, permission: Permission) -> Result<(), AppError> {
        if Self::has_permission(user_info, permission) {
            Ok(())
        } else {
            Err(forbidden_error(
                permission.as_str(),
                &format!("role '{}' lacks this permission", user_info.role.as_str()),
            ))
        }
    }
}
