use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Advisor,
    Engineer,
    Receptionist,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Advisor => "advisor",
            UserRole::Engineer => "engineer",
            UserRole::Receptionist => "receptionist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "advisor" => Some(UserRole::Advisor),
            "engineer" => Some(UserRole::Engineer),
            "receptionist" => Some(UserRole::Receptionist),
            _ => None,
        }
    }
}

/// Permisos `<recurso>:<acción>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "workorders:read")]
    WorkOrdersRead,
    #[serde(rename = "workorders:write")]
    WorkOrdersWrite,
    #[serde(rename = "workorders:update")]
    WorkOrdersUpdate,
    #[serde(rename = "customers:read")]
    CustomersRead,
    #[serde(rename = "customers:write")]
    CustomersWrite,
    #[serde(rename = "inventory:read")]
    InventoryRead,
    #[serde(rename = "inventory:write")]
    InventoryWrite,
    #[serde(rename = "reports:read")]
    ReportsRead,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::WorkOrdersRead,
        Permission::WorkOrdersWrite,
        Permission::WorkOrdersUpdate,
        Permission::CustomersRead,
        Permission::CustomersWrite,
        Permission::InventoryRead,
        Permission::InventoryWrite,
        Permission::ReportsRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::WorkOrdersRead => "workorders:read",
            Permission::WorkOrdersWrite => "workorders:write",
            Permission::WorkOrdersUpdate => "workorders:update",
            Permission::CustomersRead => "customers:read",
            Permission::CustomersWrite => "customers:write",
            Permission::InventoryRead => "inventory:read",
            Permission::InventoryWrite => "inventory:write",
            Permission::ReportsRead => "reports:read",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// Información del usuario autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub permissions: HashSet<Permission>,
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Request de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_info: UserInfo,
    pub expires_at: DateTime<Utc>,
}
