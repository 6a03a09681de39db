pub mod auth_service;
pub mod authorization_service;
pub mod dashboard_service;
pub mod inventory_service;
pub mod jwt_service;
pub mod pricing_service;
pub mod work_order_service;
