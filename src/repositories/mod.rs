//! Repositorios
//!
//! Traits de almacenamiento inyectados en `AppState` y sus
//! implementaciones en memoria.

pub mod customer_repository;
pub mod inventory_repository;
pub mod vehicle_repository;
pub mod work_order_repository;
