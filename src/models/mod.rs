//! Modelos del sistema
//!
//! Este módulo contiene las entidades del taller: clientes, vehículos,
//! órdenes de trabajo, inventario, usuarios y estadísticas.

pub mod analytics;
pub mod auth;
pub mod customer;
pub mod inventory;
pub mod vehicle;
pub mod work_order;
