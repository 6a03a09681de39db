//! Núcleo de órdenes de trabajo para un taller de servicio vehicular
//!
//! Modelos, reglas de precio y ciclo de vida de las órdenes, más la API HTTP
//! que las expone.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
