//! Configuración del proyecto
//!
//! Variables de entorno y tarifas por defecto del taller.

pub mod environment;

pub use environment::*;
