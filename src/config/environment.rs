//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y las tarifas por
//! defecto del taller. Las variables ausentes toman su valor por defecto;
//! las mal formadas producen un `ConfigError`.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub cors_origins: Vec<String>,
    /// Contraseña de los usuarios de demostración
    pub seed_user_password: String,
    pub bcrypt_cost: u32,
    // Tarifas del taller
    pub work_order_prefix: String,
    pub default_labor_rate: Decimal,
    pub walk_in_labor_rate: Decimal,
    pub default_tax_rate: Decimal,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: "dev-secret-change-in-production".to_string(),
            jwt_expiration_hours: 24,
            cors_origins: Vec::new(),
            seed_user_password: "password123".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            work_order_prefix: "WO".to_string(),
            default_labor_rate: Decimal::from(85),
            walk_in_labor_rate: Decimal::from(75),
            default_tax_rate: Decimal::new(8, 2),
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", defaults.jwt_expiration_hours)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            seed_user_password: env::var("SEED_USER_PASSWORD")
                .unwrap_or(defaults.seed_user_password),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            work_order_prefix: env::var("WORK_ORDER_PREFIX").unwrap_or(defaults.work_order_prefix),
            default_labor_rate: parse_var("DEFAULT_LABOR_RATE", defaults.default_labor_rate)?,
            walk_in_labor_rate: parse_var("WALK_IN_LABOR_RATE", defaults.walk_in_labor_rate)?,
            default_tax_rate: parse_var("DEFAULT_TAX_RATE", defaults.default_tax_rate)?,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
