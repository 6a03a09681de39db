//! Estadísticas del dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resumen del taller calculado a partir de las órdenes y el inventario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub active_work_orders: usize,
    pub pending_work_orders: usize,
    pub completed_work_orders: usize,
    pub cancelled_work_orders: usize,
    /// Suma de `total_amount` de las órdenes completadas
    pub total_revenue: Decimal,
    pub monthly_revenue: Decimal,
    /// Horas promedio entre creación y cierre; `None` sin órdenes completadas
    pub average_job_hours: Option<Decimal>,
    pub vehicles_in_service: usize,
    /// Valor en almacén de los repuestos activos
    pub inventory_value: Decimal,
    pub low_stock_items: usize,
}
