use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::work_order::{
    IntakeChannel, PartItem, PartLine, Priority, ServiceItem, WorkOrder, WorkOrderStatus,
    WorkOrderTotals,
};

/// Request para cotizar sin crear la orden
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub labor_hours: Decimal,
    pub labor_rate: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub parts: Vec<PartLine>,
}

/// Request para crear una orden de trabajo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkOrderRequest {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    #[serde(default)]
    pub priority: Priority,
    pub origin: IntakeChannel,
    /// Obligatoria salvo en check-in, donde se deriva de las horas estimadas
    pub estimated_completion: Option<DateTime<Utc>>,
    pub labor_hours: Decimal,
    pub labor_rate: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(default)]
    pub parts: Vec<PartItem>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
    #[validate(length(min = 1, max = 64))]
    pub technician_id: Option<String>,
}

/// Request para cambiar el estado
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: WorkOrderStatus,
    /// `updated_at` que vio el cliente; si falta se usa el leído por el servidor
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Request para re-cotizar mano de obra y repuestos
#[derive(Debug, Deserialize)]
pub struct UpdatePricingRequest {
    pub labor_hours: Decimal,
    pub labor_rate: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub parts: Vec<PartItem>,
    pub services: Option<Vec<ServiceItem>>,
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Totales redondeados a 2 decimales
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TotalsResponse {
    pub parts_total: Decimal,
    pub labor_total: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

impl From<&WorkOrderTotals> for TotalsResponse {
    fn from(totals: &WorkOrderTotals) -> Self {
        let rounded = totals.rounded();
        Self {
            parts_total: rounded.parts_total,
            labor_total: rounded.labor_total,
            tax_amount: rounded.tax_amount,
            total_amount: rounded.total_amount,
        }
    }
}

/// Response de orden de trabajo para la API
#[derive(Debug, Serialize)]
pub struct WorkOrderResponse {
    pub id: Uuid,
    pub work_order_number: String,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub status: WorkOrderStatus,
    pub allowed_transitions: Vec<WorkOrderStatus>,
    pub priority: Priority,
    pub origin: IntakeChannel,
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub tax_rate: Decimal,
    #[serde(flatten)]
    pub totals: TotalsResponse,
    pub services: Vec<ServiceItem>,
    pub parts: Vec<PartItem>,
    pub notes: String,
    pub technician_id: Option<String>,
    pub created_by: String,
    pub estimated_completion: DateTime<Utc>,
    pub actual_completion: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkOrder> for WorkOrderResponse {
    fn from(work_order: WorkOrder) -> Self {
        Self {
            id: work_order.id,
            totals: TotalsResponse::from(work_order.totals()),
            allowed_transitions: work_order.status().allowed_transitions().to_vec(),
            work_order_number: work_order.work_order_number().to_string(),
            status: work_order.status(),
            labor_hours: work_order.labor_hours(),
            labor_rate: work_order.labor_rate(),
            tax_rate: work_order.tax_rate(),
            services: work_order.services().to_vec(),
            parts: work_order.parts().to_vec(),
            actual_completion: work_order.actual_completion(),
            created_at: work_order.created_at(),
            updated_at: work_order.updated_at(),
            customer_id: work_order.customer_id,
            vehicle_id: work_order.vehicle_id,
            priority: work_order.priority,
            origin: work_order.origin,
            notes: work_order.notes,
            technician_id: work_order.technician_id,
            created_by: work_order.created_by,
            estimated_completion: work_order.estimated_completion,
        }
    }
}
