//! Modelo de WorkOrder
//!
//! Este módulo contiene la entidad WorkOrder, su ciclo de estados,
//! las líneas de servicio/repuestos y el canal de entrada (intake).

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::customer::Address;

/// Estado de la orden de trabajo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    InProgress,
    WaitingParts,
    WaitingCustomer,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 6] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::WaitingParts,
        WorkOrderStatus::WaitingCustomer,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "pending",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::WaitingParts => "waiting_parts",
            WorkOrderStatus::WaitingCustomer => "waiting_customer",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// `completed` y `cancelled` no tienen salida
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }

    /// Estados alcanzables directamente desde este estado
    pub fn allowed_transitions(&self) -> &'static [WorkOrderStatus] {
        use WorkOrderStatus::*;

        match self {
            Pending => &[InProgress, Cancelled],
            InProgress => &[WaitingParts, WaitingCustomer, Completed, Cancelled],
            WaitingParts => &[InProgress, Cancelled],
            WaitingCustomer => &[InProgress, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, target: WorkOrderStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Cuenta como trabajo activo en el taller
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            WorkOrderStatus::InProgress
                | WorkOrderStatus::WaitingParts
                | WorkOrderStatus::WaitingCustomer
        )
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prioridad - solo informativa, no altera el orden de proceso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Maintenance,
    Repair,
    Diagnostic,
    Inspection,
    Warranty,
    Recall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    Engine,
    Transmission,
    Brakes,
    Suspension,
    Electrical,
    Hvac,
    Body,
    Interior,
    Filters,
    Fluids,
    Tires,
    Battery,
}

/// Servicio realizado dentro de una orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub labor_hours: Decimal,
}

/// Repuesto consumido dentro de una orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartItem {
    pub part_number: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: PartCategory,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Garantía en meses
    #[serde(default)]
    pub warranty_months: Option<u32>,
}

impl PartItem {
    pub fn line(&self) -> PartLine {
        PartLine {
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Línea mínima de repuesto para el cálculo de precios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartLine {
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// Totales derivados de una orden (sin redondear)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorkOrderTotals {
    pub parts_total: Decimal,
    pub labor_total: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Inquiry,
    Booking,
    Complaint,
    Followup,
}

/// Canal por el que entró la orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum IntakeChannel {
    /// Check-in en el centro de servicio
    WalkIn {
        service_type: String,
        #[serde(default)]
        advisor_notes: String,
    },
    CallCenter {
        call_type: CallType,
        phone: String,
        advisor_id: String,
    },
    HomeService {
        service_address: Address,
        #[serde(default)]
        engineer_id: Option<String>,
    },
}

impl IntakeChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeChannel::WalkIn { .. } => "walk_in",
            IntakeChannel::CallCenter { .. } => "call_center",
            IntakeChannel::HomeService { .. } => "home_service",
        }
    }
}

/// WorkOrder principal
///
/// El número, el estado y los totales solo se modifican a través de
/// `services::work_order_service`; fuera del crate son de solo lectura.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrder {
    pub id: Uuid,
    pub(crate) work_order_number: String,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub(crate) status: WorkOrderStatus,
    pub priority: Priority,
    pub origin: IntakeChannel,
    pub(crate) labor_hours: Decimal,
    pub(crate) labor_rate: Decimal,
    pub(crate) tax_rate: Decimal,
    pub(crate) totals: WorkOrderTotals,
    pub(crate) services: Vec<ServiceItem>,
    pub(crate) parts: Vec<PartItem>,
    pub notes: String,
    pub technician_id: Option<String>,
    pub created_by: String,
    pub estimated_completion: DateTime<Utc>,
    pub(crate) actual_completion: Option<DateTime<Utc>>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl WorkOrder {
    pub fn work_order_number(&self) -> &str {
        &self.work_order_number
    }

    pub fn status(&self) -> WorkOrderStatus {
        self.status
    }

    pub fn labor_hours(&self) -> Decimal {
        self.labor_hours
    }

    pub fn labor_rate(&self) -> Decimal {
        self.labor_rate
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn totals(&self) -> &WorkOrderTotals {
        &self.totals
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    pub fn parts(&self) -> &[PartItem] {
        &self.parts
    }

    pub fn actual_completion(&self) -> Option<DateTime<Utc>> {
        self.actual_completion
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Filtros para el listado de órdenes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkOrderFilters {
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<Priority>,
    pub customer_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
}

impl WorkOrderFilters {
    pub fn matches(&self, work_order: &WorkOrder) -> bool {
        self.status.map_or(true, |s| work_order.status == s)
            && self.priority.map_or(true, |p| work_order.priority == p)
            && self.customer_id.map_or(true, |id| work_order.customer_id == id)
            && self.vehicle_id.map_or(true, |id| work_order.vehicle_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in WorkOrderStatus::ALL {
            assert_eq!(WorkOrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(WorkOrderStatus::from_str("done"), None);
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        assert!(WorkOrderStatus::Completed.allowed_transitions().is_empty());
        assert!(WorkOrderStatus::Cancelled.allowed_transitions().is_empty());
        assert!(!WorkOrderStatus::Pending.is_terminal());
    }

    #[test]
    fn test_pending_cannot_jump_to_completed() {
        assert!(!WorkOrderStatus::Pending.can_transition_to(WorkOrderStatus::Completed));
        assert!(WorkOrderStatus::Pending.can_transition_to(WorkOrderStatus::InProgress));
        assert!(WorkOrderStatus::WaitingParts.can_transition_to(WorkOrderStatus::Cancelled));
    }

    #[test]
    fn test_intake_channel_is_tagged() {
        let channel: IntakeChannel = serde_json::from_value(serde_json::json!({
            "channel": "call_center",
            "call_type": "booking",
            "phone": "+1-555-0123",
            "advisor_id": "advisor1"
        }))
        .unwrap();

        assert_eq!(channel.as_str(), "call_center");
        assert!(matches!(
            channel,
            IntakeChannel::CallCenter { call_type: CallType::Booking, .. }
        ));
    }
}
