//! Ciclo de vida de las órdenes de trabajo
//!
//! Funciones puras: creación (intake), transiciones de estado y re-cálculo
//! de precios. No hay estado compartido; la persistencia y la verificación
//! de que cliente y vehículo existen quedan en la capa de repositorios.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::work_order::{
    IntakeChannel, PartItem, PartLine, Priority, ServiceItem, WorkOrder, WorkOrderStatus,
};
use crate::services::pricing_service::compute_totals;
use crate::utils::errors::WorkOrderError;
use crate::utils::validation::ensure_not_in_past;

/// Datos de entrada para crear una orden
#[derive(Debug, Clone)]
pub struct WorkOrderIntake {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub priority: Priority,
    pub origin: IntakeChannel,
    pub estimated_completion: DateTime<Utc>,
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub tax_rate: Decimal,
    pub services: Vec<ServiceItem>,
    pub parts: Vec<PartItem>,
    pub notes: String,
    pub technician_id: Option<String>,
    pub created_by: String,
}

/// `WO-2024-001`; secuencias de más de tres dígitos se imprimen completas
pub fn format_work_order_number(prefix: &str, year: i32, sequence: u32) -> String {
    format!("{}-{}-{:03}", prefix, year, sequence)
}

fn part_lines(parts: &[PartItem]) -> Vec<PartLine> {
    parts.iter().map(PartItem::line).collect()
}

/// Crea una orden nueva en estado `pending` con sus totales calculados
pub fn create_work_order(
    intake: WorkOrderIntake,
    work_order_number: String,
    now: DateTime<Utc>,
) -> Result<WorkOrder, WorkOrderError> {
    if intake.created_by.trim().is_empty() {
        return Err(WorkOrderError::validation("created_by", "creator is required"));
    }
    if work_order_number.trim().is_empty() {
        return Err(WorkOrderError::validation(
            "work_order_number",
            "work order number is required",
        ));
    }
    ensure_not_in_past("estimated_completion", intake.estimated_completion, now)?;

    let totals = compute_totals(
        intake.labor_hours,
        intake.labor_rate,
        &part_lines(&intake.parts),
        intake.tax_rate,
    )?;

    Ok(WorkOrder {
        id: Uuid::new_v4(),
        work_order_number,
        customer_id: intake.customer_id,
        vehicle_id: intake.vehicle_id,
        status: WorkOrderStatus::Pending,
        priority: intake.priority,
        origin: intake.origin,
        labor_hours: intake.labor_hours,
        labor_rate: intake.labor_rate,
        tax_rate: intake.tax_rate,
        totals,
        services: intake.services,
        parts: intake.parts,
        notes: intake.notes,
        technician_id: intake.technician_id,
        created_by: intake.created_by,
        estimated_completion: intake.estimated_completion,
        actual_completion: None,
        created_at: now,
        updated_at: now,
    })
}

/// Aplica una transición de estado si el grafo la permite
pub fn transition_status(
    work_order: &WorkOrder,
    target: WorkOrderStatus,
    now: DateTime<Utc>,
) -> Result<WorkOrder, WorkOrderError> {
    let current = work_order.status;
    if !current.can_transition_to(target) {
        return Err(WorkOrderError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    let mut updated = work_order.clone();
    updated.status = target;
    updated.updated_at = now;
    if target == WorkOrderStatus::Completed && updated.actual_completion.is_none() {
        updated.actual_completion = Some(now);
    }

    Ok(updated)
}

/// Nuevos datos de mano de obra y repuestos para una orden abierta
#[derive(Debug, Clone)]
pub struct PricingUpdate {
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub tax_rate: Decimal,
    pub parts: Vec<PartItem>,
    pub services: Option<Vec<ServiceItem>>,
}

/// Re-calcula los totales de una orden no terminal
pub fn reprice_work_order(
    work_order: &WorkOrder,
    update: PricingUpdate,
    now: DateTime<Utc>,
) -> Result<WorkOrder, WorkOrderError> {
    if work_order.status.is_terminal() {
        return Err(WorkOrderError::validation(
            "status",
            format!("work order is {} and can no longer be priced", work_order.status),
        ));
    }

    let totals = compute_totals(
        update.labor_hours,
        update.labor_rate,
        &part_lines(&update.parts),
        update.tax_rate,
    )?;

    let mut updated = work_order.clone();
    updated.labor_hours = update.labor_hours;
    updated.labor_rate = update.labor_rate;
    updated.tax_rate = update.tax_rate;
    updated.parts = update.parts;
    if let Some(services) = update.services {
        updated.services = services;
    }
    updated.totals = totals;
    updated.updated_at = now;

    Ok(updated)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::work_order::{PartCategory, ServiceCategory};
    use chrono::Duration;

    pub(crate) fn sample_intake(now: DateTime<Utc>) -> WorkOrderIntake {
        WorkOrderIntake {
            customer_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            priority: Priority::High,
            origin: IntakeChannel::WalkIn {
                service_type: "maintenance".to_string(),
                advisor_notes: String::new(),
            },
            estimated_completion: now + Duration::days(2),
            labor_hours: Decimal::new(25, 1),
            labor_rate: Decimal::from(85),
            tax_rate: Decimal::new(8, 2),
            services: vec![ServiceItem {
                name: "Oil change".to_string(),
                description: String::new(),
                category: ServiceCategory::Maintenance,
                labor_hours: Decimal::ONE,
            }],
            parts: vec![PartItem {
                part_number: "FIL-001".to_string(),
                name: "Engine Oil Filter".to_string(),
                description: String::new(),
                category: PartCategory::Filters,
                quantity: Decimal::from(2),
                unit_price: Decimal::new(1299, 2),
                supplier: Some("AutoParts Inc".to_string()),
                warranty_months: Some(6),
            }],
            notes: "Oil change and brake inspection".to_string(),
            technician_id: None,
            created_by: "user1".to_string(),
        }
    }

    fn new_order(now: DateTime<Utc>) -> WorkOrder {
        create_work_order(sample_intake(now), "WO-2024-001".to_string(), now).unwrap()
    }

    #[test]
    fn test_format_work_order_number() {
        assert_eq!(format_work_order_number("WO", 2024, 1), "WO-2024-001");
        assert_eq!(format_work_order_number("WO", 2024, 42), "WO-2024-042");
        assert_eq!(format_work_order_number("WO", 2025, 1000), "WO-2025-1000");
    }

    #[test]
    fn test_create_work_order_starts_pending_with_totals() {
        let now = Utc::now();
        let order = new_order(now);

        assert_eq!(order.status(), WorkOrderStatus::Pending);
        assert_eq!(order.work_order_number(), "WO-2024-001");
        assert_eq!(order.created_at(), now);
        assert_eq!(order.updated_at(), now);
        assert!(order.actual_completion().is_none());
        assert_eq!(order.totals().rounded().total_amount, Decimal::new(25756, 2));
    }

    #[test]
    fn test_create_rejects_negative_labor_hours() {
        let now = Utc::now();
        let mut intake = sample_intake(now);
        intake.labor_hours = Decimal::from(-1);

        let err = create_work_order(intake, "WO-2024-002".to_string(), now).unwrap_err();
        assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "labor_hours"));
    }

    #[test]
    fn test_create_rejects_past_estimate_and_missing_creator() {
        let now = Utc::now();
        let mut intake = sample_intake(now);
        intake.estimated_completion = now - Duration::hours(1);
        let err = create_work_order(intake, "WO-2024-003".to_string(), now).unwrap_err();
        assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "estimated_completion"));

        let mut intake = sample_intake(now);
        intake.created_by = "  ".to_string();
        let err = create_work_order(intake, "WO-2024-004".to_string(), now).unwrap_err();
        assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "created_by"));
    }

    #[test]
    fn test_happy_path_through_waiting_states() {
        let start = Utc::now();
        let order = new_order(start);

        let later = start + Duration::hours(1);
        let order = transition_status(&order, WorkOrderStatus::InProgress, later).unwrap();
        assert_eq!(order.updated_at(), later);

        let order = transition_status(&order, WorkOrderStatus::WaitingParts, later).unwrap();
        let order = transition_status(&order, WorkOrderStatus::InProgress, later).unwrap();
        let order = transition_status(&order, WorkOrderStatus::WaitingCustomer, later).unwrap();
        let order = transition_status(&order, WorkOrderStatus::InProgress, later).unwrap();

        let done_at = start + Duration::hours(5);
        let order = transition_status(&order, WorkOrderStatus::Completed, done_at).unwrap();
        assert_eq!(order.status(), WorkOrderStatus::Completed);
        assert_eq!(order.actual_completion(), Some(done_at));
        assert_eq!(order.work_order_number(), "WO-2024-001");
    }

    #[test]
    fn test_pending_to_completed_is_rejected() {
        let now = Utc::now();
        let order = new_order(now);

        let err = transition_status(&order, WorkOrderStatus::Completed, now).unwrap_err();
        assert_eq!(
            err,
            WorkOrderError::InvalidTransition {
                from: WorkOrderStatus::Pending,
                to: WorkOrderStatus::Completed,
            }
        );
    }

    #[test]
    fn test_terminal_states_reject_every_target() {
        let now = Utc::now();
        let cancelled = transition_status(&new_order(now), WorkOrderStatus::Cancelled, now).unwrap();

        let in_progress = transition_status(&new_order(now), WorkOrderStatus::InProgress, now).unwrap();
        let completed = transition_status(&in_progress, WorkOrderStatus::Completed, now).unwrap();

        for terminal in [cancelled, completed] {
            for target in WorkOrderStatus::ALL {
                assert!(transition_status(&terminal, target, now).is_err());
            }
        }
    }

    #[test]
    fn test_only_adjacent_transitions_are_accepted() {
        let now = Utc::now();
        let base = new_order(now);

        for from in WorkOrderStatus::ALL {
            let mut order = base.clone();
            order.status = from;
            for to in WorkOrderStatus::ALL {
                let result = transition_status(&order, to, now);
                assert_eq!(result.is_ok(), from.allowed_transitions().contains(&to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_reprice_updates_totals_and_rejects_terminal() {
        let now = Utc::now();
        let order = new_order(now);
        let later = now + Duration::minutes(30);

        let repriced = reprice_work_order(
            &order,
            PricingUpdate {
                labor_hours: Decimal::from(3),
                labor_rate: Decimal::from(85),
                tax_rate: Decimal::new(8, 2),
                parts: vec![],
                services: None,
            },
            later,
        )
        .unwrap();
        assert_eq!(repriced.totals().labor_total, Decimal::from(255));
        assert_eq!(repriced.totals().parts_total, Decimal::ZERO);
        assert_eq!(repriced.services().len(), 1);
        assert_eq!(repriced.updated_at(), later);

        let cancelled = transition_status(&order, WorkOrderStatus::Cancelled, now).unwrap();
        let err = reprice_work_order(
            &cancelled,
            PricingUpdate {
                labor_hours: Decimal::ONE,
                labor_rate: Decimal::ONE,
                tax_rate: Decimal::ZERO,
                parts: vec![],
                services: None,
            },
            later,
        )
        .unwrap_err();
        assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "status"));
    }
}
