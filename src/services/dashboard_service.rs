//! Estadísticas del dashboard calculadas a partir de las órdenes

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::models::analytics::DashboardStats;
use crate::models::inventory::InventoryItem;
use crate::models::work_order::{WorkOrder, WorkOrderStatus};
use crate::services::inventory_service::inventory_summary;
use crate::utils::errors::AppError;
use crate::utils::money::round_money;

fn add_money(acc: Decimal, value: Decimal, field: &str) -> Result<Decimal, AppError> {
    acc.checked_add(value)
        .ok_or_else(|| AppError::Internal(format!("{} exceeds the supported range", field)))
}

pub fn compute_dashboard_stats(
    work_orders: &[WorkOrder],
    total_customers: usize,
    inventory: &[InventoryItem],
    now: DateTime<Utc>,
) -> Result<DashboardStats, AppError> {
    let mut stats = DashboardStats {
        total_customers,
        ..Default::default()
    };
    let mut vehicles_in_service = HashSet::new();
    let mut job_seconds: i64 = 0;

    for work_order in work_orders {
        match work_order.status() {
            WorkOrderStatus::Pending => stats.pending_work_orders += 1,
            WorkOrderStatus::Cancelled => stats.cancelled_work_orders += 1,
            WorkOrderStatus::Completed => {
                stats.completed_work_orders += 1;
                let total = work_order.totals().total_amount;
                stats.total_revenue = add_money(stats.total_revenue, total, "total_revenue")?;

                if let Some(done) = work_order.actual_completion() {
                    if done.year() == now.year() && done.month() == now.month() {
                        stats.monthly_revenue =
                            add_money(stats.monthly_revenue, total, "monthly_revenue")?;
                    }
                    let seconds = (done - work_order.created_at()).num_seconds().max(0);
                    job_seconds = job_seconds.checked_add(seconds).ok_or_else(|| {
                        AppError::Internal("job time exceeds the supported range".to_string())
                    })?;
                }
            }
            status if status.is_active() => {
                stats.active_work_orders += 1;
                vehicles_in_service.insert(work_order.vehicle_id);
            }
            _ => {}
        }
    }

    let (inventory_value, low_stock_items) =
        inventory_summary(inventory).map_err(|e| AppError::Internal(e.to_string()))?;

    stats.total_revenue = round_money(stats.total_revenue);
    stats.monthly_revenue = round_money(stats.monthly_revenue);
    stats.inventory_value = round_money(inventory_value);
    stats.low_stock_items = low_stock_items;
    stats.vehicles_in_service = vehicles_in_service.len();
    if stats.completed_work_orders > 0 {
        let hours = Decimal::from(job_seconds)
            / Decimal::from(3600)
            / Decimal::from(stats.completed_work_orders as u64);
        stats.average_job_hours = Some(round_money(hours));
    }

    Ok(stats)
}
