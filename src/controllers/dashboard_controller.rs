use chrono::Utc;

use crate::models::analytics::DashboardStats;
use crate::models::inventory::InventoryFilters;
use crate::models::work_order::WorkOrderFilters;
use crate::services::dashboard_service::compute_dashboard_stats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct DashboardController<'a> {
    state: &'a AppState,
}

impl<'a> DashboardController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let work_orders = self.state.work_orders.list(&WorkOrderFilters::default()).await?;
        let total_customers = self.state.customers.count().await?;
        let inventory = self.state.inventory.list(&InventoryFilters::default()).await?;
        compute_dashboard_stats(&work_orders, total_customers, &inventory, Utc::now())
    }
}
