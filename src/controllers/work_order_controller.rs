use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::api_response::ApiResponse;
use crate::dto::work_order_dto::{
    CreateWorkOrderRequest, QuoteRequest, TotalsResponse, UpdatePricingRequest,
    UpdateStatusRequest, WorkOrderResponse,
};
use crate::models::auth::UserInfo;
use crate::models::work_order::{IntakeChannel, WorkOrder, WorkOrderFilters};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::work_order_repository::WorkOrderRepository;
use crate::services::pricing_service::compute_totals;
use crate::services::work_order_service::{
    create_work_order, format_work_order_number, reprice_work_order, transition_status,
    PricingUpdate, WorkOrderIntake,
};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, WorkOrderError};

/// Check-in sin fecha: ahora + horas de mano de obra, con aritmética comprobada
fn walk_in_estimate(
    labor_hours: Decimal,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, WorkOrderError> {
    if labor_hours < Decimal::ZERO {
        return Err(WorkOrderError::validation("labor_hours", "must be zero or greater"));
    }

    let out_of_range =
        || WorkOrderError::validation("labor_hours", "estimated completion is out of range");
    let minutes = labor_hours
        .checked_mul(Decimal::from(60))
        .map(|m| m.round())
        .and_then(|m| m.to_i64())
        .ok_or_else(out_of_range)?;
    let delta = Duration::try_minutes(minutes).ok_or_else(out_of_range)?;
    now.checked_add_signed(delta).ok_or_else(out_of_range)
}

pub struct WorkOrderController {
    config: Arc<EnvironmentConfig>,
    work_orders: Arc<dyn WorkOrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl WorkOrderController {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            work_orders: state.work_orders.clone(),
            customers: state.customers.clone(),
            vehicles: state.vehicles.clone(),
        }
    }

    /// Tarifa por defecto según el canal de entrada
    fn default_labor_rate(&self, origin: &IntakeChannel) -> Decimal {
        match origin {
            IntakeChannel::WalkIn { .. } => self.config.walk_in_labor_rate,
            _ => self.config.default_labor_rate,
        }
    }

    /// La fecha estimada es obligatoria salvo en check-in
    fn resolve_estimated_completion(
        &self,
        request: &CreateWorkOrderRequest,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, AppError> {
        if let Some(estimated) = request.estimated_completion {
            return Ok(estimated);
        }

        match request.origin {
            IntakeChannel::WalkIn { .. } => {
                walk_in_estimate(request.labor_hours, now).map_err(AppError::from)
            }
            _ => Err(WorkOrderError::validation(
                "estimated_completion",
                "estimated completion is required",
            )
            .into()),
        }
    }

    pub fn quote(&self, request: QuoteRequest) -> Result<TotalsResponse, AppError> {
        let totals = compute_totals(
            request.labor_hours,
            request.labor_rate.unwrap_or(self.config.default_labor_rate),
            &request.parts,
            request.tax_rate.unwrap_or(self.config.default_tax_rate),
        )?;
        Ok(TotalsResponse::from(&totals))
    }

    pub async fn create(
        &self,
        user: &UserInfo,
        request: CreateWorkOrderRequest,
    ) -> Result<ApiResponse<WorkOrderResponse>, AppError> {
        request.validate()?;

        // Cliente y vehículo deben existir y corresponderse
        let customer = self
            .customers
            .find_by_id(request.customer_id)
            .await?
            .ok_or_else(|| not_found_error("Customer", &request.customer_id.to_string()))?;
        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;
        if vehicle.customer_id != customer.id {
            return Err(WorkOrderError::validation(
                "vehicle_id",
                format!("vehicle {} does not belong to customer {}", vehicle.id, customer.id),
            )
            .into());
        }

        let now = Utc::now();
        let estimated_completion = self.resolve_estimated_completion(&request, now)?;
        let labor_rate = request
            .labor_rate
            .unwrap_or_else(|| self.default_labor_rate(&request.origin));

        let intake = WorkOrderIntake {
            customer_id: request.customer_id,
            vehicle_id: request.vehicle_id,
            priority: request.priority,
            origin: request.origin,
            estimated_completion,
            labor_hours: request.labor_hours,
            labor_rate,
            tax_rate: request.tax_rate.unwrap_or(self.config.default_tax_rate),
            services: request.services,
            parts: request.parts,
            notes: request.notes,
            technician_id: request.technician_id,
            created_by: user.id.clone(),
        };

        let sequence = self.work_orders.next_sequence(now.year()).await?;
        let number = format_work_order_number(&self.config.work_order_prefix, now.year(), sequence);
        let work_order = create_work_order(intake, number, now)?;
        let work_order = self.work_orders.insert(work_order).await?;

        info!(
            "🧾 Orden {} creada por {} ({}) para {}",
            work_order.work_order_number(),
            user.email,
            work_order.origin.as_str(),
            vehicle.display_name()
        );

        Ok(ApiResponse::success_with_message(
            WorkOrderResponse::from(work_order),
            "Work order created successfully".to_string(),
        ))
    }

    async fn load(&self, id: Uuid) -> Result<WorkOrder, AppError> {
        self.work_orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Work order", &id.to_string()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<WorkOrderResponse, AppError> {
        Ok(WorkOrderResponse::from(self.load(id).await?))
    }

    pub async fn list(&self, filters: WorkOrderFilters) -> Result<Vec<WorkOrderResponse>, AppError> {
        let work_orders = self.work_orders.list(&filters).await?;
        Ok(work_orders.into_iter().map(WorkOrderResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<ApiResponse<WorkOrderResponse>, AppError> {
        let current = self.load(id).await?;
        let expected = request.expected_updated_at.unwrap_or(current.updated_at());

        let updated = transition_status(&current, request.status, Utc::now())?;
        let updated = self.work_orders.update(updated, expected).await?;

        info!(
            "🔄 Orden {}: {} -> {} ({})",
            updated.work_order_number(),
            current.status(),
            updated.status(),
            user.email
        );

        Ok(ApiResponse::success_with_message(
            WorkOrderResponse::from(updated),
            "Work order status updated successfully".to_string(),
        ))
    }

    pub async fn update_pricing(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdatePricingRequest,
    ) -> Result<ApiResponse<WorkOrderResponse>, AppError> {
        let current = self.load(id).await?;
        let expected = request.expected_updated_at.unwrap_or(current.updated_at());

        let update = PricingUpdate {
            labor_hours: request.labor_hours,
            labor_rate: request.labor_rate.unwrap_or(current.labor_rate()),
            tax_rate: request.tax_rate.unwrap_or(current.tax_rate()),
            parts: request.parts,
            services: request.services,
        };
        let updated = reprice_work_order(&current, update, Utc::now())?;
        let updated = self.work_orders.update(updated, expected).await?;

        info!(
            "💰 Orden {} re-cotizada por {}: total {}",
            updated.work_order_number(),
            user.email,
            updated.totals().rounded().total_amount
        );

        Ok(ApiResponse::success_with_message(
            WorkOrderResponse::from(updated),
            "Work order pricing updated successfully".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_in_estimate_adds_labor_hours() {
        let now = Utc::now();
        assert_eq!(
            walk_in_estimate(Decimal::new(25, 1), now).unwrap(),
            now + Duration::minutes(150)
        );
        assert_eq!(walk_in_estimate(Decimal::ZERO, now).unwrap(), now);
    }

    #[test]
    fn test_walk_in_estimate_out_of_range_is_a_validation_error() {
        let now = Utc::now();
        for hours in [
            Decimal::from(10_000_000_000u64),
            Decimal::from(i64::MAX),
            Decimal::MAX,
        ] {
            let err = walk_in_estimate(hours, now).unwrap_err();
            assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "labor_hours"));
        }

        let err = walk_in_estimate(Decimal::from(-1), now).unwrap_err();
        assert!(matches!(err, WorkOrderError::Validation { ref field, .. } if field == "labor_hours"));
    }
}
