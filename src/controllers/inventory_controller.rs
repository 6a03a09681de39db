use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::inventory_dto::{CreateInventoryItemRequest, UpdateStockRequest};
use crate::models::auth::UserInfo;
use crate::models::inventory::{InventoryFilters, InventoryItem};
use crate::repositories::inventory_repository::InventoryRepository;
use crate::services::inventory_service::adjust_stock;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, WorkOrderError};

pub struct InventoryController {
    repository: Arc<dyn InventoryRepository>,
}

impl InventoryController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.inventory.clone(),
        }
    }

    pub async fn create(
        &self,
        request: CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;

        if request.minimum_stock > request.maximum_stock {
            return Err(WorkOrderError::validation(
                "minimum_stock",
                "must not exceed maximum stock",
            )
            .into());
        }
        if request.current_stock > request.maximum_stock {
            return Err(WorkOrderError::validation(
                "current_stock",
                "must not exceed maximum stock",
            )
            .into());
        }

        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            part_number: request.part_number.trim().to_uppercase(),
            name: request.name.trim().to_string(),
            description: request.description,
            category: request.category,
            current_stock: request.current_stock,
            minimum_stock: request.minimum_stock,
            maximum_stock: request.maximum_stock,
            unit_price: request.unit_price,
            supplier: request.supplier,
            location: request.location,
            bin_number: request.bin_number,
            last_restocked: now,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let item = self.repository.create(item).await?;
        info!("📦 Repuesto registrado: {} ({})", item.part_number, item.name);

        Ok(ApiResponse::success_with_message(
            item,
            "Inventory item created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<InventoryItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Inventory item", &id.to_string()))
    }

    pub async fn list(&self, filters: InventoryFilters) -> Result<Vec<InventoryItem>, AppError> {
        self.repository.list(&filters).await
    }

    pub async fn update_stock(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateStockRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;
        let quantity = u32::try_from(request.quantity)
            .map_err(|_| WorkOrderError::validation("quantity", "quantity is too large"))?;

        let current = self.get_by_id(id).await?;
        let updated = adjust_stock(&current, quantity, Utc::now())?;
        let updated = self.repository.update(updated).await?;

        info!(
            "📦 Stock de {}: {} -> {} ({})",
            updated.part_number, current.current_stock, updated.current_stock, user.email
        );
        if updated.is_low_stock() {
            warn!(
                "⚠️ {} bajo mínimo: {} < {}",
                updated.part_number, updated.current_stock, updated.minimum_stock
            );
        }

        Ok(ApiResponse::success_with_message(
            updated,
            "Inventory updated successfully".to_string(),
        ))
    }
}
