use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::inventory::{InventoryFilters, InventoryItem};
use crate::models::work_order::PartCategory;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError>;

    async fn list(&self, filters: &InventoryFilters) -> Result<Vec<InventoryItem>, AppError>;

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, AppError>;
}

#[derive(Default)]
pub struct InMemoryInventoryRepository {
    items: RwLock<HashMap<Uuid, InventoryItem>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén de demostración: un filtro con stock y pastillas de freno bajo mínimo
    pub fn with_seed_items(now: DateTime<Utc>) -> Self {
        let item = |part_number: &str,
                    name: &str,
                    description: &str,
                    category: PartCategory,
                    (current, minimum, maximum): (u32, u32, u32),
                    unit_price: Decimal,
                    supplier: &str,
                    location: &str,
                    restocked_days_ago: i64| InventoryItem {
            id: Uuid::new_v4(),
            part_number: part_number.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            current_stock: current,
            minimum_stock: minimum,
            maximum_stock: maximum,
            unit_price,
            supplier: supplier.to_string(),
            location: location.to_string(),
            bin_number: Some(format!("{}-{}", location.replace('-', ""), &part_number[4..])),
            last_restocked: now - Duration::days(restocked_days_ago),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let items = [
            item(
                "FIL-001",
                "Engine Oil Filter",
                "High-quality engine oil filter for most vehicles",
                PartCategory::Filters,
                (25, 10, 100),
                Decimal::new(1299, 2),
                "AutoParts Inc",
                "A-15",
                5,
            ),
            item(
                "BRK-002",
                "Brake Pads Set",
                "Ceramic brake pads for front wheels",
                PartCategory::Brakes,
                (8, 15, 50),
                Decimal::new(8999, 2),
                "BrakeTech",
                "B-22",
                10,
            ),
        ];

        Self {
            items: RwLock::new(items.into_iter().map(|i| (i.id, i)).collect()),
        }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        let mut items = self.items.write().await;

        if items
            .values()
            .any(|i| i.part_number.eq_ignore_ascii_case(&item.part_number))
        {
            return Err(conflict_error("Inventory item", "part number", &item.part_number));
        }

        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list(&self, filters: &InventoryFilters) -> Result<Vec<InventoryItem>, AppError> {
        let mut items: Vec<InventoryItem> = self
            .items
            .read()
            .await
            .values()
            .filter(|i| filters.matches(i))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.part_number.cmp(&b.part_number));
        Ok(items)
    }

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item)
            }
            None => Err(not_found_error("Inventory item", &item.id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_items_are_listed_by_part_number() {
        let repo = InMemoryInventoryRepository::with_seed_items(Utc::now());
        let items = repo.list(&InventoryFilters::default()).await.unwrap();

        let numbers: Vec<&str> = items.iter().map(|i| i.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["BRK-002", "FIL-001"]);
        assert_eq!(items[0].bin_number.as_deref(), Some("B22-002"));
    }

    #[tokio::test]
    async fn test_duplicate_part_number_is_a_conflict() {
        let repo = InMemoryInventoryRepository::with_seed_items(Utc::now());
        let mut copy = repo.list(&InventoryFilters::default()).await.unwrap().remove(0);
        copy.id = Uuid::new_v4();
        copy.part_number = copy.part_number.to_lowercase();

        assert!(matches!(repo.create(copy).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_not_found() {
        let repo = InMemoryInventoryRepository::new();
        let seeded = InMemoryInventoryRepository::with_seed_items(Utc::now());
        let item = seeded.list(&InventoryFilters::default()).await.unwrap().remove(0);

        assert!(matches!(repo.update(item).await, Err(AppError::NotFound(_))));
    }
}
