use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::models::work_order::{WorkOrder, WorkOrderFilters};
use crate::utils::errors::{conflict_error, not_found_error, AppError};

/// Almacenamiento de órdenes de trabajo
///
/// `update` aplica control optimista: `expected_updated_at` debe coincidir
/// con el `updated_at` almacenado, de lo contrario devuelve `Conflict`.
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// Siguiente número de secuencia para el año dado (empieza en 1)
    async fn next_sequence(&self, year: i32) -> Result<u32, AppError>;

    async fn insert(&self, work_order: WorkOrder) -> Result<WorkOrder, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrder>, AppError>;

    async fn list(&self, filters: &WorkOrderFilters) -> Result<Vec<WorkOrder>, AppError>;

    async fn update(
        &self,
        work_order: WorkOrder,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<WorkOrder, AppError>;
}

#[derive(Default)]
pub struct InMemoryWorkOrderRepository {
    work_orders: RwLock<HashMap<Uuid, WorkOrder>>,
    sequences: Mutex<HashMap<i32, u32>>,
}

impl InMemoryWorkOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkOrderRepository for InMemoryWorkOrderRepository {
    async fn next_sequence(&self, year: i32) -> Result<u32, AppError> {
        let mut sequences = self.sequences.lock().await;
        let counter = sequences.entry(year).or_insert(0);
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| AppError::Internal(format!("Work order sequence exhausted for {}", year)))?;
        Ok(*counter)
    }

    async fn insert(&self, work_order: WorkOrder) -> Result<WorkOrder, AppError> {
        let mut work_orders = self.work_orders.write().await;

        if work_orders
            .values()
            .any(|existing| existing.work_order_number() == work_order.work_order_number())
        {
            return Err(conflict_error(
                "Work order",
                "number",
                work_order.work_order_number(),
            ));
        }
        if work_orders.contains_key(&work_order.id) {
            return Err(conflict_error("Work order", "id", &work_order.id.to_string()));
        }

        work_orders.insert(work_order.id, work_order.clone());
        Ok(work_order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrder>, AppError> {
        Ok(self.work_orders.read().await.get(&id).cloned())
    }

    async fn list(&self, filters: &WorkOrderFilters) -> Result<Vec<WorkOrder>, AppError> {
        let work_orders = self.work_orders.read().await;
        let mut result: Vec<WorkOrder> = work_orders
            .values()
            .filter(|wo| filters.matches(wo))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(result)
    }

    async fn update(
        &self,
        work_order: WorkOrder,
        expected_updated_at: DateTime<Utc>,
    ) -> Result<WorkOrder, AppError> {
        let mut work_orders = self.work_orders.write().await;

        let current = work_orders
            .get(&work_order.id)
            .ok_or_else(|| not_found_error("Work order", &work_order.id.to_string()))?;

        if current.updated_at() != expected_updated_at {
            return Err(AppError::Conflict(format!(
                "Work order {} was modified concurrently",
                current.work_order_number()
            )));
        }
        if current.work_order_number() != work_order.work_order_number() {
            return Err(AppError::Conflict(
                "Work order number cannot change".to_string(),
            ));
        }

        work_orders.insert(work_order.id, work_order.clone());
        Ok(work_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work_order::WorkOrderStatus;
    use crate::services::work_order_service::tests::sample_intake;
    use crate::services::work_order_service::{create_work_order, transition_status};
    use chrono::Duration;

    #[tokio::test]
    async fn test_sequences_are_per_year() {
        let repo = InMemoryWorkOrderRepository::new();
        assert_eq!(repo.next_sequence(2024).await.unwrap(), 1);
        assert_eq!(repo.next_sequence(2024).await.unwrap(), 2);
        assert_eq!(repo.next_sequence(2025).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_number_is_rejected() {
        let repo = InMemoryWorkOrderRepository::new();
        let now = Utc::now();
        let first = create_work_order(sample_intake(now), "WO-2024-001".to_string(), now).unwrap();
        let second = create_work_order(sample_intake(now), "WO-2024-001".to_string(), now).unwrap();

        repo.insert(first).await.unwrap();
        assert!(matches!(repo.insert(second).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_stale_update_is_a_conflict() {
        let repo = InMemoryWorkOrderRepository::new();
        let now = Utc::now();
        let order = create_work_order(sample_intake(now), "WO-2024-001".to_string(), now).unwrap();
        let order = repo.insert(order).await.unwrap();

        let started = transition_status(&order, WorkOrderStatus::InProgress, now + Duration::seconds(1)).unwrap();
        repo.update(started, order.updated_at()).await.unwrap();

        // Segundo escritor con la versión vieja
        let cancelled = transition_status(&order, WorkOrderStatus::Cancelled, now + Duration::seconds(2)).unwrap();
        assert!(matches!(
            repo.update(cancelled, order.updated_at()).await,
            Err(AppError::Conflict(_))
        ));

        let stored = repo.find_by_id(order.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), WorkOrderStatus::InProgress);
    }

    #[tokio::test]
    async fn test_list_applies_filters() {
        let repo = InMemoryWorkOrderRepository::new();
        let now = Utc::now();
        let a = create_work_order(sample_intake(now), "WO-2024-001".to_string(), now).unwrap();
        let b = create_work_order(sample_intake(now), "WO-2024-002".to_string(), now).unwrap();
        let b_started = transition_status(&b, WorkOrderStatus::InProgress, now).unwrap();
        repo.insert(a.clone()).await.unwrap();
        repo.insert(b_started).await.unwrap();

        let pending = repo
            .list(&WorkOrderFilters {
                status: Some(WorkOrderStatus::Pending),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, a.id);

        let by_customer = repo
            .list(&WorkOrderFilters {
                customer_id: Some(a.customer_id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_customer.len(), 1);
        assert_eq!(repo.list(&WorkOrderFilters::default()).await.unwrap().len(), 2);
    }
}
