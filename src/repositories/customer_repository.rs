use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::customer::Customer;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: Customer) -> Result<Customer, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError>;

    /// Página de clientes (más recientes primero) y el total sin paginar
    async fn list_page(&self, offset: usize, limit: usize) -> Result<(Vec<Customer>, usize), AppError>;

    async fn update(&self, customer: Customer) -> Result<Customer, AppError>;

    async fn count(&self) -> Result<usize, AppError>;
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(customers: &HashMap<Uuid, Customer>, customer: &Customer) -> bool {
    customers
        .values()
        .any(|c| c.id != customer.id && c.email.eq_ignore_ascii_case(&customer.email))
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut customers = self.customers.write().await;

        if email_taken(&customers, &customer) {
            return Err(conflict_error("Customer", "email", &customer.email));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn list_page(&self, offset: usize, limit: usize) -> Result<(Vec<Customer>, usize), AppError> {
        let customers = self.customers.read().await;
        let mut all: Vec<&Customer> = customers.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        let page = all.into_iter().skip(offset).take(limit).cloned().collect();
        Ok((page, customers.len()))
    }

    async fn update(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut customers = self.customers.write().await;

        if !customers.contains_key(&customer.id) {
            return Err(not_found_error("Customer", &customer.id.to_string()));
        }
        if email_taken(&customers, &customer) {
            return Err(conflict_error("Customer", "email", &customer.email));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.customers.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::{Address, CustomerType};
    use chrono::{Duration, Utc};

    fn customer(email: &str, minutes_ago: i64) -> Customer {
        let created = Utc::now() - Duration::minutes(minutes_ago);
        Customer {
            id: Uuid::new_v4(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: "+1-555-0123".to_string(),
            address: Address {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                state: "CA".to_string(),
                zip_code: "12345".to_string(),
            },
            date_of_birth: None,
            emergency_contact: None,
            customer_type: CustomerType::Individual,
            is_active: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn test_pages_are_newest_first() {
        let repo = InMemoryCustomerRepository::new();
        for n in 0..5 {
            repo.create(customer(&format!("c{}@email.com", n), n)).await.unwrap();
        }

        let (first, total) = repo.list_page(0, 2).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(first.iter().map(|c| c.email.as_str()).collect::<Vec<_>>(), ["c0@email.com", "c1@email.com"]);

        let (last, _) = repo.list_page(4, 2).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].email, "c4@email.com");

        let (beyond, _) = repo.list_page(10, 2).await.unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_emails_unique() {
        let repo = InMemoryCustomerRepository::new();
        let john = repo.create(customer("john.doe@email.com", 0)).await.unwrap();
        repo.create(customer("jane.smith@email.com", 0)).await.unwrap();

        let mut renamed = john.clone();
        renamed.last_name = "Doe-Smith".to_string();
        assert_eq!(repo.update(renamed).await.unwrap().last_name, "Doe-Smith");

        let mut clash = john;
        clash.email = "JANE.SMITH@email.com".to_string();
        assert!(matches!(repo.update(clash).await, Err(AppError::Conflict(_))));

        let stranger = customer("nobody@email.com", 0);
        assert!(matches!(repo.update(stranger).await, Err(AppError::NotFound(_))));
    }
}
