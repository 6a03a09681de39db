use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_response::{ApiResponse, PaginatedResponse};
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerListQuery, UpdateCustomerRequest};
use crate::models::customer::Customer;
use crate::repositories::customer_repository::CustomerRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

const DEFAULT_PAGE_SIZE: u32 = 10;

pub struct CustomerController {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.customers.clone(),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            phone: request.phone,
            address: request.address,
            date_of_birth: request.date_of_birth,
            emergency_contact: request.emergency_contact,
            customer_type: request.customer_type,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let customer = self.repository.create(customer).await?;
        info!("👤 Cliente registrado: {} ({})", customer.full_name(), customer.id);

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", &id.to_string()))
    }

    pub async fn list(&self, query: CustomerListQuery) -> Result<PaginatedResponse<Customer>, AppError> {
        query.validate()?;

        let page = query.page.unwrap_or(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = (page as usize - 1).saturating_mul(limit as usize);

        let (customers, total) = self.repository.list_page(offset, limit as usize).await?;
        Ok(PaginatedResponse::new(customers, total, page, limit))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let mut customer = self.get_by_id(id).await?;
        if let Some(first_name) = request.first_name {
            customer.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = request.last_name {
            customer.last_name = last_name.trim().to_string();
        }
        if let Some(email) = request.email {
            customer.email = email.trim().to_lowercase();
        }
        if let Some(phone) = request.phone {
            customer.phone = phone;
        }
        if let Some(address) = request.address {
            customer.address = address;
        }
        if let Some(contact) = request.emergency_contact {
            customer.emergency_contact = Some(contact);
        }
        if let Some(customer_type) = request.customer_type {
            customer.customer_type = customer_type;
        }
        if let Some(is_active) = request.is_active {
            customer.is_active = is_active;
        }
        customer.updated_at = Utc::now();

        let customer = self.repository.update(customer).await?;
        info!("✏️ Cliente actualizado: {} ({})", customer.full_name(), customer.id);

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer updated successfully".to_string(),
        ))
    }
}
