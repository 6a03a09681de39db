pub mod api_response;
pub mod customer_dto;
pub mod inventory_dto;
pub mod vehicle_dto;
pub mod work_order_dto;
