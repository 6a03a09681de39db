pub mod customer_controller;
pub mod dashboard_controller;
pub mod inventory_controller;
pub mod vehicle_controller;
pub mod work_order_controller;
