//! Reglas de stock del almacén de repuestos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::inventory::InventoryItem;
use crate::utils::errors::WorkOrderError;

/// Fija el stock de un repuesto; una subida cuenta como reposición
pub fn adjust_stock(
    item: &InventoryItem,
    quantity: u32,
    now: DateTime<Utc>,
) -> Result<InventoryItem, WorkOrderError> {
    if !item.is_active {
        return Err(WorkOrderError::validation(
            "is_active",
            format!("part {} is no longer stocked", item.part_number),
        ));
    }
    if quantity > item.maximum_stock {
        return Err(WorkOrderError::validation(
            "quantity",
            format!("exceeds maximum stock of {}", item.maximum_stock),
        ));
    }

    let mut updated = item.clone();
    if quantity > item.current_stock {
        updated.last_restocked = now;
    }
    updated.current_stock = quantity;
    updated.updated_at = now;

    Ok(updated)
}

/// Valor total y repuestos bajo mínimo, solo sobre los activos
pub fn inventory_summary(items: &[InventoryItem]) -> Result<(Decimal, usize), WorkOrderError> {
    let too_large = || WorkOrderError::validation("inventory_value", "amount is too large");
    let mut value = Decimal::ZERO;
    let mut low_stock = 0;

    for item in items.iter().filter(|i| i.is_active) {
        let line = item.stock_value().ok_or_else(too_large)?;
        value = value.checked_add(line).ok_or_else(too_large)?;
        if item.is_low_stock() {
            low_stock += 1;
        }
    }

    Ok((value, low_stock))
}
