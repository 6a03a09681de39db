//! Modelo de inventario de repuestos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::work_order::PartCategory;

/// Repuesto en almacén
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub part_number: String,
    pub name: String,
    pub description: String,
    pub category: PartCategory,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub maximum_stock: u32,
    pub unit_price: Decimal,
    pub supplier: String,
    /// Pasillo/estante, p. ej. `A-15`
    pub location: String,
    pub bin_number: Option<String>,
    pub last_restocked: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Por debajo del mínimo configurado
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.minimum_stock
    }

    /// Valor en almacén (`current_stock * unit_price`); `None` si desborda
    pub fn stock_value(&self) -> Option<Decimal> {
        Decimal::from(self.current_stock).checked_mul(self.unit_price)
    }
}

/// Filtros para el listado de inventario
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryFilters {
    pub category: Option<PartCategory>,
    #[serde(default)]
    pub low_stock: bool,
}

impl InventoryFilters {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.category.map_or(true, |c| item.category == c) && (!self.low_stock || item.is_low_stock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current_stock: u32, minimum_stock: u32) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id: Uuid::new_v4(),
            part_number: "BRK-002".to_string(),
            name: "Brake Pads Set".to_string(),
            description: String::new(),
            category: PartCategory::Brakes,
            current_stock,
            minimum_stock,
            maximum_stock: 50,
            unit_price: Decimal::new(8999, 2),
            supplier: "BrakeTech".to_string(),
            location: "B-22".to_string(),
            bin_number: None,
            last_restocked: now,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_low_stock_is_strictly_below_minimum() {
        assert!(item(8, 15).is_low_stock());
        assert!(!item(15, 15).is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(item(8, 15).stock_value(), Some(Decimal::new(71992, 2)));
    }

    #[test]
    fn test_filters() {
        let low = InventoryFilters { category: None, low_stock: true };
        assert!(low.matches(&item(3, 10)));
        assert!(!low.matches(&item(30, 10)));

        let filters = InventoryFilters { category: Some(PartCategory::Filters), low_stock: false };
        assert!(!filters.matches(&item(3, 10)));
    }
}
