use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::work_order::WorkOrderTotals;

/// Redondeo de importes para mostrar o persistir (2 decimales, mitad hacia arriba)
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl WorkOrderTotals {
    /// Copia con cada importe redondeado; los valores internos quedan exactos
    pub fn rounded(&self) -> WorkOrderTotals {
        WorkOrderTotals {
            parts_total: round_money(self.parts_total),
            labor_total: round_money(self.labor_total),
            tax_amount: round_money(self.tax_amount),
            total_amount: round_money(self.total_amount),
        }
    }
}
