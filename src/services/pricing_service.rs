//! Cálculo de importes de una orden de trabajo
//!
//! El impuesto se aplica sobre el subtotal combinado (repuestos + mano de
//! obra), nunca por línea. La aritmética es decimal exacta; el redondeo a
//! 2 decimales ocurre solo al presentar (`WorkOrderTotals::rounded`).

use rust_decimal::Decimal;

use crate::models::work_order::{PartLine, WorkOrderTotals};
use crate::utils::errors::WorkOrderError;
use crate::utils::validation::ensure_non_negative;

/// Calcula los totales derivados de una orden
pub fn compute_totals(
    labor_hours: Decimal,
    labor_rate: Decimal,
    parts: &[PartLine],
    tax_rate: Decimal,
) -> Result<WorkOrderTotals, WorkOrderError> {
    ensure_non_negative("labor_hours", labor_hours)?;
    ensure_non_negative("labor_rate", labor_rate)?;
    ensure_non_negative("tax_rate", tax_rate)?;
    for (index, part) in parts.iter().enumerate() {
        ensure_non_negative(&format!("parts[{}].quantity", index), part.quantity)?;
        ensure_non_negative(&format!("parts[{}].unit_price", index), part.unit_price)?;
    }

    let parts_total = parts
        .iter()
        .map(|part| checked_mul(part.quantity, part.unit_price, "parts_total"))
        .try_fold(Decimal::ZERO, |acc, line| {
            line.and_then(|value| checked_add(acc, value, "parts_total"))
        })?;
    let labor_total = checked_mul(labor_hours, labor_rate, "labor_total")?;
    let subtotal = checked_add(parts_total, labor_total, "subtotal")?;
    let tax_amount = checked_mul(subtotal, tax_rate, "tax_amount")?;
    let total_amount = checked_add(subtotal, tax_amount, "total_amount")?;

    Ok(WorkOrderTotals {
        parts_total,
        labor_total,
        tax_amount,
        total_amount,
    })
}

fn checked_mul(a: Decimal, b: Decimal, field: &str) -> Result<Decimal, WorkOrderError> {
    a.checked_mul(b)
        .ok_or_else(|| WorkOrderError::validation(field, "amount is too large"))
}

fn checked_add(a: Decimal, b: Decimal, field: &str) -> Result<Decimal, WorkOrderError> {
    a.checked_add(b)
        .ok_or_else(|| WorkOrderError::validation(field, "amount is too large"))
}
