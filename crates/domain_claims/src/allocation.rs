//! Proportional allocation
//!
//! Splits a claim across line items by the relative size of the invoice
//! items they were created from.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Money, Ratio};

use crate::error::ClaimError;

/// Computes the percentage share of each amount relative to their total
///
/// Output preserves input order. When the total is zero every ratio is
/// zero; no division error is possible. Pure function: the same input
/// always yields the same output.
pub fn compute_item_ratios(amounts: &[Money]) -> Vec<Ratio> {
    let total: Decimal = amounts.iter().map(|m| m.amount()).sum();
    amounts
        .iter()
        .map(|m| Ratio::of_amounts(m.amount(), total))
        .collect()
}

/// Advisory check that ratios sum to 100%
///
/// The build path does not enforce this; callers that want the stricter
/// guarantee run it explicitly before settlement.
pub fn validate_ratios(ratios: &[Ratio]) -> Result<(), ClaimError> {
    let total = ratios.iter().copied().sum::<Ratio>().as_percentage();
    if (total - dec!(100)).abs() > dec!(0.01) {
        return Err(ClaimError::Validation(format!(
            "item ratios sum to {}%, expected 100%",
            total
        )));
    }
    Ok(())
}
