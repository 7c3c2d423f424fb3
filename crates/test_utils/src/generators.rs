//! Property-based test generators
//!
//! Proptest strategies producing domain values that respect invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, Ratio};

/// Strategy for generating Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::INR),
        Just(Currency::AED),
        Just(Currency::SGD),
    ]
}

/// Strategy for positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for positive USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy()
        .prop_map(|minor| Money::new(Decimal::new(minor, 2), Currency::USD))
}

/// Strategy for non-empty lists of positive USD amounts
pub fn usd_amount_list_strategy() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(usd_money_strategy(), 1..25)
}

/// Strategy for percentage ratios in 0-100
pub fn ratio_strategy() -> impl Strategy<Value = Ratio> {
    (0u32..=10000u32).prop_map(|basis_points| {
        Ratio::from_percentage(Decimal::new(basis_points as i64, 2))
    })
}
