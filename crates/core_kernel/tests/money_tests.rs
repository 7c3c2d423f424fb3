//! Integration tests for money and ratio arithmetic

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, MoneyError, Ratio};

#[test]
fn money_subtraction_for_net_receipt() {
    // The receiving-account posting is claim amount minus tax
    let claim = Money::new(dec!(1000.00), Currency::USD);
    let tax = Money::new(dec!(100.00), Currency::USD);

    let net = claim.checked_sub(&tax).unwrap();
    assert_eq!(net.amount(), dec!(900.00));
}

#[test]
fn money_rejects_cross_currency_subtraction() {
    let claim = Money::new(dec!(1000.00), Currency::USD);
    let tax = Money::new(dec!(100.00), Currency::INR);

    assert!(matches!(
        claim.checked_sub(&tax),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
}

#[test]
fn ratio_shares_recover_the_split() {
    let claim = Money::new(dec!(1000.00), Currency::USD);

    let sixty = Ratio::from_percentage(dec!(60)).apply(&claim);
    let forty = Ratio::from_percentage(dec!(40)).apply(&claim);

    assert_eq!(sixty.amount(), dec!(600.00));
    assert_eq!(forty.amount(), dec!(400.00));
    assert_eq!((sixty + forty).amount(), claim.amount());
}

#[test]
fn ratio_of_amounts_is_pure() {
    let first = Ratio::of_amounts(dec!(250), dec!(1000));
    let second = Ratio::of_amounts(dec!(250), dec!(1000));

    assert_eq!(first, second);
    assert_eq!(first.as_percentage(), dec!(25));
}

#[test]
fn zero_money_display() {
    let zero = Money::zero(Currency::EUR);
    assert_eq!(zero.to_string(), "EUR 0.00");
}
