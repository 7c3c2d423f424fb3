//! Pre-built test fixtures
//!
//! Ready-to-use claims and invoices matching the worked settlement example
//! (claim 1000, tax 100, items split 60/40). Predictable data keeps the
//! scenario tests readable.

use rust_decimal_macros::dec;

use core_kernel::{AccountId, Currency, Money, PartyId};
use domain_claims::{Claim, Invoice, InvoiceItem};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard claim amount used across scenario tests
    pub fn usd_claim() -> Money {
        Money::new(dec!(1000.00), Currency::USD)
    }

    /// The standard tax amount
    pub fn usd_tax() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// An invoice with two items of 600 and 400 USD
    pub fn invoice_60_40() -> Invoice {
        Invoice::new(
            PartyId::new(),
            Currency::USD,
            vec![
                InvoiceItem::new(Money::new(dec!(600.00), Currency::USD))
                    .with_description("Engineering milestone"),
                InvoiceItem::new(Money::new(dec!(400.00), Currency::USD))
                    .with_description("Commissioning milestone"),
            ],
        )
    }

    /// A claim from [`Self::invoice_60_40`] with every account reference
    /// filled in and tax of 100 USD; ready to settle
    pub fn settleable_claim() -> Claim {
        let mut claim = Claim::from_invoice(&Self::invoice_60_40())
            .with_accounts(AccountId::new(), AccountId::new())
            .with_tax(MoneyFixtures::usd_tax(), AccountId::new());

        for item in &mut claim.items {
            item.unearned_account = Some(AccountId::new());
            item.revenue_account = Some(AccountId::new());
        }

        claim
    }

    /// A claim missing all account references
    pub fn bare_claim() -> Claim {
        Claim::from_invoice(&Self::invoice_60_40())
    }
}
