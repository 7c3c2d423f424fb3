//! Source invoice snapshot
//!
//! Claims are raised against an invoice; the claim copies the invoice's
//! monetary position at creation time and splits its items proportionally.
//! Only the fields the claim needs are modeled here.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvoiceId, InvoiceItemId, Money, PartyId};

/// One line of a source invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub description: Option<String>,
    pub amount: Money,
}

impl InvoiceItem {
    /// Creates a new invoice item
    pub fn new(amount: Money) -> Self {
        Self {
            id: InvoiceItemId::new(),
            description: None,
            amount,
        }
    }

    /// Adds a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Snapshot of the invoice a claim is created from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub party: PartyId,
    pub currency: Currency,
    pub total_amount: Money,
    pub outstanding_amount: Money,
    pub paid_amount: Money,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Creates an unpaid invoice whose total is the sum of its items
    pub fn new(party: PartyId, currency: Currency, items: Vec<InvoiceItem>) -> Self {
        let total_amount = items
            .iter()
            .fold(Money::zero(currency), |acc, item| acc + item.amount);

        Self {
            id: InvoiceId::new_v7(),
            party,
            currency,
            total_amount,
            outstanding_amount: total_amount,
            paid_amount: Money::zero(currency),
            items,
        }
    }
}
